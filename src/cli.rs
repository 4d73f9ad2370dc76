// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::descriptor::DEFAULT_APP_NAME;

#[derive(Parser, Debug, Clone)]
#[command(name = "higgs-pixel")]
#[command(about = "Pixel-art token viewer", long_about = None)]
pub struct Cli {
    /// JSON token record (metadata, metadataId, width, height, colors, data)
    pub token: PathBuf,

    /// Application name shown in the window title
    #[arg(long, default_value = DEFAULT_APP_NAME)]
    pub app_name: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Letterbox color behind the image (RRGGBB or RRGGBBAA)
    #[arg(long, default_value = "#000000")]
    pub background: String,
}
