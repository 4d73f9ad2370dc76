pub mod cli;
pub mod core;
pub mod descriptor;
pub mod error;
pub mod math;
pub mod traits;
pub mod window;

pub use descriptor::{ImageDescriptor, MetadataId};
pub use error::PixelError;
