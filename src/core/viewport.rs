use std::fmt;

use crate::traits::ViewportSource;

/// Viewport metrics sampled at the start of a render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Width in CSS pixels
    pub width: f64,
    /// Height in CSS pixels
    pub height: f64,
    /// Device pixels per CSS pixel
    pub device_pixel_ratio: f64,
}

impl ViewportMetrics {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Build metrics from a physical size and a HiDPI scale factor
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        Self::new(
            width as f64 / scale_factor,
            height as f64 / scale_factor,
            scale_factor,
        )
    }

    pub fn from_source(source: &dyn ViewportSource) -> Self {
        let (width, height) = source.inner_size();
        Self::from_physical(width, height, source.scale_factor())
    }
}

/// What caused a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// First pass after the window is created
    Load,
    /// Viewport size changed
    Resize,
    /// Device pixel ratio changed
    ScaleFactorChanged,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Trigger::Load => "load",
            Trigger::Resize => "resize",
            Trigger::ScaleFactorChanged => "scale-factor",
        };
        f.write_str(name)
    }
}
