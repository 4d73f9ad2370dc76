/// Source of the current viewport size and HiDPI scale
pub trait ViewportSource {
    /// Get the inner size of the window in physical pixels
    fn inner_size(&self) -> (u32, u32);

    /// Get the scale factor for HiDPI displays
    fn scale_factor(&self) -> f64;
}
