use crate::math::Rgba;

/// A 2D drawing target with a backing store and a scale transform.
///
/// Mirrors an HTML canvas: setting the backing size discards contents and
/// resets the transform, and draw coordinates are multiplied by the current
/// transform before they reach the backing store.
pub trait DrawSurface {
    /// Resize the backing store in device pixels, clearing it
    fn set_backing_size(&mut self, width: u32, height: u32);

    /// On-screen size in CSS (logical) pixels
    fn set_css_size(&mut self, width: f64, height: f64);

    /// Multiply the current transform by a scale
    fn scale(&mut self, sx: f64, sy: f64);

    /// Reset a rectangle to transparent
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Composite a solid rectangle over the existing contents
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);
}
