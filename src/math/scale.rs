/// Largest uniform scale that fits the image inside the viewport
pub fn compute_scale(
    viewport_width: f64,
    viewport_height: f64,
    image_width: u32,
    image_height: u32,
) -> f64 {
    (viewport_width / image_width as f64).min(viewport_height / image_height as f64)
}
