use log::debug;

use super::canvas::Canvas;
use super::rasterizer::{self, RenderStats};
use super::viewport::{Trigger, ViewportMetrics};
use crate::descriptor::ImageDescriptor;
use crate::error::PixelError;
use crate::math::compute_scale;
use crate::traits::DrawSurface;

/// One complete pass: fit the image to the viewport, size the surface, draw
pub fn render_pass(
    surface: &mut dyn DrawSurface,
    descriptor: &ImageDescriptor,
    metrics: ViewportMetrics,
) -> Result<RenderStats, PixelError> {
    let scale = compute_scale(
        metrics.width,
        metrics.height,
        descriptor.width,
        descriptor.height,
    );

    rasterizer::size_surface(
        surface,
        descriptor.width,
        descriptor.height,
        scale,
        metrics.device_pixel_ratio,
    );

    rasterizer::render(
        surface,
        descriptor.width,
        descriptor.height,
        scale,
        &descriptor.colors,
        &descriptor.data,
    )
}

/// Holds the descriptor and the canvas it is drawn into for a viewer session.
///
/// Every pass recomputes from scratch, so re-running with unchanged metrics
/// reproduces the same pixels.
pub struct RenderSession {
    descriptor: ImageDescriptor,
    canvas: Canvas,
    passes: u64,
}

impl RenderSession {
    pub fn new(descriptor: ImageDescriptor) -> Self {
        Self {
            descriptor,
            canvas: Canvas::default(),
            passes: 0,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Number of completed passes
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn render(
        &mut self,
        metrics: ViewportMetrics,
        trigger: Trigger,
    ) -> Result<&Canvas, PixelError> {
        let stats = render_pass(&mut self.canvas, &self.descriptor, metrics)?;
        self.passes += 1;

        let (width, height) = self.canvas.dimensions();
        debug!(
            "pass {} ({}): viewport {:.0}x{:.0} @{}x -> canvas {}x{}, {} drawn, {} empty",
            self.passes,
            trigger,
            metrics.width,
            metrics.height,
            metrics.device_pixel_ratio,
            width,
            height,
            stats.drawn,
            stats.skipped
        );

        Ok(&self.canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::MetadataId;

    fn checker() -> ImageDescriptor {
        ImageDescriptor {
            metadata: "checker".into(),
            metadata_id: MetadataId::Number(1u64.into()),
            width: 2,
            height: 2,
            colors: vec!["#FFFFFF".into(), "#000000".into()],
            data: "0x01020201".into(),
        }
    }

    #[test]
    fn test_session_render_fits_viewport() {
        let mut session = RenderSession::new(checker());
        let canvas = session
            .render(ViewportMetrics::new(100.0, 50.0, 2.0), Trigger::Load)
            .unwrap();

        // scale 25, dpr 2
        assert_eq!(canvas.dimensions(), (100, 100));
        assert_eq!(canvas.css_size(), (50.0, 50.0));
        assert_eq!(canvas.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(50, 0), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(99, 99), Some([255, 255, 255, 255]));
        assert_eq!(session.passes(), 1);
    }

    #[test]
    fn test_session_resize_rerenders() {
        let mut session = RenderSession::new(checker());
        session
            .render(ViewportMetrics::new(100.0, 100.0, 1.0), Trigger::Load)
            .unwrap();
        let canvas = session
            .render(ViewportMetrics::new(10.0, 40.0, 1.0), Trigger::Resize)
            .unwrap();

        assert_eq!(canvas.dimensions(), (10, 10));
        assert_eq!(session.passes(), 2);
    }

    #[test]
    fn test_session_idempotent() {
        let metrics = ViewportMetrics::new(333.0, 217.0, 1.5);
        let mut session = RenderSession::new(checker());
        let first = session.render(metrics, Trigger::Load).unwrap().pixels().to_vec();
        let second = session.render(metrics, Trigger::Resize).unwrap().pixels().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_session_zero_viewport() {
        let mut session = RenderSession::new(checker());
        let canvas = session
            .render(ViewportMetrics::new(0.0, 0.0, 1.0), Trigger::Resize)
            .unwrap();
        assert_eq!(canvas.dimensions(), (0, 0));
    }
}
