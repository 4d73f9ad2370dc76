use std::sync::Arc;
use winit::window::Window as WinitWindow;

use crate::core::ViewportMetrics;
use crate::traits::ViewportSource;

/// Wrapper around winit Window acting as the viewport source
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics::from_source(self)
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}

impl ViewportSource for Window {
    fn inner_size(&self) -> (u32, u32) {
        let size = self.inner.inner_size();
        (size.width, size.height)
    }

    fn scale_factor(&self) -> f64 {
        self.inner.scale_factor()
    }
}
