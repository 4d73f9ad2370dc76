pub mod canvas;
pub mod display_list;
pub mod gpu_context;
pub mod rasterizer;
pub mod session;
pub mod surface_renderer;
pub mod viewport;

pub use canvas::Canvas;
pub use display_list::{DisplayList, DrawOp};
pub use gpu_context::GpuContext;
pub use rasterizer::{decode_pixel, render, size_surface, RenderStats};
pub use session::{render_pass, RenderSession};
pub use surface_renderer::{PresentOutcome, SurfaceRenderer};
pub use viewport::{Trigger, ViewportMetrics};
