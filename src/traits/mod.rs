pub mod surface;
pub mod window;

pub use surface::*;
pub use window::*;
