mod color;
mod grid;
mod scale;

pub use color::{hex_byte, parse_color, round_to, srgb_to_linear, Rgba};
pub use grid::{coord_to_index, index_to_coord};
pub use scale::compute_scale;
