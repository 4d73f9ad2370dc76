//! Decode-and-draw for packed hex pixel buffers.
//!
//! A buffer is a two character prefix (conventionally `0x`) followed by one
//! hex digit pair per pixel in row-major order. Value `0` is an empty pixel;
//! any other value `n` selects palette slot `n - 1`.

use log::trace;

use crate::error::PixelError;
use crate::math::{hex_byte, index_to_coord, parse_color, Rgba};
use crate::traits::DrawSurface;

/// Characters before the first digit pair
pub const PREFIX_LEN: usize = 2;

/// Counts from one render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    pub skipped: usize,
}

/// Palette slot for the pixel at `index`, or `None` for an empty pixel
pub fn decode_pixel(buffer: &str, index: usize) -> Result<Option<usize>, PixelError> {
    let offset = PREFIX_LEN + 2 * index;
    let pair = buffer
        .as_bytes()
        .get(offset..offset + 2)
        .ok_or(PixelError::InvalidHex { offset })?;
    let value = hex_byte(pair[0], pair[1]).ok_or(PixelError::InvalidHex { offset })?;

    Ok(value.checked_sub(1).map(usize::from))
}

/// Size the surface for an image at `scale` on a display with `device_pixel_ratio`.
///
/// The backing store gets device pixels, the on-screen size gets CSS pixels,
/// and the transform is scaled so later draws work in CSS pixels.
pub fn size_surface(
    surface: &mut dyn DrawSurface,
    image_width: u32,
    image_height: u32,
    scale: f64,
    device_pixel_ratio: f64,
) {
    let css_width = image_width as f64 * scale;
    let css_height = image_height as f64 * scale;

    // fractional backing sizes truncate
    surface.set_backing_size(
        (css_width * device_pixel_ratio) as u32,
        (css_height * device_pixel_ratio) as u32,
    );
    surface.set_css_size(css_width, css_height);
    surface.scale(device_pixel_ratio, device_pixel_ratio);
}

/// Clear the image area and fill one `scale`-sized square per non-empty pixel
pub fn render<S: AsRef<str>>(
    surface: &mut dyn DrawSurface,
    image_width: u32,
    image_height: u32,
    scale: f64,
    palette: &[S],
    buffer: &str,
) -> Result<RenderStats, PixelError> {
    surface.clear_rect(
        0.0,
        0.0,
        image_width as f64 * scale,
        image_height as f64 * scale,
    );

    let mut resolved: Vec<Option<Rgba>> = vec![None; palette.len()];
    let mut stats = RenderStats::default();
    let total = image_width as usize * image_height as usize;

    for i in 0..total {
        let Some(slot) = decode_pixel(buffer, i)? else {
            stats.skipped += 1;
            continue;
        };

        let color = match resolved.get(slot) {
            Some(Some(color)) => *color,
            Some(None) => {
                let color = parse_color(palette[slot].as_ref())?;
                resolved[slot] = Some(color);
                color
            }
            None => {
                return Err(PixelError::PaletteIndex {
                    pixel: i,
                    index: slot,
                    len: palette.len(),
                })
            }
        };

        let (x, y) = index_to_coord(i, image_width);
        surface.fill_rect(x as f64 * scale, y as f64 * scale, scale, scale, color);
        stats.drawn += 1;
    }

    trace!("drew {} pixels, skipped {}", stats.drawn, stats.skipped);
    Ok(stats)
}
