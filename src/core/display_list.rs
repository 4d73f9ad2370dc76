use crate::math::Rgba;
use crate::traits::DrawSurface;

/// 2D drawing operations issued against a surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Backing store resized (device pixels)
    BackingSize { width: u32, height: u32 },

    /// On-screen size set (CSS pixels)
    CssSize { width: f64, height: f64 },

    /// Transform scaled
    Scale { sx: f64, sy: f64 },

    /// Rect reset to transparent
    ClearRect { x: f64, y: f64, width: f64, height: f64 },

    /// Solid rect filled
    FillRect { x: f64, y: f64, width: f64, height: f64, color: Rgba },
}

/// Surface that records every call instead of drawing
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    operations: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operations(&self) -> &[DrawOp] {
        &self.operations
    }

    /// Only the fill operations, in draw order
    pub fn fills(&self) -> impl Iterator<Item = &DrawOp> {
        self.operations
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. }))
    }

    /// Replay the recorded operations onto another surface
    pub fn replay(&self, target: &mut dyn DrawSurface) {
        for op in &self.operations {
            match *op {
                DrawOp::BackingSize { width, height } => target.set_backing_size(width, height),
                DrawOp::CssSize { width, height } => target.set_css_size(width, height),
                DrawOp::Scale { sx, sy } => target.scale(sx, sy),
                DrawOp::ClearRect { x, y, width, height } => target.clear_rect(x, y, width, height),
                DrawOp::FillRect { x, y, width, height, color } => {
                    target.fill_rect(x, y, width, height, color)
                }
            }
        }
    }
}

impl DrawSurface for DisplayList {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.operations.push(DrawOp::BackingSize { width, height });
    }

    fn set_css_size(&mut self, width: f64, height: f64) {
        self.operations.push(DrawOp::CssSize { width, height });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.operations.push(DrawOp::Scale { sx, sy });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.operations.push(DrawOp::ClearRect { x, y, width, height });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.operations.push(DrawOp::FillRect { x, y, width, height, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Canvas;

    #[test]
    fn records_in_call_order() {
        let mut list = DisplayList::new();
        list.set_backing_size(4, 4);
        list.scale(2.0, 2.0);
        list.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba::opaque(1, 2, 3));

        assert_eq!(
            list.operations(),
            &[
                DrawOp::BackingSize { width: 4, height: 4 },
                DrawOp::Scale { sx: 2.0, sy: 2.0 },
                DrawOp::FillRect { x: 0.0, y: 0.0, width: 1.0, height: 1.0, color: Rgba::opaque(1, 2, 3) },
            ]
        );
        assert_eq!(list.fills().count(), 1);
    }

    #[test]
    fn replay_matches_direct_drawing() {
        let mut list = DisplayList::new();
        list.set_backing_size(8, 8);
        list.scale(2.0, 2.0);
        list.clear_rect(0.0, 0.0, 4.0, 4.0);
        list.fill_rect(1.0, 1.0, 2.0, 1.0, Rgba::opaque(200, 10, 10));

        let mut replayed = Canvas::default();
        list.replay(&mut replayed);

        let mut direct = Canvas::default();
        direct.set_backing_size(8, 8);
        direct.scale(2.0, 2.0);
        direct.clear_rect(0.0, 0.0, 4.0, 4.0);
        direct.fill_rect(1.0, 1.0, 2.0, 1.0, Rgba::opaque(200, 10, 10));

        assert_eq!(replayed.pixels(), direct.pixels());
        assert_eq!(replayed.pixel(2, 2), Some([200, 10, 10, 255]));
    }
}
