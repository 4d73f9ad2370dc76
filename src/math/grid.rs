/// Row-major pixel index to (x, y). `width` must be non-zero.
pub fn index_to_coord(index: usize, width: u32) -> (u32, u32) {
    debug_assert!(width > 0, "index_to_coord needs a non-zero width");
    let width = width as usize;
    ((index % width) as u32, (index / width) as u32)
}

/// Inverse of [`index_to_coord`]
pub fn coord_to_index(x: u32, y: u32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_coord_first_row() {
        assert_eq!(index_to_coord(0, 4), (0, 0));
        assert_eq!(index_to_coord(3, 4), (3, 0));
    }

    #[test]
    fn test_index_to_coord_wraps_rows() {
        assert_eq!(index_to_coord(4, 4), (0, 1));
        assert_eq!(index_to_coord(11, 4), (3, 2));
    }

    #[test]
    fn test_single_column() {
        assert_eq!(index_to_coord(7, 1), (0, 7));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-zero width")]
    fn test_zero_width_asserts() {
        index_to_coord(0, 0);
    }

    #[test]
    fn test_round_trip() {
        for width in [1, 2, 3, 16, 37] {
            for index in 0..(width as usize * 9) {
                let (x, y) = index_to_coord(index, width);
                assert!(x < width);
                assert_eq!(coord_to_index(x, y, width), index);
            }
        }
    }
}
