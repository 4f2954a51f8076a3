//! Utilities for producing test and placeholder sprite sheets. (Requires
//! feature `utils`.)
//!
//! This module is not available by default. To use it, you must enable the
//! feature `utils` in your `Cargo.toml`.
//!
//! ```toml
//! [dependencies]
//! tilegrid = { version = "0.1", features = ["utils"] }
//! ```

use image::{Rgba, RgbaImage};

use crate::TileSize;

/// Colors of one painted tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileFill {
    /// Interior color.
    pub fill: Rgba<u8>,
    /// Color of the 1 pixel border.
    pub outline: Rgba<u8>,
}

impl TileFill {
    /// Fully opaque tile from RGB values.
    pub const fn rgb(fill: [u8; 3], outline: [u8; 3]) -> Self {
        TileFill {
            fill: Rgba([fill[0], fill[1], fill[2], 255]),
            outline: Rgba([outline[0], outline[1], outline[2], 255]),
        }
    }
}

/// Grass, dirt and stone.
pub const PLACEHOLDER_TILES: [TileFill; 3] = [
    TileFill::rgb([34, 139, 34], [0, 100, 0]),
    TileFill::rgb([139, 69, 19], [100, 50, 0]),
    TileFill::rgb([128, 128, 128], [100, 100, 100]),
];

/// Paint one tile per entry of `fills`, left to right, into a new image of
/// `fills.len()` by 1 tiles.
///
/// # Example
///
/// ```
/// use tilegrid::{AnalysisOptions, SpriteSheet, TileSize};
/// use tilegrid::util::{paint_tile_strip, PLACEHOLDER_TILES};
///
/// let img = paint_tile_strip(TileSize::default(), &PLACEHOLDER_TILES);
/// assert_eq!(img.dimensions(), (48, 16));
/// let report = SpriteSheet::from_image(img).analyze("tiles", &AnalysisOptions::default());
/// assert_eq!(report.total_count(), 3);
/// ```
pub fn paint_tile_strip(tile_size: TileSize, fills: &[TileFill]) -> RgbaImage {
    let (tw, th) = (tile_size.width(), tile_size.height());
    let mut image = RgbaImage::new(tw * fills.len() as u32, th);
    for (index, fill) in fills.iter().enumerate() {
        let x0 = index as u32 * tw;
        for y in 0..th {
            for x in 0..tw {
                let border = x == 0 || y == 0 || x == tw - 1 || y == th - 1;
                let color = if border { fill.outline } else { fill.fill };
                image.put_pixel(x0 + x, y, color);
            }
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_and_fill() {
        let img = paint_tile_strip(TileSize::default(), &PLACEHOLDER_TILES);
        assert_eq!(*img.get_pixel(0, 0), PLACEHOLDER_TILES[0].outline);
        assert_eq!(*img.get_pixel(8, 8), PLACEHOLDER_TILES[0].fill);
        assert_eq!(*img.get_pixel(31, 5), PLACEHOLDER_TILES[1].outline);
        assert_eq!(*img.get_pixel(40, 8), PLACEHOLDER_TILES[2].fill);
    }

    #[test]
    fn empty_strip() {
        let img = paint_tile_strip(TileSize::default(), &[]);
        assert_eq!(img.dimensions(), (0, 16));
    }
}
