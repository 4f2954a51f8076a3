use crate::{TileCoord, TileSize};
use image::RgbaImage;

const BYTES_PER_PIXEL: usize = 4;
const ALPHA: usize = 3;

/// The part of a tile that is actually sampled, in image pixel coordinates.
///
/// `x1` and `y1` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteriorWindow {
    /// Left edge.
    pub x0: u32,
    /// Top edge.
    pub y0: u32,
    /// Right edge (exclusive).
    pub x1: u32,
    /// Bottom edge (exclusive).
    pub y1: u32,
}

impl InteriorWindow {
    /// The window of the tile at `coord`, inset by `margin` on every side.
    ///
    /// The margin is clamped to `(extent - 1) / 2` per axis, so the window
    /// always lies inside its own tile and is never empty. Returns `None` if
    /// the tile lies beyond the `u32` pixel range.
    pub fn new(coord: TileCoord, tile_size: TileSize, margin: u32) -> Option<Self> {
        let (x, y) = coord.origin(tile_size)?;
        let (x0, x1) = inset(x, tile_size.width(), margin)?;
        let (y0, y1) = inset(y, tile_size.height(), margin)?;
        Some(InteriorWindow { x0, y0, x1, y1 })
    }

    /// Restrict the window to an image of the given size. Returns `None` if
    /// nothing is left.
    pub fn clip(self, width: u32, height: u32) -> Option<Self> {
        let x1 = self.x1.min(width);
        let y1 = self.y1.min(height);
        if self.x0 >= x1 || self.y0 >= y1 {
            return None;
        }
        Some(InteriorWindow { x1, y1, ..self })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

fn inset(start: u32, extent: u32, margin: u32) -> Option<(u32, u32)> {
    let margin = margin.min(extent.saturating_sub(1) / 2);
    let end = start.checked_add(extent)?;
    Some((start + margin, end - margin))
}

/// Decides for single tiles whether they contain visible pixels.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    image: &'a RgbaImage,
    tile_size: TileSize,
    margin: u32,
}

impl<'a> Sampler<'a> {
    /// Create a sampler over `image`.
    pub fn new(image: &'a RgbaImage, tile_size: TileSize, margin: u32) -> Self {
        Sampler {
            image,
            tile_size,
            margin,
        }
    }

    /// The in-bounds window sampled for `coord`, if any.
    pub fn window(&self, coord: TileCoord) -> Option<InteriorWindow> {
        InteriorWindow::new(coord, self.tile_size, self.margin)?
            .clip(self.image.width(), self.image.height())
    }

    /// Returns `true` if any pixel in the tile's interior window has a
    /// non-zero alpha.
    ///
    /// Stops at the first such pixel. Content that only touches the margin
    /// band of a tile is not detected.
    pub fn has_content(&self, coord: TileCoord) -> bool {
        let window = match self.window(coord) {
            Some(window) => window,
            None => return false,
        };
        let raw: &[u8] = self.image.as_raw();
        let stride = self.image.width() as usize * BYTES_PER_PIXEL;
        let left = window.x0 as usize * BYTES_PER_PIXEL;
        let right = window.x1 as usize * BYTES_PER_PIXEL;
        (window.y0..window.y1).any(|y| {
            let row_start = y as usize * stride;
            raw[row_start + left..row_start + right]
                .chunks_exact(BYTES_PER_PIXEL)
                .any(|px| px[ALPHA] > 0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridSize;
    use image::Rgba;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn at(row: u32, col: u32) -> TileCoord {
        TileCoord { row, col }
    }

    #[test]
    fn default_window_is_center_8x8() {
        let w = InteriorWindow::new(at(0, 0), TileSize::default(), 4).unwrap();
        assert_eq!((w.x0, w.y0, w.x1, w.y1), (4, 4, 12, 12));
        let w = InteriorWindow::new(at(2, 1), TileSize::default(), 4).unwrap();
        assert_eq!((w.x0, w.y0, w.x1, w.y1), (20, 36, 28, 44));
    }

    #[test]
    fn margin_is_clamped_for_small_tiles() {
        let tile = TileSize::new(8, 3).unwrap();
        let w = InteriorWindow::new(at(0, 0), tile, 4).unwrap();
        assert_eq!((w.x0, w.x1), (3, 5));
        assert_eq!((w.y0, w.y1), (1, 2));

        let tile = TileSize::new(1, 1).unwrap();
        let w = InteriorWindow::new(at(3, 3), tile, 4).unwrap();
        assert_eq!((w.x0, w.y0, w.width(), w.height()), (3, 3, 1, 1));
    }

    #[test]
    fn zero_margin_samples_whole_tile() {
        let mut img = RgbaImage::from_pixel(16, 16, CLEAR);
        img.put_pixel(0, 15, RED);
        let sampler = Sampler::new(&img, TileSize::default(), 0);
        assert!(sampler.has_content(at(0, 0)));
    }

    #[test]
    fn single_pixel_inside_window() {
        let mut img = RgbaImage::from_pixel(32, 16, CLEAR);
        img.put_pixel(16 + 11, 4, Rgba([0, 0, 0, 1]));
        let sampler = Sampler::new(&img, TileSize::default(), 4);
        assert!(!sampler.has_content(at(0, 0)));
        assert!(sampler.has_content(at(0, 1)));
    }

    #[test]
    fn content_in_margin_band_is_missed() {
        // Known limitation: strokes that stay within 4 px of the tile edge
        // are reported as empty.
        let mut img = RgbaImage::from_pixel(16, 16, CLEAR);
        for i in 0..16 {
            img.put_pixel(i, 0, RED);
            img.put_pixel(i, 15, RED);
            img.put_pixel(3, i, RED);
            img.put_pixel(12, i, RED);
        }
        let sampler = Sampler::new(&img, TileSize::default(), 4);
        assert!(!sampler.has_content(at(0, 0)));
    }

    #[test]
    fn color_without_alpha_is_empty() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([255, 255, 255, 0]));
        let sampler = Sampler::new(&img, TileSize::default(), 4);
        assert!(!sampler.has_content(at(0, 0)));
    }

    #[test]
    fn window_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let width = rng.gen_range(1..=80u32);
            let height = rng.gen_range(1..=80u32);
            let tile_size = TileSize::new(rng.gen_range(1..=24), rng.gen_range(1..=24)).unwrap();
            let margin = rng.gen_range(0..=8);
            let img = RgbaImage::from_pixel(width, height, RED);
            let sampler = Sampler::new(&img, tile_size, margin);
            let grid = GridSize::new(width, height, tile_size);
            for coord in grid.coords() {
                let w = sampler.window(coord).unwrap();
                assert!(w.x1 <= width && w.y1 <= height);
                assert!(w.width() > 0 && w.height() > 0);
                assert!(sampler.has_content(coord));
            }
            // Tiles past the grid are clipped instead of read.
            let outside = at(grid.rows() + 1, grid.cols() + 1);
            assert_eq!(sampler.window(outside), None);
            assert!(!sampler.has_content(outside));
        }
    }

    #[test]
    fn huge_coords_are_not_wrapped() {
        let img = RgbaImage::from_pixel(16, 16, RED);
        let sampler = Sampler::new(&img, TileSize::default(), 4);
        assert!(!sampler.has_content(at(0, 1 << 28)));
        assert!(!sampler.has_content(at(1 << 28, 0)));
        assert_eq!(sampler.window(at(u32::MAX, u32::MAX)), None);

        // Origin fits, but the tile end does not.
        let last = at(0, (1 << 28) - 1);
        assert_eq!(InteriorWindow::new(last, TileSize::default(), 4), None);
        assert!(!sampler.has_content(last));
    }
}
