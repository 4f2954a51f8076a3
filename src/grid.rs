use crate::{Result, SheetError};
use bitflags::bitflags;
use std::{fmt, str::FromStr};

/// The size of a tile in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    width: u32,
    height: u32,
}

impl TileSize {
    /// Create a new tile size.
    ///
    /// Fails if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SheetError::InvalidInput(format!(
                "Tile size must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(TileSize { width, height })
    }

    /// A square tile of `size` by `size` pixels.
    pub fn square(size: u32) -> Result<Self> {
        Self::new(size, size)
    }

    /// Tile width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Tile height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for TileSize {
    /// 16x16 pixels.
    fn default() -> Self {
        TileSize {
            width: 16,
            height: 16,
        }
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for TileSize {
    type Err = SheetError;

    /// Parse `"16"` (square) or `"16x8"` (width x height).
    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| {
            part.trim().parse::<u32>().map_err(|err| {
                SheetError::InvalidInput(format!("Invalid tile size {:?}: {}", s, err))
            })
        };
        let mut parts = s.splitn(2, 'x');
        match (parts.next(), parts.next()) {
            (Some(w), Some(h)) => Self::new(parse(w)?, parse(h)?),
            _ => Self::square(parse(s)?),
        }
    }
}

bitflags! {
    /// Axes on which the image has pixels past the last full tile. These
    /// pixels are never sampled.
    pub struct Truncation: u8 {
        /// Image width is not a multiple of the tile width.
        const COLUMNS = 0b01;
        /// Image height is not a multiple of the tile height.
        const ROWS = 0b10;
    }
}

/// Position of a tile in the grid. Tile coordinates start at (0, 0) in the
/// top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Row index, counted from the top.
    pub row: u32,
    /// Column index, counted from the left.
    pub col: u32,
}

impl TileCoord {
    /// Pixel position of the tile's top left corner. `None` if it does not
    /// fit in a `u32`.
    pub fn origin(&self, tile_size: TileSize) -> Option<(u32, u32)> {
        let x = self.col.checked_mul(tile_size.width())?;
        let y = self.row.checked_mul(tile_size.height())?;
        Some((x, y))
    }
}

/// The addressable grid of an image for a given tile size.
///
/// Only full tiles are part of the grid. If the tile size is larger than
/// the image along some axis the grid is empty along that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    cols: u32,
    rows: u32,
    tile_size: TileSize,
    truncation: Truncation,
}

impl GridSize {
    /// Partition an image of the given pixel size into full tiles.
    pub fn new(image_width: u32, image_height: u32, tile_size: TileSize) -> Self {
        let cols = image_width / tile_size.width();
        let rows = image_height / tile_size.height();
        let mut truncation = Truncation::empty();
        if image_width % tile_size.width() != 0 {
            truncation.insert(Truncation::COLUMNS);
        }
        if image_height % tile_size.height() != 0 {
            truncation.insert(Truncation::ROWS);
        }
        GridSize {
            cols,
            rows,
            tile_size,
            truncation,
        }
    }

    /// Number of tile columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of tile rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Tile size used to compute this grid.
    pub fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Total number of tiles.
    pub fn num_tiles(&self) -> u64 {
        self.cols as u64 * self.rows as u64
    }

    /// Returns `true` if the grid has no tiles.
    pub fn is_empty(&self) -> bool {
        self.cols == 0 || self.rows == 0
    }

    /// Which axes have remainder pixels that fall outside the grid.
    pub fn truncation(&self) -> Truncation {
        self.truncation
    }

    /// An iterator over all tile coordinates in row-major order.
    pub fn coords(&self) -> CoordsIter {
        CoordsIter {
            grid: *self,
            next: 0,
        }
    }
}

/// An iterator over tile coordinates. See [GridSize::coords].
#[derive(Debug)]
pub struct CoordsIter {
    grid: GridSize,
    next: u64,
}

impl Iterator for CoordsIter {
    type Item = TileCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.grid.num_tiles() {
            let cols = self.grid.cols as u64;
            let item = TileCoord {
                row: (self.next / cols) as u32,
                col: (self.next % cols) as u32,
            };
            self.next += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.grid.num_tiles() - self.next) as usize;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn tile(w: u32, h: u32) -> TileSize {
        TileSize::new(w, h).unwrap()
    }

    #[test]
    fn zero_tile_size_is_rejected() {
        assert!(TileSize::new(0, 16).is_err());
        assert!(TileSize::new(16, 0).is_err());
        assert_eq!(TileSize::default(), tile(16, 16));
    }

    #[test]
    fn parse_tile_size() {
        assert_eq!("32".parse::<TileSize>().unwrap(), tile(32, 32));
        assert_eq!("16x8".parse::<TileSize>().unwrap(), tile(16, 8));

        let err = "abc".parse::<TileSize>().unwrap_err().to_string();
        assert!(err.contains("Invalid tile size \"abc\""), "{}", err);
        assert!(!err.contains("positive"), "{}", err);
        assert!("16x".parse::<TileSize>().is_err());
        let err = "0".parse::<TileSize>().unwrap_err().to_string();
        assert!(err.contains("must be positive"), "{}", err);
    }

    #[test]
    fn remainder_is_truncated() {
        let grid = GridSize::new(20, 16, TileSize::default());
        assert_eq!((grid.cols(), grid.rows()), (1, 1));
        assert_eq!(grid.truncation(), Truncation::COLUMNS);

        let grid = GridSize::new(48, 16, TileSize::default());
        assert_eq!((grid.cols(), grid.rows()), (3, 1));
        assert!(grid.truncation().is_empty());
    }

    #[test]
    fn tile_larger_than_image() {
        let grid = GridSize::new(8, 40, TileSize::default());
        assert_eq!((grid.cols(), grid.rows()), (0, 2));
        assert!(grid.is_empty());
        assert_eq!(grid.coords().count(), 0);
        assert_eq!(grid.truncation(), Truncation::COLUMNS | Truncation::ROWS);
    }

    #[test]
    fn coords_are_row_major() {
        let grid = GridSize::new(48, 32, TileSize::default());
        let coords: Vec<(u32, u32)> = grid.coords().map(|c| (c.row, c.col)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        let c = TileCoord { row: 1, col: 2 };
        assert_eq!(c.origin(TileSize::default()), Some((32, 16)));
        let far = TileCoord {
            row: 0,
            col: 1 << 28,
        };
        assert_eq!(far.origin(TileSize::default()), None);
    }

    #[test]
    fn grid_fits_inside_image() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let width = rng.gen_range(1..=512u32);
            let height = rng.gen_range(1..=512u32);
            let tile_size = tile(rng.gen_range(1..=64), rng.gen_range(1..=64));
            let grid = GridSize::new(width, height, tile_size);
            assert!(grid.cols() * tile_size.width() <= width);
            assert!(grid.rows() * tile_size.height() <= height);
            assert!((grid.cols() + 1) * tile_size.width() > width);
            assert!((grid.rows() + 1) * tile_size.height() > height);
            assert_eq!(grid.coords().count() as u64, grid.num_tiles());
        }
    }
}
