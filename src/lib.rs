#![warn(clippy::all)]
#![warn(missing_docs)]
/*!

Find out which cells of a pixel-art sprite sheet contain artwork.

A sprite sheet is treated as a uniform grid of fixed-size tiles (16x16 by
default). For each tile this library samples an interior window, inset from
the tile edges, and reports whether any pixel in it is not fully
transparent. Sampling only the interior keeps anti-aliased edges of
neighbouring sprites from marking empty tiles as occupied. The flip side is
that a tile whose only visible pixels lie within the margin band is reported
as empty.

The margin defaults to 4 pixels on every side, i.e., the center 8x8 of a
16x16 tile. For small tiles it is reduced to `(extent - 1) / 2` per axis so
that at least one pixel is sampled and the window never reaches into a
neighbouring tile. Tiles of 8 pixels or less along an axis are therefore
sampled closer to their edges than the configured margin.

Pixels to the right of or below the last full tile are never sampled.

# Basic Usage

## Analyze a sheet

```
use tilegrid::{AnalysisOptions, SpriteSheet};
# use image::{Rgba, RgbaImage};
# let img = RgbaImage::from_pixel(48, 16, Rgba([255, 0, 0, 255]));
# let sheet = SpriteSheet::from_image(img);
// let sheet = SpriteSheet::read_file(Path::new("assets/sprites/player_idle.png"))?;
let report = sheet.analyze("Idle Sheet", &AnalysisOptions::default());
print!("{}", report);
assert_eq!(report.rows()[0].count(), 3);
```

This prints:

```text
--- Analyzing Idle Sheet ---
Dimensions: 48x16
Potential Grid: 3 cols x 1 rows
Row 0: [X][X][X] (Count: 3)
```

## Other tile sizes

```
use tilegrid::{AnalysisOptions, SpriteSheet, TileSize};
# use image::{Rgba, RgbaImage};
# let sheet = SpriteSheet::from_image(RgbaImage::from_pixel(64, 32, Rgba([0, 0, 0, 0])));
let options = AnalysisOptions::with_tile_size(TileSize::new(32, 32).unwrap());
let report = sheet.analyze("big", &options);
assert_eq!((report.grid().cols(), report.grid().rows()), (2, 1));
```

## Batches

[analyze_batch] processes many files in sequence. A file that fails to load
produces an error line in its block and does not stop the batch.

*/

pub(crate) mod batch;
pub(crate) mod error;
pub(crate) mod grid;
pub(crate) mod options;
pub(crate) mod report;
pub(crate) mod sampler;
pub(crate) mod sheet;
#[cfg(feature = "utils")]
pub mod util;

/// A specialized `Result` type for sprite sheet analysis.
pub type Result<T> = std::result::Result<T, SheetError>;

pub use batch::{analyze_batch, summarize_batch, BatchOutcome};
pub use error::SheetError;
pub use grid::{CoordsIter, GridSize, TileCoord, TileSize, Truncation};
pub use options::{AnalysisOptions, Markers, DEFAULT_MARGIN};
pub use report::{GridReport, RowReport, SheetSummary};
pub use sampler::{InteriorWindow, Sampler};
pub use sheet::SpriteSheet;
