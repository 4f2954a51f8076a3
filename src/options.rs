use crate::TileSize;

/// Default inset of the sampled window from every tile edge, in pixels.
pub const DEFAULT_MARGIN: u32 = 4;

/// Configuration of a grid analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Size of one grid cell. Default is 16x16.
    pub tile_size: TileSize,
    /// Pixels skipped on each side of a tile before sampling. Keeps
    /// anti-aliased edges of neighbouring sprites from marking a tile as
    /// occupied. Default is 4, i.e., the center 8x8 of a 16x16 tile.
    ///
    /// The margin is clamped per tile so that at least one pixel row and
    /// column is sampled.
    pub margin: u32,
    /// Symbols used when rendering a [GridReport](crate::GridReport).
    pub markers: Markers,
}

impl AnalysisOptions {
    /// Default options with a different tile size.
    pub fn with_tile_size(tile_size: TileSize) -> Self {
        AnalysisOptions {
            tile_size,
            ..Default::default()
        }
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            tile_size: TileSize::default(),
            margin: DEFAULT_MARGIN,
            markers: Markers::default(),
        }
    }
}

/// Symbols printed for each tile in a report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Printed for tiles with content.
    pub content: String,
    /// Printed for empty tiles.
    pub empty: String,
}

impl Markers {
    /// The marker for a tile.
    pub fn for_tile(&self, has_content: bool) -> &str {
        if has_content {
            &self.content
        } else {
            &self.empty
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            content: "[X]".to_string(),
            empty: "[ ]".to_string(),
        }
    }
}
