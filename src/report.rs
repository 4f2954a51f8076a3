use crate::{sampler::Sampler, AnalysisOptions, GridSize, Markers, TileCoord, TileSize};
use image::RgbaImage;
use log::{debug, trace};
use std::fmt;

/// Occupancy of one grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReport {
    cells: Vec<bool>,
    count: u32,
}

impl RowReport {
    fn new(cells: Vec<bool>) -> Self {
        let count = cells.iter().filter(|&&c| c).count() as u32;
        RowReport { cells, count }
    }

    /// One entry per column, `true` if the tile has content.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of tiles with content in this row.
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Which tiles of a sprite sheet contain artwork.
///
/// Renders as a text block via `Display`:
///
/// ```text
/// --- Analyzing Idle Sheet ---
/// Dimensions: 48x16
/// Potential Grid: 3 cols x 1 rows
/// Row 0: [X][ ][X] (Count: 2)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridReport {
    label: String,
    dimensions: (u32, u32),
    grid: GridSize,
    rows: Vec<RowReport>,
    markers: Markers,
}

impl GridReport {
    /// Sample every tile of `image` in row-major order.
    pub fn analyze(image: &RgbaImage, label: &str, options: &AnalysisOptions) -> Self {
        let (width, height) = image.dimensions();
        let grid = GridSize::new(width, height, options.tile_size);
        debug!(
            "{}: {}x{} px, {} cols x {} rows of {} tiles",
            label,
            width,
            height,
            grid.cols(),
            grid.rows(),
            options.tile_size
        );
        if !grid.truncation().is_empty() {
            debug!(
                "{}: remainder pixels not sampled ({:?})",
                label,
                grid.truncation()
            );
        }

        let sampler = Sampler::new(image, options.tile_size, options.margin);
        // Rows are kept even when there are no columns.
        let mut cells = vec![Vec::with_capacity(grid.cols() as usize); grid.rows() as usize];
        for coord in grid.coords() {
            cells[coord.row as usize].push(sampler.has_content(coord));
        }
        let rows = cells
            .into_iter()
            .enumerate()
            .map(|(row, cells)| {
                let report = RowReport::new(cells);
                trace!("{}: row {} has {} tiles", label, row, report.count());
                report
            })
            .collect();

        GridReport {
            label: label.to_string(),
            dimensions: (width, height),
            grid,
            rows,
            markers: options.markers.clone(),
        }
    }

    /// Name of the analyzed image.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Image width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// The grid that was sampled.
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[RowReport] {
        &self.rows
    }

    /// Whether the tile at `coord` has content. `None` if `coord` is outside
    /// the grid.
    pub fn has_content(&self, coord: TileCoord) -> Option<bool> {
        self.rows
            .get(coord.row as usize)
            .and_then(|r| r.cells.get(coord.col as usize))
            .copied()
    }

    /// Number of tiles with content in the whole image.
    pub fn total_count(&self) -> u32 {
        self.rows.iter().map(RowReport::count).sum()
    }
}

impl fmt::Display for GridReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Analyzing {} ---", self.label)?;
        writeln!(f, "Dimensions: {}x{}", self.dimensions.0, self.dimensions.1)?;
        writeln!(
            f,
            "Potential Grid: {} cols x {} rows",
            self.grid.cols(),
            self.grid.rows()
        )?;
        for (index, row) in self.rows.iter().enumerate() {
            write!(f, "Row {}: ", index)?;
            for &cell in &row.cells {
                f.write_str(self.markers.for_tile(cell))?;
            }
            writeln!(f, " (Count: {})", row.count)?;
        }
        Ok(())
    }
}

/// Size and grid of a sprite sheet, without sampling any tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    label: String,
    dimensions: (u32, u32),
    grid: GridSize,
}

impl SheetSummary {
    /// Summarize an image of the given pixel size.
    pub fn new(label: &str, width: u32, height: u32, tile_size: TileSize) -> Self {
        SheetSummary {
            label: label.to_string(),
            dimensions: (width, height),
            grid: GridSize::new(width, height, tile_size),
        }
    }

    /// Name of the image.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Image width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// The grid for the configured tile size.
    pub fn grid(&self) -> GridSize {
        self.grid
    }
}

impl fmt::Display for SheetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {}", self.label)?;
        writeln!(f, "Dimensions: {}x{}", self.dimensions.0, self.dimensions.1)?;
        writeln!(
            f,
            "Grid ({}): {} cols x {} rows",
            self.grid.tile_size(),
            self.grid.cols(),
            self.grid.rows()
        )
    }
}
