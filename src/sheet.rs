use crate::{AnalysisOptions, GridReport, GridSize, Result, SheetSummary, TileSize};
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// A decoded sprite sheet.
///
/// All pixel data is converted to 8 bit RGBA on load.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: RgbaImage,
}

impl SpriteSheet {
    /// Load an image file. Loads full file into memory.
    ///
    /// The format is guessed from the file extension.
    pub fn read_file(path: &Path) -> Result<Self> {
        let image = image::open(path)?;
        Ok(Self::from_dynamic(image))
    }

    /// Decode an image from an in-memory buffer. The format is guessed from
    /// the contents.
    pub fn read(data: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(data)?;
        Ok(Self::from_dynamic(image))
    }

    /// Wrap an already decoded image.
    pub fn from_image(image: RgbaImage) -> Self {
        SpriteSheet { image }
    }

    fn from_dynamic(image: DynamicImage) -> Self {
        SpriteSheet {
            image: image.into_rgba8(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Width and height in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// The decoded pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// The grid of full tiles for `tile_size`.
    pub fn grid(&self, tile_size: TileSize) -> GridSize {
        GridSize::new(self.width(), self.height(), tile_size)
    }

    /// Find which tiles contain artwork.
    pub fn analyze(&self, label: &str, options: &AnalysisOptions) -> GridReport {
        GridReport::analyze(&self.image, label, options)
    }

    /// Size and grid only.
    pub fn summary(&self, label: &str, tile_size: TileSize) -> SheetSummary {
        SheetSummary::new(label, self.width(), self.height(), tile_size)
    }
}

impl From<RgbaImage> for SpriteSheet {
    fn from(image: RgbaImage) -> Self {
        Self::from_image(image)
    }
}
