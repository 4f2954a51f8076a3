//
// Writes a placeholder tileset (grass, dirt, stone) and checks that every
// tile is detected.
//
use std::path::Path;

use image::ImageFormat;
use tilegrid::util::{paint_tile_strip, PLACEHOLDER_TILES};
use tilegrid::{AnalysisOptions, SpriteSheet, TileSize};

fn main() {
    let image = paint_tile_strip(TileSize::default(), &PLACEHOLDER_TILES);
    let outpath = Path::new("demos").join("tileset").join("placeholder_tiles.png");
    image
        .save_with_format(&outpath, ImageFormat::Png)
        .unwrap();
    println!("Tileset generated.");

    let sheet = SpriteSheet::read_file(&outpath).unwrap();
    print!("{}", sheet.analyze("placeholder_tiles", &AnalysisOptions::default()));
}
