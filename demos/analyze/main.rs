//
// Prints an occupancy grid for every image given on the command line.
//
//     cargo run --example analyze -- [--tile 32 | --tile 16x8] [--summary] sheet1.png sheet2.png
//
// Images that fail to load are reported and skipped.
//
use std::{env, io, path::PathBuf, process};

use tilegrid::{analyze_batch, summarize_batch, AnalysisOptions};

fn main() {
    let mut options = AnalysisOptions::default();
    let mut summary = false;
    let mut paths: Vec<PathBuf> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--summary" => summary = true,
            "--tile" => {
                let value = args.next().unwrap_or_default();
                options.tile_size = value.parse().unwrap_or_else(|err| {
                    eprintln!("{}", err);
                    process::exit(2);
                });
            }
            _ => paths.push(PathBuf::from(arg)),
        }
    }
    if paths.is_empty() {
        eprintln!("usage: analyze [--tile N|WxH] [--summary] <image>...");
        process::exit(2);
    }

    let entries = paths.iter().map(|path| {
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        (label, path)
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = if summary {
        summarize_batch(entries, &options, &mut out)
    } else {
        analyze_batch(entries, &options, &mut out)
    };
    match outcome {
        Ok(outcome) if outcome.failed > 0 => process::exit(1),
        Ok(_) => {}
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
