use crate::{AnalysisOptions, Result, SpriteSheet};
use log::{info, warn};
use std::{io::Write, path::Path};

/// Result counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Images that were loaded and reported.
    pub succeeded: u32,
    /// Images that could not be loaded.
    pub failed: u32,
}

/// Analyze several images one after another and write one report block per
/// image to `out`.
///
/// Entries are `(label, path)` pairs. Blocks are separated by a blank line.
/// If an image cannot be loaded, its block contains an `Error:` line and the
/// batch continues with the next entry. Only errors writing to `out` abort
/// the batch.
pub fn analyze_batch<I, L, P, W>(
    entries: I,
    options: &AnalysisOptions,
    out: &mut W,
) -> Result<BatchOutcome>
where
    I: IntoIterator<Item = (L, P)>,
    L: AsRef<str>,
    P: AsRef<Path>,
    W: Write,
{
    run(entries, out, |out, label, path| {
        match SpriteSheet::read_file(path) {
            Ok(sheet) => {
                write!(out, "{}", sheet.analyze(label, options))?;
                Ok(true)
            }
            Err(err) => {
                warn!("Skipping {} ({}): {}", label, path.display(), err);
                writeln!(out, "--- Analyzing {} ---", label)?;
                writeln!(out, "Error: {}", err)?;
                Ok(false)
            }
        }
    })
}

/// Like [analyze_batch], but only report image size and grid of each image
/// without sampling tiles.
pub fn summarize_batch<I, L, P, W>(
    entries: I,
    options: &AnalysisOptions,
    out: &mut W,
) -> Result<BatchOutcome>
where
    I: IntoIterator<Item = (L, P)>,
    L: AsRef<str>,
    P: AsRef<Path>,
    W: Write,
{
    run(entries, out, |out, label, path| {
        match SpriteSheet::read_file(path) {
            Ok(sheet) => {
                write!(out, "{}", sheet.summary(label, options.tile_size))?;
                Ok(true)
            }
            Err(err) => {
                warn!("Skipping {} ({}): {}", label, path.display(), err);
                writeln!(out, "Error reading {}: {}", label, err)?;
                Ok(false)
            }
        }
    })
}

fn run<I, L, P, W, F>(entries: I, out: &mut W, mut process: F) -> Result<BatchOutcome>
where
    I: IntoIterator<Item = (L, P)>,
    L: AsRef<str>,
    P: AsRef<Path>,
    W: Write,
    F: FnMut(&mut W, &str, &Path) -> Result<bool>,
{
    let mut outcome = BatchOutcome::default();
    for (index, (label, path)) in entries.into_iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        // The sheet is dropped inside `process`, before the next one loads.
        if process(out, label.as_ref(), path.as_ref())? {
            outcome.succeeded += 1;
        } else {
            outcome.failed += 1;
        }
    }
    info!(
        "Batch done: {} succeeded, {} failed",
        outcome.succeeded, outcome.failed
    );
    Ok(outcome)
}
