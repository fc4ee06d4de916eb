use std::path::Path;

use anyhow::Result;
use tracing::{debug, error, info};

use crate::models::MaterializeOutcome;
use crate::{materialize, playlist, tags, walker};

/// Counters for a single scan, reported on the CLI summary line.
///
/// `copied` counts files copied and tagged; `skipped` covers playlists with
/// no reference and targets that already existed; `failed` counts files
/// where any error was logged (parse, missing source, copy or tag failure).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub copied: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Process every playlist under `root` once, in walk order.
///
/// Each playlist is handled independently: every failure is logged with the
/// affected path and the loop moves on. Nothing here aborts the scan.
pub fn run(root: &Path) -> Result<RunStats> {
    let mut stats = RunStats::default();

    for playlist_path in walker::find_playlists(root) {
        let extracted = match playlist::extract(&playlist_path) {
            Ok(extracted) => extracted,
            Err(e) => {
                error!("Failed to read playlist {}: {:#}", playlist_path.display(), e);
                stats.failed += 1;
                continue;
            }
        };

        match materialize::materialize(&playlist_path, &extracted) {
            Ok(MaterializeOutcome::Copied(target)) => {
                info!(
                    "Copied {} -> {}",
                    playlist_path.display(),
                    target.display()
                );
                match tags::write_tags(&target, &extracted.tags) {
                    Ok(()) => stats.copied += 1,
                    Err(e) => {
                        // the copied file stays in place even when tagging fails
                        error!("Failed to write tags to {}: {:#}", target.display(), e);
                        stats.failed += 1;
                    }
                }
            }
            Ok(MaterializeOutcome::NoReference) => {
                debug!("No media reference in {}", playlist_path.display());
                stats.skipped += 1;
            }
            Ok(MaterializeOutcome::SourceMissing(source)) => {
                error!("Source file does not exist: {}", source.display());
                stats.failed += 1;
            }
            Ok(MaterializeOutcome::AlreadyExists(target)) => {
                info!(
                    "File already exists and will not be copied: {}",
                    target.display()
                );
                stats.skipped += 1;
            }
            Err(e) => {
                error!("Error occurred while copying file: {:#}", e);
                stats.failed += 1;
            }
        }
    }

    Ok(stats)
}
