use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension identifying playlist files, without the leading dot.
/// Matched case-sensitively.
pub const PLAYLIST_EXTENSION: &str = "asx";

/// Recursively collect every playlist file under `root`, at any depth.
///
/// A missing root or a root that is not a directory yields an empty list;
/// unreadable entries are skipped. Order follows directory traversal and is
/// not guaranteed stable across runs.
pub fn find_playlists(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.path().to_path_buf())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().map_or(false, |e| e == PLAYLIST_EXTENSION))
        .collect()
}
