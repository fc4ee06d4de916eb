use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{ExtractedReference, MaterializeOutcome};

/// Copy the referenced media file next to its playlist.
///
/// The target name is always derived from the *playlist's* base name plus
/// the source file's extension, so playlists referencing media files with
/// colliding names do not clobber each other. An existing target is never
/// overwritten.
///
/// A relative source path resolves against the process working directory;
/// no base-directory rewriting is applied.
pub fn materialize(
    playlist: &Path,
    extracted: &ExtractedReference,
) -> Result<MaterializeOutcome> {
    let source = match &extracted.source {
        Some(s) => Path::new(s),
        None => return Ok(MaterializeOutcome::NoReference),
    };

    if !source.exists() {
        return Ok(MaterializeOutcome::SourceMissing(source.to_path_buf()));
    }

    let stem = playlist.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let target_name = match source.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.to_string(),
    };
    let target = playlist
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(target_name);

    if target.exists() {
        return Ok(MaterializeOutcome::AlreadyExists(target));
    }

    std::fs::copy(source, &target)
        .with_context(|| format!("copying {} to {}", source.display(), target.display()))?;

    Ok(MaterializeOutcome::Copied(target))
}
