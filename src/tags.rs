use std::path::Path;

use anyhow::{Context, Result};
use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::read_from_path;
use lofty::tag::{Tag, TagExt};

use crate::models::TagField;

/// True when a field value should be dropped instead of written.
/// Whitespace-only values count as empty.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Write the non-blank extracted fields into the file's tag block and
/// commit it back to disk.
///
/// The audio format is detected by the tag library; the file's existing
/// primary tag is reused when present, otherwise a fresh tag of the
/// format's primary type is created. Fields are independent, so assignment
/// order does not matter.
pub fn write_tags(path: &Path, tags: &[(TagField, String)]) -> Result<()> {
    let tagged_file = read_from_path(path)
        .with_context(|| format!("opening {} for tagging", path.display()))?;

    let mut tag: Tag = tagged_file
        .primary_tag()
        .cloned()
        .or_else(|| tagged_file.first_tag().cloned())
        .unwrap_or_else(|| Tag::new(tagged_file.primary_tag_type()));

    for (field, value) in tags {
        if is_blank(value) {
            continue;
        }
        tag.insert_text(field.item_key(), value.clone());
    }

    tag.save_to_path(path, WriteOptions::default())
        .with_context(|| format!("saving tags to {}", path.display()))?;

    Ok(())
}
