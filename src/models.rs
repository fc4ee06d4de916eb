use std::path::PathBuf;

use lofty::tag::ItemKey;

/// Metadata slots a playlist document can carry for its referenced media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Album,
    AlbumArtist,
    Year,
    Track,
    Title,
    Artist,
}

impl TagField {
    /// The lofty item key this field is written under.
    pub fn item_key(self) -> ItemKey {
        match self {
            TagField::Album => ItemKey::AlbumTitle,
            TagField::AlbumArtist => ItemKey::AlbumArtist,
            TagField::Year => ItemKey::Year,
            TagField::Track => ItemKey::TrackNumber,
            TagField::Title => ItemKey::TrackTitle,
            TagField::Artist => ItemKey::TrackArtist,
        }
    }
}

/// Everything pulled out of a single playlist file: the referenced media
/// path (if any) and the metadata fields found alongside it.
///
/// `source` is `None` when the document has no `ref` element or the element
/// has no `href` attribute. An empty `href=""` is `Some("")`, which later
/// fails resolution rather than being treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedReference {
    pub source: Option<String>,
    pub tags: Vec<(TagField, String)>,
}

impl ExtractedReference {
    /// Record a field value, replacing any earlier value for the same field.
    pub fn set_tag(&mut self, field: TagField, value: String) {
        if let Some(slot) = self.tags.iter_mut().find(|(f, _)| *f == field) {
            slot.1 = value;
        } else {
            self.tags.push((field, value));
        }
    }

    pub fn tag(&self, field: TagField) -> Option<&str> {
        self.tags
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }
}

/// Outcome of attempting to copy a playlist's referenced media file.
///
/// The no-copy cases are ordinary outcomes rather than errors: a playlist
/// without a reference is silently skipped, and an existing target is left
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializeOutcome {
    /// Media file was copied to the given target path.
    Copied(PathBuf),
    /// Playlist carries no media reference; nothing to do.
    NoReference,
    /// The referenced path does not exist on disk.
    SourceMissing(PathBuf),
    /// Target already exists and was not overwritten.
    AlreadyExists(PathBuf),
}
