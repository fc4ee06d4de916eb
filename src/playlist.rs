use std::path::Path;

use anyhow::{Context, Result};
use roxmltree::Document;

use crate::models::{ExtractedReference, TagField};

/// Pull the referenced media path and metadata fields out of one playlist.
///
/// Behavior is aligned with the ASX conventions the tool consumes:
/// - `param` elements anywhere in the tree supply the Windows Media
///   (`WM/...`) album fields; later occurrences of the same field win.
/// - The first `entry` element supplies title and author, taken from its
///   direct children only.
/// - The first `ref` element's `href` attribute is the media path.
///
/// A file that is not well-formed XML is an error for this playlist alone;
/// the caller decides whether to continue with the rest of the batch.
pub fn extract(path: &Path) -> Result<ExtractedReference> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("reading playlist {}", path.display()))?;
    let doc = Document::parse(&body)
        .with_context(|| format!("parsing playlist {}", path.display()))?;

    let mut extracted = ExtractedReference::default();

    for param in doc.descendants().filter(|n| n.has_tag_name("param")) {
        // missing attribute reads as empty string, same as an empty value
        let name = param.attribute("name").unwrap_or("");
        let value = param.attribute("value").unwrap_or("");
        match name {
            "WM/AlbumTitle" => extracted.set_tag(TagField::Album, value.to_string()),
            "WM/AlbumArtist" => extracted.set_tag(TagField::AlbumArtist, value.to_string()),
            "WM/Year" => extracted.set_tag(TagField::Year, value.to_string()),
            "WM/TrackNumber" => {
                // track numbers may be encoded as "track/total"
                let track = value.split('/').next().unwrap_or("");
                extracted.set_tag(TagField::Track, track.to_string());
            }
            _ => {}
        }
    }

    if let Some(entry) = doc.descendants().find(|n| n.has_tag_name("entry")) {
        if let Some(title) = entry.children().find(|n| n.has_tag_name("title")) {
            extracted.set_tag(TagField::Title, title.text().unwrap_or("").to_string());
        }
        if let Some(author) = entry.children().find(|n| n.has_tag_name("author")) {
            extracted.set_tag(TagField::Artist, author.text().unwrap_or("").to_string());
        }
    }

    extracted.source = doc
        .descendants()
        .find(|n| n.has_tag_name("ref"))
        .and_then(|n| n.attribute("href").map(str::to_string));

    Ok(extracted)
}
