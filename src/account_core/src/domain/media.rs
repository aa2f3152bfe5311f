/// A file accepted by the media host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub url: String,
    pub public_id: String,
}

/// Which profile image an upload replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSlot {
    Avatar,
    CoverImage,
}

impl MediaSlot {
    /// Multipart field name carrying the file for this slot.
    pub fn field_name(&self) -> &'static str {
        match self {
            MediaSlot::Avatar => "avatar",
            MediaSlot::CoverImage => "coverImage",
        }
    }
}

/// Derives the host's deletable identifier from a public asset URL: the last
/// path segment with its extension removed.
pub fn public_id_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next()?;
    let segment = path.trim_end_matches('/').rsplit('/').next()?;
    let id = match segment.rsplit_once('.') {
        Some((stem, _extension)) => stem,
        None => segment,
    };
    (!id.is_empty()).then_some(id)
}
