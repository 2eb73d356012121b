use serde::{Deserialize, Serialize};

/// Most entries a gallery keeps; older ones are evicted at save time.
pub const GALLERY_CAP: usize = 20;

/// One persisted render: an opaque encoded-image payload plus the
/// identity assigned when it was saved.
///
/// The serialized field names are the persisted blob layout and must
/// not drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: String,
    pub payload: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Prepend `entry`, dropping the oldest entries beyond `cap`.
pub fn push_front_capped(entries: &mut Vec<GalleryEntry>, entry: GalleryEntry, cap: usize) {
    entries.insert(0, entry);
    entries.truncate(cap);
}
