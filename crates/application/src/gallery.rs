use memeforge_domain::{push_front_capped, GalleryEntry, GALLERY_CAP};
use tracing::warn;

use crate::{ApplicationError, Clock, IdGenerator, StorageSlot};

/// Capped, newest-first history of rendered outputs, persisted as one
/// JSON blob through a [`StorageSlot`].
///
/// Every operation is a full load-mutate-persist cycle; single-threaded
/// callers guarantee the cycles never interleave, and each store owns
/// its own slot so independent editors never contend.
pub struct GalleryStore {
    slot: Box<dyn StorageSlot>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    cap: usize,
}

impl GalleryStore {
    pub fn new(
        slot: Box<dyn StorageSlot>,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        Self {
            slot,
            clock,
            ids,
            cap: GALLERY_CAP,
        }
    }

    #[cfg(test)]
    fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    /// Load the persisted list. A missing or malformed blob degrades to
    /// an empty gallery; corruption never propagates to the caller.
    pub fn load(&self) -> Result<Vec<GalleryEntry>, ApplicationError> {
        let Some(blob) = self.slot.read()? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<GalleryEntry>>(&blob) {
            Ok(entries) => Ok(entries),
            Err(error) => {
                warn!("gallery blob is malformed, treating as empty: {error}");
                Ok(Vec::new())
            }
        }
    }

    /// Store a new payload at the front of the list, evicting the
    /// oldest entries beyond the cap, and persist the whole list.
    pub fn save(&self, payload: String) -> Result<GalleryEntry, ApplicationError> {
        let entry = GalleryEntry {
            id: self.ids.new_id(),
            payload,
            created_at: self.clock.now_epoch_ms(),
        };

        let mut entries = self.load()?;
        push_front_capped(&mut entries, entry.clone(), self.cap);

        let blob = serde_json::to_string(&entries)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        self.slot.write(&blob)?;
        Ok(entry)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<GalleryEntry>, ApplicationError> {
        Ok(self.load()?.into_iter().find(|entry| entry.id == id))
    }

    /// Drop the entire persisted list. There is deliberately no
    /// per-entry delete.
    pub fn clear(&self) -> Result<(), ApplicationError> {
        self.slot.delete()
    }
}
