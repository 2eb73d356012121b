use memeforge_domain::{BaseImage, EditState, Surface};

use crate::ApplicationError;

/// A rendered projection of the edit state: final pixels, PNG-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// One durable value under one storage key. The gallery persists its
/// whole list as a single blob through this slot.
pub trait StorageSlot {
    fn read(&self) -> Result<Option<String>, ApplicationError>;

    fn write(&self, value: &str) -> Result<(), ApplicationError>;

    fn delete(&self) -> Result<(), ApplicationError>;
}

pub trait ImageDecoder {
    /// Decode raw image bytes into a [`BaseImage`]. Failure leaves the
    /// caller's state untouched.
    fn decode(&self, bytes: &[u8]) -> Result<BaseImage, ApplicationError>;
}

pub trait FrameRenderer {
    /// Compose the edit state onto the surface. Pure with respect to
    /// its inputs; rendering the same state twice yields the same
    /// frame.
    fn render(&self, surface: Surface, state: &EditState) -> Result<RenderedFrame, ApplicationError>;
}

pub trait Clock {
    fn now_epoch_ms(&self) -> i64;
}

pub trait IdGenerator {
    fn new_id(&self) -> String;
}

pub trait ExportSink {
    /// Persist PNG bytes as a downloadable file; returns where it landed.
    fn export(&self, file_name: &str, png: &[u8]) -> Result<String, ApplicationError>;
}

/// How a share request was ultimately fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    CopiedToClipboard,
    DownloadOnly,
}

/// Native share-sheet capability. `Ok(false)` means the host cannot
/// share this payload at all, which is a normal branch, not an error.
pub trait ShareTarget {
    fn share(&self, file_name: &str, png: &[u8]) -> Result<bool, ApplicationError>;
}

/// Clipboard-image capability, same convention as [`ShareTarget`].
pub trait ClipboardTarget {
    fn copy_image(&self, png: &[u8]) -> Result<bool, ApplicationError>;
}
