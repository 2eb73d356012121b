mod error;
mod gallery;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use gallery::GalleryStore;
pub use ports::{
    ClipboardTarget, Clock, ExportSink, FrameRenderer, IdGenerator, ImageDecoder, RenderedFrame,
    ShareOutcome, ShareTarget, StorageSlot,
};
pub use service::EditorService;
pub use use_cases::{
    ClearGalleryCommand, ExportEntryCommand, ExportFrameCommand, ListGalleryCommand,
    LoadImageCommand, RenderFrameCommand, ResetEditorCommand, ReuseEntryCommand,
    SaveToGalleryCommand, SetCaptionsCommand, SetStyleCommand, ShareFrameCommand,
};
