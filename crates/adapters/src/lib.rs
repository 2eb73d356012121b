pub mod fs;
pub mod migrations;
pub mod presenters;
pub mod render;
pub mod share;
pub mod sqlite;

pub use fs::{FsExportSink, SystemClock};
pub use presenters::{present_entry_row, present_loaded, present_saved, present_share_outcome};
pub use render::ResvgFrameRenderer;
pub use share::{HeadlessClipboard, HeadlessShareTarget};
pub use sqlite::SqliteStorageSlot;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use memeforge_application::{ApplicationError, IdGenerator, ImageDecoder};
use memeforge_domain::BaseImage;

/// Decodes raw bytes with the image crate and normalizes the result to
/// a base64 PNG payload, the format the renderer embeds and the gallery
/// stores.
#[derive(Debug, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<BaseImage, ApplicationError> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;

        let mut png = std::io::Cursor::new(Vec::new());
        decoded
            .write_to(&mut png, image::ImageFormat::Png)
            .map_err(|error| ApplicationError::Encode(error.to_string()))?;

        Ok(BaseImage {
            width: decoded.width(),
            height: decoded.height(),
            payload: BASE64.encode(png.into_inner()),
        })
    }
}

#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn new_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
