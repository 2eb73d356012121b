use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use memeforge_domain::{EditState, GalleryEntry, Surface};
use tracing::debug;

use crate::{
    ApplicationError, ClearGalleryCommand, ClipboardTarget, ExportEntryCommand,
    ExportFrameCommand, ExportSink, FrameRenderer, GalleryStore, ImageDecoder, ListGalleryCommand,
    LoadImageCommand, RenderFrameCommand, RenderedFrame, ResetEditorCommand, ReuseEntryCommand,
    SaveToGalleryCommand, SetCaptionsCommand, SetStyleCommand, ShareFrameCommand, ShareOutcome,
    ShareTarget,
};

/// The editor: owns the current [`EditState`] and its gallery, and
/// drives every operation of the render/state/persistence pipeline.
///
/// Mutations never redraw implicitly; callers ask for a frame when they
/// want one.
pub struct EditorService {
    state: EditState,
    gallery: GalleryStore,
    decoder: Box<dyn ImageDecoder>,
    renderer: Box<dyn FrameRenderer>,
    exporter: Box<dyn ExportSink>,
    share: Box<dyn ShareTarget>,
    clipboard: Box<dyn ClipboardTarget>,
}

impl EditorService {
    pub fn new(
        gallery: GalleryStore,
        decoder: Box<dyn ImageDecoder>,
        renderer: Box<dyn FrameRenderer>,
        exporter: Box<dyn ExportSink>,
        share: Box<dyn ShareTarget>,
        clipboard: Box<dyn ClipboardTarget>,
    ) -> Self {
        Self {
            state: EditState::default(),
            gallery,
            decoder,
            renderer,
            exporter,
            share,
            clipboard,
        }
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Decode raw bytes and make them the current base image. On decode
    /// failure the previous state is left untouched.
    pub fn load_image(&mut self, command: LoadImageCommand) -> Result<Surface, ApplicationError> {
        let image = self.decoder.decode(&command.bytes)?;
        Ok(self.state.set_image(image))
    }

    pub fn set_captions(&mut self, command: SetCaptionsCommand) {
        self.state.set_text(command.top, command.bottom);
    }

    pub fn set_style(&mut self, command: SetStyleCommand) -> Result<(), ApplicationError> {
        self.state
            .set_style(command.font_size, command.text_color, command.outline_color)?;
        Ok(())
    }

    pub fn reset(&mut self, _command: ResetEditorCommand) {
        self.state.reset();
    }

    /// Render the current state. Legal without an image: the frame is
    /// then the flat background and captions are never drawn.
    pub fn render(&self, _command: RenderFrameCommand) -> Result<RenderedFrame, ApplicationError> {
        let frame = self.renderer.render(self.state.surface(), &self.state)?;
        if frame.png.is_empty() {
            return Err(ApplicationError::Encode(
                "encoding produced no data".to_string(),
            ));
        }
        Ok(frame)
    }

    /// Render the current state and persist the result to the gallery.
    pub fn save_to_gallery(
        &self,
        _command: SaveToGalleryCommand,
    ) -> Result<GalleryEntry, ApplicationError> {
        self.require_image()?;
        let frame = self.render(RenderFrameCommand)?;
        let entry = self.gallery.save(BASE64.encode(&frame.png))?;
        debug!("saved render to gallery as {}", entry.id);
        Ok(entry)
    }

    pub fn list_gallery(
        &self,
        _command: ListGalleryCommand,
    ) -> Result<Vec<GalleryEntry>, ApplicationError> {
        self.gallery.load()
    }

    /// Re-enter a stored render as the base image, with fresh captions.
    pub fn reuse_entry(&mut self, command: ReuseEntryCommand) -> Result<Surface, ApplicationError> {
        let entry = self.find_entry(&command.id)?;
        let bytes = decode_payload(&entry)?;
        let image = self.decoder.decode(&bytes)?;
        self.state.set_text(String::new(), String::new());
        Ok(self.state.set_image(image))
    }

    /// Write the current render out as a file; reports where it landed.
    pub fn export(&self, command: ExportFrameCommand) -> Result<String, ApplicationError> {
        self.require_image()?;
        let frame = self.render(RenderFrameCommand)?;
        self.exporter.export(&command.file_name, &frame.png)
    }

    /// Write a stored payload out directly, without re-rendering.
    pub fn export_entry(&self, command: ExportEntryCommand) -> Result<String, ApplicationError> {
        let entry = self.find_entry(&command.id)?;
        let bytes = decode_payload(&entry)?;
        self.exporter.export(&command.file_name, &bytes)
    }

    /// Share the current render, falling back tier by tier: native
    /// share sheet, then clipboard image, then download-only. A missing
    /// capability is a normal branch; only real failures propagate.
    pub fn share(&self, _command: ShareFrameCommand) -> Result<ShareOutcome, ApplicationError> {
        self.require_image()?;
        let frame = self.render(RenderFrameCommand)?;

        if self.share.share("meme.png", &frame.png)? {
            return Ok(ShareOutcome::Shared);
        }
        if self.clipboard.copy_image(&frame.png)? {
            return Ok(ShareOutcome::CopiedToClipboard);
        }
        Ok(ShareOutcome::DownloadOnly)
    }

    pub fn clear_gallery(&self, _command: ClearGalleryCommand) -> Result<(), ApplicationError> {
        self.gallery.clear()
    }

    fn require_image(&self) -> Result<(), ApplicationError> {
        if self.state.image.is_none() {
            return Err(ApplicationError::InvalidInput(
                "no image loaded".to_string(),
            ));
        }
        Ok(())
    }

    fn find_entry(&self, id: &str) -> Result<GalleryEntry, ApplicationError> {
        self.gallery
            .find_by_id(id)?
            .ok_or_else(|| ApplicationError::NotFound(format!("gallery entry {id}")))
    }
}

fn decode_payload(entry: &GalleryEntry) -> Result<Vec<u8>, ApplicationError> {
    BASE64
        .decode(&entry.payload)
        .map_err(|error| ApplicationError::Decode(error.to_string()))
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use memeforge_domain::{BaseImage, Color};

    use super::*;
    use crate::{Clock, ExportSink, IdGenerator, StorageSlot};

    #[derive(Default)]
    struct FakeSlot {
        value: RefCell<Option<String>>,
    }

    impl StorageSlot for FakeSlot {
        fn read(&self) -> Result<Option<String>, ApplicationError> {
            Ok(self.value.borrow().clone())
        }

        fn write(&self, value: &str) -> Result<(), ApplicationError> {
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }

        fn delete(&self) -> Result<(), ApplicationError> {
            *self.value.borrow_mut() = None;
            Ok(())
        }
    }

    struct FakeClock;

    impl Clock for FakeClock {
        fn now_epoch_ms(&self) -> i64 {
            1_700_000_000_000
        }
    }

    #[derive(Default)]
    struct FakeIds {
        next: Cell<u32>,
    }

    impl IdGenerator for FakeIds {
        fn new_id(&self) -> String {
            let next = self.next.get();
            self.next.set(next + 1);
            format!("id-{next}")
        }
    }

    /// Decodes any byte slice starting with `ok:` as a 1600x900 image
    /// whose payload echoes the input; everything else fails.
    struct FakeDecoder;

    impl ImageDecoder for FakeDecoder {
        fn decode(&self, bytes: &[u8]) -> Result<BaseImage, ApplicationError> {
            if !bytes.starts_with(b"ok:") {
                return Err(ApplicationError::Decode("not an image".to_string()));
            }
            Ok(BaseImage {
                width: 1600,
                height: 900,
                payload: BASE64.encode(bytes),
            })
        }
    }

    struct FakeRenderer {
        png: Vec<u8>,
    }

    impl FrameRenderer for FakeRenderer {
        fn render(
            &self,
            surface: Surface,
            _state: &EditState,
        ) -> Result<RenderedFrame, ApplicationError> {
            Ok(RenderedFrame {
                width: surface.width,
                height: surface.height,
                png: self.png.clone(),
            })
        }
    }

    #[derive(Default)]
    struct FakeExporter;

    impl ExportSink for FakeExporter {
        fn export(&self, file_name: &str, png: &[u8]) -> Result<String, ApplicationError> {
            if png.is_empty() {
                return Err(ApplicationError::Encode("empty payload".to_string()));
            }
            Ok(format!("exports/{file_name}"))
        }
    }

    struct FakeShare {
        available: bool,
    }

    impl ShareTarget for FakeShare {
        fn share(&self, _file_name: &str, _png: &[u8]) -> Result<bool, ApplicationError> {
            Ok(self.available)
        }
    }

    struct FakeClipboard {
        available: bool,
    }

    impl ClipboardTarget for FakeClipboard {
        fn copy_image(&self, _png: &[u8]) -> Result<bool, ApplicationError> {
            Ok(self.available)
        }
    }

    fn service(share_available: bool, clipboard_available: bool) -> EditorService {
        EditorService::new(
            GalleryStore::new(
                Box::<FakeSlot>::default(),
                Box::new(FakeClock),
                Box::<FakeIds>::default(),
            ),
            Box::new(FakeDecoder),
            Box::new(FakeRenderer {
                png: b"png-bytes".to_vec(),
            }),
            Box::<FakeExporter>::default(),
            Box::new(FakeShare {
                available: share_available,
            }),
            Box::new(FakeClipboard {
                available: clipboard_available,
            }),
        )
    }

    #[test]
    fn load_caption_render_workflow() {
        let mut service = service(false, false);
        let surface = service
            .load_image(LoadImageCommand {
                bytes: b"ok:sample".to_vec(),
            })
            .expect("load should work");
        assert_eq!(
            surface,
            Surface {
                width: 800,
                height: 450
            }
        );

        service.set_captions(SetCaptionsCommand {
            top: " hello ".to_string(),
            bottom: String::new(),
        });
        service
            .set_style(SetStyleCommand {
                font_size: 48,
                text_color: Color::WHITE,
                outline_color: Color::BLACK,
            })
            .expect("style should apply");

        let frame = service.render(RenderFrameCommand).expect("render");
        assert_eq!(frame.width, 800);
        assert_eq!(frame.png, b"png-bytes");
    }

    #[test]
    fn decode_failure_leaves_state_unchanged() {
        let mut service = service(false, false);
        service
            .load_image(LoadImageCommand {
                bytes: b"ok:first".to_vec(),
            })
            .expect("load should work");
        let before = service.state().clone();

        let result = service.load_image(LoadImageCommand {
            bytes: b"garbage".to_vec(),
        });
        assert!(matches!(result, Err(ApplicationError::Decode(_))));
        assert_eq!(service.state(), &before);
    }

    #[test]
    fn save_export_and_share_require_an_image() {
        let service = service(true, true);
        assert!(matches!(
            service.save_to_gallery(SaveToGalleryCommand),
            Err(ApplicationError::InvalidInput(_))
        ));
        assert!(matches!(
            service.export(ExportFrameCommand {
                file_name: "meme.png".to_string()
            }),
            Err(ApplicationError::InvalidInput(_))
        ));
        assert!(matches!(
            service.share(ShareFrameCommand),
            Err(ApplicationError::InvalidInput(_))
        ));
    }

    #[test]
    fn save_then_reuse_roundtrip() {
        let mut service = service(false, false);
        service
            .load_image(LoadImageCommand {
                bytes: b"ok:sample".to_vec(),
            })
            .expect("load should work");
        service.set_captions(SetCaptionsCommand {
            top: "top".to_string(),
            bottom: "bottom".to_string(),
        });

        let entry = service
            .save_to_gallery(SaveToGalleryCommand)
            .expect("save should work");
        assert_eq!(entry.id, "id-0");
        assert_eq!(entry.created_at, 1_700_000_000_000);

        let listed = service
            .list_gallery(ListGalleryCommand)
            .expect("list should work");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, entry.id);

        service
            .reuse_entry(ReuseEntryCommand {
                id: entry.id.clone(),
            })
            .expect("reuse should work");
        assert!(service.state().image.is_some());
        assert!(service.state().top_text.is_empty());
        assert!(service.state().bottom_text.is_empty());
    }

    #[test]
    fn reuse_of_unknown_id_is_not_found() {
        let mut service = service(false, false);
        let result = service.reuse_entry(ReuseEntryCommand {
            id: "missing".to_string(),
        });
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[test]
    fn share_prefers_the_native_sheet() {
        let mut service = service(true, true);
        service
            .load_image(LoadImageCommand {
                bytes: b"ok:sample".to_vec(),
            })
            .expect("load should work");
        assert_eq!(
            service.share(ShareFrameCommand).expect("share"),
            ShareOutcome::Shared
        );
    }

    #[test]
    fn share_falls_back_to_clipboard_then_download_only() {
        let mut service = service(false, true);
        service
            .load_image(LoadImageCommand {
                bytes: b"ok:sample".to_vec(),
            })
            .expect("load should work");
        assert_eq!(
            service.share(ShareFrameCommand).expect("share"),
            ShareOutcome::CopiedToClipboard
        );

        let mut bare_host = self::service(false, false);
        bare_host
            .load_image(LoadImageCommand {
                bytes: b"ok:sample".to_vec(),
            })
            .expect("load should work");
        assert_eq!(
            bare_host.share(ShareFrameCommand).expect("share"),
            ShareOutcome::DownloadOnly
        );
    }

    #[test]
    fn empty_encoder_output_is_an_encode_failure() {
        let mut service = EditorService::new(
            GalleryStore::new(
                Box::<FakeSlot>::default(),
                Box::new(FakeClock),
                Box::<FakeIds>::default(),
            ),
            Box::new(FakeDecoder),
            Box::new(FakeRenderer { png: Vec::new() }),
            Box::<FakeExporter>::default(),
            Box::new(FakeShare { available: true }),
            Box::new(FakeClipboard { available: true }),
        );
        service
            .load_image(LoadImageCommand {
                bytes: b"ok:sample".to_vec(),
            })
            .expect("load should work");

        assert!(matches!(
            service.export(ExportFrameCommand {
                file_name: "meme.png".to_string()
            }),
            Err(ApplicationError::Encode(_))
        ));
    }

    #[test]
    fn export_entry_writes_the_stored_payload_untouched() {
        let mut service = service(false, false);
        service
            .load_image(LoadImageCommand {
                bytes: b"ok:sample".to_vec(),
            })
            .expect("load should work");
        let entry = service
            .save_to_gallery(SaveToGalleryCommand)
            .expect("save should work");

        let destination = service
            .export_entry(ExportEntryCommand {
                id: entry.id,
                file_name: "stored.png".to_string(),
            })
            .expect("export should work");
        assert_eq!(destination, "exports/stored.png");
    }
}
