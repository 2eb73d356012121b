use crate::{Color, DomainError, Surface};

pub const DEFAULT_FONT_SIZE: u32 = 36;
pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;
pub const DEFAULT_OUTLINE_COLOR: Color = Color::BLACK;

/// A decoded base image: pixel dimensions plus its re-encoded PNG
/// payload (base64), the same opaque payload format the gallery stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseImage {
    pub width: u32,
    pub height: u32,
    pub payload: String,
}

impl BaseImage {
    pub fn surface(&self) -> Surface {
        Surface::fit(self.width, self.height)
    }
}

/// In-memory record of the current edit. Never persisted directly;
/// only its rendered projection reaches the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    pub image: Option<BaseImage>,
    pub top_text: String,
    pub bottom_text: String,
    pub font_size: u32,
    pub text_color: Color,
    pub outline_color: Color,
}

impl Default for EditState {
    fn default() -> Self {
        Self {
            image: None,
            top_text: String::new(),
            bottom_text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            text_color: DEFAULT_TEXT_COLOR,
            outline_color: DEFAULT_OUTLINE_COLOR,
        }
    }
}

impl EditState {
    /// Replace the base image. A newer image simply supersedes the
    /// previous one; there is no partial state on the way in.
    pub fn set_image(&mut self, image: BaseImage) -> Surface {
        let surface = image.surface();
        self.image = Some(image);
        surface
    }

    pub fn set_text(&mut self, top: String, bottom: String) {
        self.top_text = top;
        self.bottom_text = bottom;
    }

    pub fn set_style(
        &mut self,
        font_size: u32,
        text_color: Color,
        outline_color: Color,
    ) -> Result<(), DomainError> {
        if font_size == 0 {
            return Err(DomainError::InvalidFontSize(font_size));
        }
        self.font_size = font_size;
        self.text_color = text_color;
        self.outline_color = outline_color;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Surface the renderer should compose onto: the fitted image
    /// dimensions, or the blank default before any image is loaded.
    pub fn surface(&self) -> Surface {
        self.image
            .as_ref()
            .map(BaseImage::surface)
            .unwrap_or_default()
    }
}
