mod caption;
mod color;
mod editor;
mod error;
mod gallery;
mod geometry;

pub use caption::{bottom_layout, stroke_width, top_layout, visible_caption, CaptionLayout};
pub use color::Color;
pub use editor::{
    BaseImage, EditState, DEFAULT_FONT_SIZE, DEFAULT_OUTLINE_COLOR, DEFAULT_TEXT_COLOR,
};
pub use error::DomainError;
pub use gallery::{push_front_capped, GalleryEntry, GALLERY_CAP};
pub use geometry::{Surface, MAX_SURFACE_SIZE};
