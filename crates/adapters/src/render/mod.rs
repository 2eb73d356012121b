mod scene;

use std::sync::Arc;

use memeforge_application::{ApplicationError, FrameRenderer, RenderedFrame};
use memeforge_domain::{EditState, Surface};

pub use scene::BACKGROUND_COLOR;

/// Rasterizes the composed SVG scene with resvg/tiny-skia and encodes
/// the pixels as PNG.
pub struct ResvgFrameRenderer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl ResvgFrameRenderer {
    pub fn new() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        Self {
            fontdb: Arc::new(fontdb),
        }
    }
}

impl Default for ResvgFrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRenderer for ResvgFrameRenderer {
    fn render(
        &self,
        surface: Surface,
        state: &EditState,
    ) -> Result<RenderedFrame, ApplicationError> {
        let svg = scene::compose_scene(surface, state);

        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);
        let tree = usvg::Tree::from_str(&svg, &options)
            .map_err(|error| ApplicationError::Encode(error.to_string()))?;

        let width = (tree.size().width() as u32).max(1);
        let height = (tree.size().height() as u32).max(1);
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ApplicationError::Encode("failed to create pixmap".to_string()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let png = pixmap
            .encode_png()
            .map_err(|error| ApplicationError::Encode(error.to_string()))?;

        Ok(RenderedFrame { width, height, png })
    }
}
