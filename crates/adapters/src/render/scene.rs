use std::fmt::Write;

use memeforge_domain::{bottom_layout, top_layout, visible_caption, CaptionLayout, EditState, Surface};

/// Flat backdrop painted before anything else; all a frame shows until
/// an image is loaded.
pub const BACKGROUND_COLOR: &str = "#0f172a";

const FONT_FAMILY: &str = "Impact, Anton, sans-serif";

/// Compose the SVG scene for one frame: background rect, the base
/// image stretched exactly to the surface, then up to two outlined
/// caption lines. Pure string building; rasterization happens later.
pub fn compose_scene(surface: Surface, state: &EditState) -> String {
    // Zero-sized edges can fall out of extreme aspect ratios; clamp so
    // the scene always rasterizes.
    let surface = Surface {
        width: surface.width.max(1),
        height: surface.height.max(1),
    };

    let mut svg = String::with_capacity(4096);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        surface.width, surface.height, surface.width, surface.height,
    );
    let _ = write!(
        svg,
        "<rect width=\"100%\" height=\"100%\" fill=\"{BACKGROUND_COLOR}\"/>",
    );

    // Captions need a base image; without one the frame stays blank.
    let Some(image) = &state.image else {
        svg.push_str("</svg>");
        return svg;
    };

    let _ = write!(
        svg,
        "<image x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" preserveAspectRatio=\"none\" xlink:href=\"data:image/png;base64,{}\"/>",
        surface.width, surface.height, image.payload,
    );

    if let Some(text) = visible_caption(&state.top_text) {
        caption_svg(&mut svg, &text, top_layout(surface, state.font_size), state);
    }
    if let Some(text) = visible_caption(&state.bottom_text) {
        caption_svg(
            &mut svg,
            &text,
            bottom_layout(surface, state.font_size),
            state,
        );
    }

    svg.push_str("</svg>");
    svg
}

/// One caption line, stroke painted under the fill so the outline never
/// eats into the glyphs.
fn caption_svg(svg: &mut String, text: &str, layout: CaptionLayout, state: &EditState) {
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{FONT_FAMILY}\" font-size=\"{}\" paint-order=\"stroke\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\" fill=\"{}\">{}</text>",
        layout.x,
        layout.baseline,
        state.font_size,
        state.outline_color,
        layout.stroke_width,
        state.text_color,
        escape_xml(text),
    );
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use memeforge_domain::{BaseImage, Color};

    use super::*;

    fn state_with_image() -> EditState {
        let mut state = EditState::default();
        state.set_image(BaseImage {
            width: 800,
            height: 450,
            payload: "cGF5bG9hZA==".to_string(),
        });
        state
    }

    #[test]
    fn blank_state_is_background_only() {
        let mut state = EditState::default();
        state.set_text("TOP".to_string(), "BOTTOM".to_string());

        let svg = compose_scene(state.surface(), &state);
        assert!(svg.contains(BACKGROUND_COLOR));
        assert!(!svg.contains("<image"));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn image_is_stretched_exactly_to_the_surface() {
        let state = state_with_image();
        let svg = compose_scene(state.surface(), &state);
        assert!(svg.contains("preserveAspectRatio=\"none\""));
        assert!(svg.contains("width=\"800\" height=\"450\""));
        assert!(svg.contains("data:image/png;base64,cGF5bG9hZA=="));
    }

    #[test]
    fn captions_are_uppercased_and_centered() {
        let mut state = state_with_image();
        state.set_text(" hello ".to_string(), String::new());

        let svg = compose_scene(state.surface(), &state);
        assert!(svg.contains("> HELLO </text>"));
        assert!(svg.contains("x=\"400\""));
        assert_eq!(svg.matches("<text").count(), 1);
    }

    #[test]
    fn whitespace_captions_draw_nothing() {
        let mut state = state_with_image();
        state.set_text("   ".to_string(), "\t".to_string());

        let svg = compose_scene(state.surface(), &state);
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn outline_is_painted_under_the_fill() {
        let mut state = state_with_image();
        state.set_text("top".to_string(), "bottom".to_string());
        state
            .set_style(50, Color::WHITE, Color::BLACK)
            .expect("style should apply");

        let svg = compose_scene(state.surface(), &state);
        assert!(svg.contains("paint-order=\"stroke\""));
        assert!(svg.contains("stroke-linejoin=\"round\""));
        // max(50 * 0.08, 2)
        assert!(svg.contains("stroke-width=\"4\""));
        assert!(svg.contains("stroke=\"#000000\""));
        assert!(svg.contains("fill=\"#ffffff\""));
        assert_eq!(svg.matches("<text").count(), 2);
    }

    #[test]
    fn caption_text_is_xml_escaped() {
        let mut state = state_with_image();
        state.set_text("a < b & c".to_string(), String::new());

        let svg = compose_scene(state.surface(), &state);
        assert!(svg.contains("A &lt; B &amp; C"));
    }
}
