use crate::Surface;

// Text metrics approximated for Impact-style caption faces: ascent
// 0.8em above the baseline, descent 0.2em below.
const ASCENT_EM: f64 = 0.8;
const DESCENT_EM: f64 = 0.2;

/// Edge inset of both captions, as a fraction of the font size.
const EDGE_INSET_EM: f64 = 0.2;

/// Where and how heavily a caption line is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionLayout {
    /// Horizontal anchor of the centered line.
    pub x: f64,
    /// Baseline of the line.
    pub baseline: f64,
    /// Outline stroke width painted under the fill.
    pub stroke_width: f64,
}

/// Uppercase a caption, or report that it would draw nothing.
///
/// Whitespace-only captions never produce glyphs; the trim is only a
/// check, the drawn text keeps its inner spacing.
pub fn visible_caption(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    Some(text.to_uppercase())
}

pub fn stroke_width(font_size: u32) -> f64 {
    (f64::from(font_size) * 0.08).max(2.0)
}

/// Layout for the top caption: top edge sits `0.2em` below the surface top.
pub fn top_layout(surface: Surface, font_size: u32) -> CaptionLayout {
    let em = f64::from(font_size);
    CaptionLayout {
        x: f64::from(surface.width) / 2.0,
        baseline: em * EDGE_INSET_EM + em * ASCENT_EM,
        stroke_width: stroke_width(font_size),
    }
}

/// Layout for the bottom caption: bottom edge sits `0.2em` above the
/// surface bottom.
pub fn bottom_layout(surface: Surface, font_size: u32) -> CaptionLayout {
    let em = f64::from(font_size);
    CaptionLayout {
        x: f64::from(surface.width) / 2.0,
        baseline: f64::from(surface.height) - em * EDGE_INSET_EM - em * DESCENT_EM,
        stroke_width: stroke_width(font_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_captions_are_invisible() {
        assert_eq!(visible_caption(""), None);
        assert_eq!(visible_caption("   \t"), None);
    }

    #[test]
    fn visible_captions_are_uppercased_without_trimming() {
        assert_eq!(visible_caption(" hello "), Some(" HELLO ".to_string()));
    }

    #[test]
    fn stroke_width_scales_with_font_but_never_thins_out() {
        assert_eq!(stroke_width(100), 8.0);
        assert_eq!(stroke_width(10), 2.0);
    }

    #[test]
    fn captions_center_and_inset_from_edges() {
        let surface = Surface {
            width: 800,
            height: 450,
        };

        let top = top_layout(surface, 40);
        assert_eq!(top.x, 400.0);
        // top edge at 0.2em = 8px, ascent 32px above baseline
        assert_eq!(top.baseline, 40.0);

        let bottom = bottom_layout(surface, 40);
        assert_eq!(bottom.x, 400.0);
        // bottom edge at 450 - 8px, descent 8px below baseline
        assert_eq!(bottom.baseline, 434.0);
    }
}
