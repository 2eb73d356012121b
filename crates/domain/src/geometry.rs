/// Longest edge a render surface is allowed to have.
pub const MAX_SURFACE_SIZE: u32 = 800;

/// The pixel dimensions of the surface being composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    /// Fit natural image dimensions into the surface cap.
    ///
    /// Dimensions already within [`MAX_SURFACE_SIZE`] pass through
    /// unchanged; larger images are shrunk so the longer edge lands
    /// exactly on the cap, preserving aspect ratio within rounding.
    pub fn fit(natural_width: u32, natural_height: u32) -> Self {
        if natural_width <= MAX_SURFACE_SIZE && natural_height <= MAX_SURFACE_SIZE {
            return Self {
                width: natural_width,
                height: natural_height,
            };
        }

        let ratio = (f64::from(MAX_SURFACE_SIZE) / f64::from(natural_width))
            .min(f64::from(MAX_SURFACE_SIZE) / f64::from(natural_height));
        Self {
            width: (f64::from(natural_width) * ratio).round() as u32,
            height: (f64::from(natural_height) * ratio).round() as u32,
        }
    }
}

impl Default for Surface {
    /// Surface shown before any image is loaded.
    fn default() -> Self {
        Self {
            width: MAX_SURFACE_SIZE,
            height: MAX_SURFACE_SIZE / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_within_cap_pass_through() {
        assert_eq!(
            Surface::fit(640, 480),
            Surface {
                width: 640,
                height: 480
            }
        );
        assert_eq!(
            Surface::fit(800, 800),
            Surface {
                width: 800,
                height: 800
            }
        );
    }

    #[test]
    fn longer_edge_lands_on_cap() {
        assert_eq!(
            Surface::fit(1600, 900),
            Surface {
                width: 800,
                height: 450
            }
        );
        assert_eq!(
            Surface::fit(900, 1600),
            Surface {
                width: 450,
                height: 800
            }
        );
    }

    #[test]
    fn aspect_ratio_is_preserved_within_rounding() {
        let fitted = Surface::fit(3333, 1111);
        assert_eq!(fitted.width, 800);
        let expected = f64::from(fitted.width) * 1111.0 / 3333.0;
        assert!((f64::from(fitted.height) - expected).abs() <= 0.5);
    }

    #[test]
    fn extreme_aspect_rounds_short_edge_to_zero() {
        // Rasterizers clamp this to one pixel; the fit itself stays a
        // pure rounding of the ratio.
        let fitted = Surface::fit(10_000, 1);
        assert_eq!(fitted.width, 800);
        assert_eq!(fitted.height, 0);
    }
}
