//! Fitting images onto pages.
//!
//! An image of known pixel dimensions is scaled to a page without distorting it,
//! then centered. Two rules are available through [FitMode]:
//!
//! - [FitMode::LongestSide] stretches the image's longer side to the matching page
//!   side. For an image wider than tall, the drawn width is the page width;
//!   otherwise the drawn height is the page height. The other side follows from the
//!   aspect ratio and is _not_ clamped, so a tall image that is wider than the page's
//!   own proportions will spill past the left and right edges.
//! - [FitMode::Contain] picks the largest scale at which the whole image stays on
//!   the page.
//!
//! # Example
//!
//! ```
//! use screentime_pdf::fit::{FitMode, ImageSize};
//! use screentime_pdf::pagesize::LETTER;
//!
//! let placement = FitMode::LongestSide.fit(ImageSize::new(1000, 500), LETTER);
//! assert_eq!(*placement.draw_width, 612.0);
//! assert_eq!(*placement.draw_height, 306.0);
//! assert_eq!(*placement.y_offset, 243.0);
//! ```

use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::*;

/// The dimensions of a raster image, in pixels. Both sides must be non-zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> ImageSize {
        ImageSize { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// width / height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Where an image is drawn on a page: its drawn size and the offset of its
/// lower-left corner from the page origin. Offsets go negative when the image
/// overflows the page.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub draw_width: Pt,
    pub draw_height: Pt,
    pub x_offset: Pt,
    pub y_offset: Pt,
}

impl Placement {
    /// Centre a `draw_width` x `draw_height` box on the page
    pub fn centered(draw_width: Pt, draw_height: Pt, page: PageSize) -> Placement {
        Placement {
            draw_width,
            draw_height,
            x_offset: (page.width - draw_width) / 2.0,
            y_offset: (page.height - draw_height) / 2.0,
        }
    }

    /// The placed rectangle in page coordinates
    pub fn rect(&self) -> Rect {
        Rect {
            x1: self.x_offset,
            y1: self.y_offset,
            x2: self.x_offset + self.draw_width,
            y2: self.y_offset + self.draw_height,
        }
    }
}

/// How an image is scaled onto a page
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FitMode {
    /// Match the image's longer side to the page. May overflow the page on the
    /// other axis.
    #[default]
    LongestSide,
    /// Largest scale that keeps the whole image on the page
    Contain,
}

impl FitMode {
    /// Compute where `image` goes on a page of `page` size. `image` must not be
    /// empty.
    pub fn fit(self, image: ImageSize, page: PageSize) -> Placement {
        debug_assert!(!image.is_empty(), "cannot fit an empty image");

        let (draw_width, draw_height) = match self {
            FitMode::LongestSide => {
                let aspect_ratio = image.aspect_ratio();
                if image.width > image.height {
                    (page.width, page.width / aspect_ratio)
                } else {
                    (page.height * aspect_ratio, page.height)
                }
            }
            FitMode::Contain => {
                let scale = (*page.width / image.width as f32)
                    .min(*page.height / image.height as f32);
                (
                    Pt(image.width as f32 * scale),
                    Pt(image.height as f32 * scale),
                )
            }
        };

        Placement::centered(draw_width, draw_height, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::{A4, LETTER};

    const EPSILON: f32 = 1e-3;

    const SIZES: &[(u32, u32)] = &[
        (1000, 500),
        (400, 800),
        (640, 480),
        (480, 640),
        (1, 1),
        (1920, 1080),
        (1170, 2532),
        (900, 1000),
        (5000, 3),
        (3, 5000),
    ];

    #[test]
    fn landscape_image_fills_page_width() {
        let placement = FitMode::LongestSide.fit(ImageSize::new(1000, 500), LETTER);
        assert_eq!(
            placement,
            Placement {
                draw_width: Pt(612.0),
                draw_height: Pt(306.0),
                x_offset: Pt(0.0),
                y_offset: Pt(243.0),
            }
        );
    }

    #[test]
    fn portrait_image_fills_page_height() {
        let placement = FitMode::LongestSide.fit(ImageSize::new(400, 800), LETTER);
        assert_eq!(
            placement,
            Placement {
                draw_width: Pt(396.0),
                draw_height: Pt(792.0),
                x_offset: Pt(108.0),
                y_offset: Pt(0.0),
            }
        );
    }

    #[test]
    fn square_image_fills_page_height() {
        let placement = FitMode::LongestSide.fit(ImageSize::new(300, 300), LETTER);
        assert_eq!(placement.draw_height, Pt(792.0));
        assert_eq!(placement.draw_width, Pt(792.0));
    }

    #[test]
    fn longest_side_matches_page_and_keeps_ratio() {
        for page in [LETTER, A4] {
            for &(w, h) in SIZES {
                let image = ImageSize::new(w, h);
                let p = FitMode::LongestSide.fit(image, page);
                if w > h {
                    assert_eq!(p.draw_width, page.width, "{w}x{h}");
                    let ratio = *p.draw_height / *p.draw_width;
                    assert!((ratio - h as f32 / w as f32).abs() < EPSILON, "{w}x{h}");
                } else {
                    assert_eq!(p.draw_height, page.height, "{w}x{h}");
                    let ratio = *p.draw_width / *p.draw_height;
                    assert!((ratio - w as f32 / h as f32).abs() < EPSILON, "{w}x{h}");
                }
            }
        }
    }

    #[test]
    fn placements_are_centered() {
        for mode in [FitMode::LongestSide, FitMode::Contain] {
            for &(w, h) in SIZES {
                let p = mode.fit(ImageSize::new(w, h), LETTER);
                assert!((*p.x_offset + *p.draw_width / 2.0 - 306.0).abs() < EPSILON);
                assert!((*p.y_offset + *p.draw_height / 2.0 - 396.0).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn fitting_is_deterministic() {
        for &(w, h) in SIZES {
            let image = ImageSize::new(w, h);
            let a = FitMode::LongestSide.fit(image, LETTER);
            let b = FitMode::LongestSide.fit(image, LETTER);
            assert_eq!(a.draw_width.to_bits(), b.draw_width.to_bits());
            assert_eq!(a.draw_height.to_bits(), b.draw_height.to_bits());
            assert_eq!(a.x_offset.to_bits(), b.x_offset.to_bits());
            assert_eq!(a.y_offset.to_bits(), b.y_offset.to_bits());
        }
    }

    #[test]
    fn longest_side_overflows_wide_portrait_images() {
        let p = FitMode::LongestSide.fit(ImageSize::new(900, 1000), LETTER);
        assert!((*p.draw_width - 712.8).abs() < EPSILON);
        assert!((*p.x_offset + 50.4).abs() < EPSILON);
        assert!(!LETTER.media_box().contains(&p.rect()));
    }

    #[test]
    fn contain_stays_on_page() {
        let p = FitMode::Contain.fit(ImageSize::new(900, 1000), LETTER);
        assert!((*p.draw_width - 612.0).abs() < EPSILON);
        assert!((*p.draw_height - 680.0).abs() < EPSILON);
        assert!((*p.y_offset - 56.0).abs() < EPSILON);

        for &(w, h) in SIZES {
            let p = FitMode::Contain.fit(ImageSize::new(w, h), LETTER);
            let r = p.rect();
            assert!(*r.x1 >= -EPSILON && *r.y1 >= -EPSILON, "{w}x{h}");
            assert!(*r.x2 <= 612.0 + EPSILON && *r.y2 <= 792.0 + EPSILON, "{w}x{h}");
        }
    }

    #[test]
    fn contain_agrees_with_longest_side_when_nothing_overflows() {
        for (w, h) in [(1000, 500), (400, 800)] {
            let image = ImageSize::new(w, h);
            let a = FitMode::LongestSide.fit(image, LETTER);
            let b = FitMode::Contain.fit(image, LETTER);
            assert!((*a.draw_width - *b.draw_width).abs() < EPSILON);
            assert!((*a.draw_height - *b.draw_height).abs() < EPSILON);
        }
    }

    #[test]
    fn rect_spans_placement() {
        let p = FitMode::LongestSide.fit(ImageSize::new(1000, 500), LETTER);
        let r = p.rect();
        assert_eq!(r.x1, Pt(0.0));
        assert_eq!(r.y1, Pt(243.0));
        assert_eq!(r.width(), Pt(612.0));
        assert_eq!(r.height(), Pt(306.0));
    }
}
