//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation, in points.
//!
//! # Example
//!
//! ```
//! use screentime_pdf::pagesize::{LETTER, A4};
//!
//! assert_eq!(*LETTER.width, 612.0);
//! assert!(A4.height > A4.width);
//! ```

use crate::rect::Rect;
use crate::units::*;

/// Page dimensions in points
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageSize {
    pub width: Pt,
    pub height: Pt,
}

impl PageSize {
    pub const fn new(width: Pt, height: Pt) -> PageSize {
        PageSize { width, height }
    }

    /// The full page as a rectangle anchored at the origin
    pub fn media_box(&self) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: self.width,
            y2: self.height,
        }
    }
}

// north american sizes
pub const LETTER: PageSize = PageSize::new(Pt(8.5 * 72.0), Pt(11.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A4: PageSize = PageSize::new(Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
