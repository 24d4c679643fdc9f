//! Collects a folder of screenshots (or any raster images) into a single PDF,
//! one image per page, each scaled to the page and centered.

mod collection;
pub use collection::*;

mod document;
pub use document::*;

/// Scaling and centering images on pages
pub mod fit;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

mod page;
pub use page::*;

/// Standard paper sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;
