use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("failed to read image folder {}", path.display())]
    /// The input folder could not be listed
    ReadFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),

    #[error("image {} has no pixels", path.display())]
    /// The image decoded to zero width or height
    EmptyImage { path: PathBuf },

    #[error("page missing from document")]
    /// The page order refers to a page that is not in the document
    PageMissing,
}
