//! Turning a folder of images into a PDF, one image per page.
//!
//! ```no_run
//! use screentime_pdf::Collection;
//!
//! // reads ./images, writes ./screentime-collection.pdf
//! let pages = Collection::default().write().expect("can build collection");
//! println!("wrote {pages} pages");
//! ```

use crate::document::Document;
use crate::fit::FitMode;
use crate::image::Image;
use crate::info::Info;
use crate::page::{ImageLayout, Page};
use crate::pagesize::{self, PageSize};
use crate::PDFError;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Folder the images are read from
pub const IMAGE_FOLDER: &str = "./images";
/// File the PDF is written to
pub const OUTPUT_PDF: &str = "screentime-collection.pdf";
/// File name endings that are treated as images, compared case-insensitively
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

const TITLE: &str = "Screentime Collection";

/// Whether a file name looks like a supported image. This is a plain case-insensitive
/// suffix match, so `"shot.PNG"` and `"shotpng"` both count.
pub fn is_supported_image(name: &str) -> bool {
    let name = name.as_bytes();
    SUPPORTED_EXTENSIONS.iter().any(|ext| {
        name.len() >= ext.len()
            && name[name.len() - ext.len()..].eq_ignore_ascii_case(ext.as_bytes())
    })
}

/// List the supported image files directly inside `folder`, sorted by file name.
/// Subfolders are never descended into.
pub fn list_images<P: AsRef<Path>>(folder: P) -> Result<Vec<PathBuf>, PDFError> {
    let folder = folder.as_ref();
    let read_folder = |source: std::io::Error| PDFError::ReadFolder {
        path: folder.to_owned(),
        source,
    };

    let mut images = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(read_folder)? {
        let entry = entry.map_err(read_folder)?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !is_supported_image(&name) {
            debug!(file = %name, "skipping unsupported file");
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            warn!(path = %path.display(), "skipping non-file entry with an image name");
            continue;
        }
        images.push(path);
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

/// Everything needed to turn a folder of images into a single PDF.
/// [Collection::default] uses [IMAGE_FOLDER], [OUTPUT_PDF] and US Letter pages.
#[derive(Debug, Clone)]
pub struct Collection {
    pub folder: PathBuf,
    pub output: PathBuf,
    pub page_size: PageSize,
    pub fit: FitMode,
}

impl Default for Collection {
    fn default() -> Self {
        Collection {
            folder: PathBuf::from(IMAGE_FOLDER),
            output: PathBuf::from(OUTPUT_PDF),
            page_size: pagesize::LETTER,
            fit: FitMode::default(),
        }
    }
}

impl Collection {
    /// Read every image in the folder and lay each one out on its own page. Each image
    /// is encoded as soon as it is read, so only one decoded image is in memory at a
    /// time. Stops at the first image that can't be read.
    pub fn build_document(&self) -> Result<Document, PDFError> {
        let paths = list_images(&self.folder)?;
        if paths.is_empty() {
            warn!(
                folder = %self.folder.display(),
                "no images found, the document will have no pages"
            );
        }

        let mut doc = Document::default();
        doc.set_info(Info::new().title(TITLE).clone());

        for path in paths {
            let image = Image::new_from_disk(&path)?;
            let size = image.size();
            if size.is_empty() {
                return Err(PDFError::EmptyImage { path });
            }

            let placement = self.fit.fit(size, self.page_size);
            debug!(
                path = %path.display(),
                width = size.width,
                height = size.height,
                ?placement,
                "placing image"
            );

            let image_id = doc.add_image(image);
            let mut page = Page::new(self.page_size);
            page.add_image(ImageLayout {
                image_id,
                position: placement.rect(),
            });
            doc.add_page(page);
        }

        Ok(doc)
    }

    /// Build the document and save it to the output path, returning the number of pages.
    /// The output file is only created once every image has been read.
    pub fn write(&self) -> Result<usize, PDFError> {
        let doc = self.build_document()?;
        let pages = doc.page_count();

        let out = File::create(&self.output)?;
        doc.write(BufWriter::new(out))?;

        info!(pages, output = %self.output.display(), "wrote collection");
        Ok(pages)
    }
}
