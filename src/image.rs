use crate::fit::ImageSize;
use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use image::codecs::jpeg::JpegDecoder;
use image::{ColorType, DynamicImage, ExtendedColorType, ImageDecoder, ImageFormat};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::io::Cursor;
use std::path::Path;

/// The encoded pixel data of a raster image, as it will be written to the PDF.
/// Decoded pixels are never kept around.
pub enum RasterImageType {
    /// Baseline RGB JPEG data, which PDF readers decode natively
    DirectlyEmbeddableJpeg(Vec<u8>),
    /// zlib-compressed 8-bit RGB, with a zlib-compressed 8-bit alpha mask if the
    /// source had transparency
    Flate { rgb: Vec<u8>, mask: Option<Vec<u8>> },
}

/// An encoded raster image, ready to be placed on pages
pub struct Image {
    pub image: RasterImageType,
    /// width in pixels
    pub width: u32,
    /// height in pixels
    pub height: u32,
}

impl Image {
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, PDFError> {
        let data = std::fs::read(path.as_ref())?;
        Self::new_from_memory(data)
    }

    pub fn new_from_memory(data: Vec<u8>) -> Result<Image, PDFError> {
        let format = image::guess_format(&data)?;

        // CMYK and YCCK jpegs decode to RGB too, but their DCT data is 4-component
        let rgb_jpeg = format == ImageFormat::Jpeg
            && JpegDecoder::new(Cursor::new(&data))?.original_color_type()
                == ExtendedColorType::Rgb8;

        let image = image::load_from_memory_with_format(&data, format)?;

        if rgb_jpeg && image.color() == ColorType::Rgb8 {
            // we can embed it directly!
            Ok(Image {
                width: image.width(),
                height: image.height(),
                image: RasterImageType::DirectlyEmbeddableJpeg(data),
            })
        } else {
            Ok(Self::new_raster(image))
        }
    }

    /// Compress the pixels of `image`, which is dropped afterwards
    pub fn new_raster(image: DynamicImage) -> Image {
        let level = CompressionLevel::DefaultLevel as u8;

        let mask = image.color().has_alpha().then(|| {
            let alphas: Vec<u8> = image.to_rgba8().pixels().map(|p| p.0[3]).collect();
            compress_to_vec_zlib(&alphas, level)
        });
        let rgb = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

        Image {
            width: image.width(),
            height: image.height(),
            image: RasterImageType::Flate { rgb, mask },
        }
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));

        let (filter, bytes, mask) = match &self.image {
            RasterImageType::DirectlyEmbeddableJpeg(data) => (Filter::DctDecode, data, None),
            RasterImageType::Flate { rgb, mask } => (Filter::FlateDecode, rgb, mask.as_ref()),
        };

        let mut image = writer.image_xobject(id, bytes.as_slice());
        image.filter(filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);

        let mask_id = mask.map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, mask) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}
