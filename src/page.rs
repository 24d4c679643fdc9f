use crate::image::Image;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};
use std::io::Write;

/// An image drawn into a rectangle of the page. The image is stretched to fill
/// the rectangle exactly.
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// The images on the page, drawn in order
    pub contents: Vec<ImageLayout>,
}

impl Page {
    pub fn new(size: PageSize) -> Page {
        Page {
            media_box: size.media_box(),
            contents: Vec::default(),
        }
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(image);
    }

    #[allow(clippy::write_with_newline)]
    fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        let mut content: Vec<u8> = Vec::default();

        for image in self.contents.iter() {
            write!(&mut content, "q\n")?;
            write!(
                &mut content,
                "{} 0 0 {} {} {} cm\n",
                image.position.width(),
                image.position.height(),
                image.position.x1,
                image.position.y1
            )?;
            write!(&mut content, "/I{} Do\n", image.image_id.index())?;
            write!(&mut content, "Q\n")?;
        }

        Ok(content)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(PDFError::PageMissing)?;
        let page_tree_id = refs.get(RefType::PageTree).ok_or(PDFError::PageMissing)?;

        let mut used: Vec<usize> = self
            .contents
            .iter()
            .filter(|layout| images.get(layout.image_id).is_some())
            .map(|layout| layout.image_id.index())
            .collect();
        used.sort_unstable();
        used.dedup();

        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(page_tree_id);

        let mut resources = page.resources();
        let mut resource_xobjects = resources.x_objects();
        for i in used {
            if let Some(image_ref) = refs.get(RefType::Image(i)) {
                resource_xobjects.pair(Name(format!("I{i}").as_bytes()), image_ref);
            }
        }
        resource_xobjects.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = self.render()?;
        writer.stream(content_id, rendered.as_slice());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::{FitMode, ImageSize};
    use crate::pagesize::LETTER;
    use crate::units::Pt;
    use image::DynamicImage;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_covers_page_size() {
        let page = Page::new(LETTER);
        assert_eq!(page.media_box.x2, Pt(612.0));
        assert_eq!(page.media_box.y2, Pt(792.0));
        assert!(page.contents.is_empty());
    }

    #[test]
    fn renders_image_placement() {
        let mut images: Arena<Image> = Arena::new();
        let image_id = images.alloc(Image::new_raster(DynamicImage::new_rgb8(1000, 500)));

        let placement = FitMode::LongestSide.fit(ImageSize::new(1000, 500), LETTER);
        let mut page = Page::new(LETTER);
        page.add_image(ImageLayout {
            image_id,
            position: placement.rect(),
        });

        let rendered = String::from_utf8(page.render().unwrap()).unwrap();
        assert_eq!(rendered, "q\n612 0 0 306 0 243 cm\n/I0 Do\nQ\n");
    }

    #[test]
    fn empty_page_renders_nothing() {
        let page = Page::new(LETTER);
        assert!(page.render().unwrap().is_empty());
    }
}
