//! Multi-page PDF composition from a single captured bitmap.
//!
//! One Image XObject is embedded once and drawn on every page. Page n
//! positions the full image at top-offset `-(n-1) * page height`; the
//! MediaBox clips each page to its vertical slice, so the bitmap itself
//! is never re-cropped.

use crate::capture::CapturedImage;
use crate::error::ExportError;
use crate::page::PageGeometry;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::io::Write;

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

/// Compose the captured image into a serialized multi-page PDF.
pub fn compose_pdf(image: &CapturedImage, page: &PageGeometry) -> Result<Vec<u8>, ExportError> {
    if image.width == 0 || image.height == 0 {
        return Err(ExportError::Compose("Captured image is empty".into()));
    }
    if image.pixels.len() != image.width as usize * image.height as usize * 3 {
        return Err(ExportError::Compose(format!(
            "Pixel buffer is {} bytes, expected {} for {}x{} RGB",
            image.pixels.len(),
            image.width as usize * image.height as usize * 3,
            image.width,
            image.height
        )));
    }

    let scaled_height = page.scaled_height(image.width, image.height);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    // Raw RGB pixels, zlib-compressed; the Filter entry keeps lopdf from
    // touching the stream again.
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&image.pixels)
        .map_err(|e| ExportError::Compose(format!("Pixel compression failed: {}", e)))?;
    let compressed = encoder
        .finish()
        .map_err(|e| ExportError::Compose(format!("Pixel compression failed: {}", e)))?;

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width as i64,
            "Height" => image.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        },
        compressed,
    ));

    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! { "Im0" => image_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for top_offset in page.top_offsets(scaled_height) {
        // Convert the from-top offset to the image's bottom-left corner
        // in PDF user space (origin at the bottom of the page).
        let y = page.height - scaled_height - top_offset;

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        real(page.width),
                        Object::Integer(0),
                        Object::Integer(0),
                        real(scaled_height),
                        Object::Integer(0),
                        real(y),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Compose(format!("Content encoding failed: {}", e)))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                real(page.width),
                real(page.height),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ExportError::Compose(format!("Save failed: {}", e)))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn solid_image(width: u32, height: u32) -> CapturedImage {
        CapturedImage {
            width,
            height,
            pixels: vec![0xED; width as usize * height as usize * 3],
        }
    }

    // Round page size keeps the expected offsets easy to read.
    const SQUARE: PageGeometry = PageGeometry {
        width: 100.0,
        height: 100.0,
    };

    fn number(obj: &Object) -> f64 {
        match obj {
            Object::Integer(i) => *i as f64,
            Object::Real(r) => *r as f64,
            other => panic!("expected number, got {:?}", other),
        }
    }

    fn image_y_offsets(bytes: &[u8]) -> Vec<f64> {
        let doc = Document::load_mem(bytes).unwrap();
        let mut offsets = Vec::new();
        for (_, page_id) in doc.get_pages() {
            let raw = doc.get_page_content(page_id).unwrap();
            let content = Content::decode(&raw).unwrap();
            let cm = content
                .operations
                .iter()
                .find(|op| op.operator == "cm")
                .expect("page has a cm operation");
            offsets.push(number(&cm.operands[5]));
        }
        offsets
    }

    #[test]
    fn short_capture_produces_a_single_page() {
        let pdf = compose_pdf(&solid_image(200, 100), &SQUARE).unwrap();
        let doc = Document::load_mem(&pdf).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn tall_capture_produces_ceiling_of_ratio_pages() {
        // Scaled height is 250 on a 100-high page: 3 pages.
        let pdf = compose_pdf(&solid_image(100, 250), &SQUARE).unwrap();
        let doc = Document::load_mem(&pdf).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn every_page_draws_the_full_image_at_a_shifted_offset() {
        // Image bottom-left y per page n is n * pageHeight - scaledHeight.
        let pdf = compose_pdf(&solid_image(100, 250), &SQUARE).unwrap();
        assert_eq!(image_y_offsets(&pdf), vec![-150.0, -50.0, 50.0]);
    }

    #[test]
    fn single_page_places_image_top_at_page_top() {
        let pdf = compose_pdf(&solid_image(200, 100), &SQUARE).unwrap();
        // Scaled height 50: bottom-left y = 100 - 50 = 50.
        assert_eq!(image_y_offsets(&pdf), vec![50.0]);
    }

    #[test]
    fn a4_output_carries_a4_media_box() {
        let pdf = compose_pdf(&solid_image(1190, 1684), &crate::page::A4_PORTRAIT).unwrap();
        let doc = Document::load_mem(&pdf).unwrap();
        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap().clone();
        assert!((number(&media_box[2]) - 595.28).abs() < 0.01);
        assert!((number(&media_box[3]) - 841.89).abs() < 0.01);
    }

    #[test]
    fn rejects_empty_capture() {
        let err = compose_pdf(&solid_image(0, 0), &SQUARE).unwrap_err();
        assert!(matches!(err, ExportError::Compose(_)));
    }

    #[test]
    fn rejects_mismatched_pixel_buffer() {
        let image = CapturedImage {
            width: 10,
            height: 10,
            pixels: vec![0; 7],
        };
        assert!(compose_pdf(&image, &SQUARE).is_err());
    }
}
