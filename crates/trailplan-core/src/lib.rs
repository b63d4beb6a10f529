//! Race-plan page core: plan data and the PDF export pipeline.
//!
//! Everything in this crate is browser-free and host-testable:
//! - `plan`: the static race-plan rows rendered by the page
//! - `capture`: decoding of the rasterized page snapshot
//! - `page`: A4 geometry and the offset-based pagination arithmetic
//! - `compose`: lopdf composition of the multi-page output document
//!
//! The browser layer (`trailplan-wasm`) captures the page with
//! `html2canvas`, then calls [`export_pdf_from_data_url`] and downloads
//! the returned bytes.

pub mod capture;
pub mod compose;
pub mod error;
pub mod page;
pub mod plan;

pub use capture::CapturedImage;
pub use compose::compose_pdf;
pub use error::ExportError;
pub use page::{PageGeometry, A4_PORTRAIT};

/// Fixed name of the downloaded file.
pub const EXPORT_FILE_NAME: &str = "MonPlanEcoTrail2026.pdf";

/// Decode a PNG data URL and compose it into an A4 portrait PDF.
pub fn export_pdf_from_data_url(data_url: &str) -> Result<Vec<u8>, ExportError> {
    let image = CapturedImage::from_data_url(data_url)?;
    compose_pdf(&image, &A4_PORTRAIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

    fn png_data_url(width: u32, height: u32) -> String {
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, width, height);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            let data = vec![0xD6; width as usize * height as usize * 3];
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&data).unwrap();
        }
        format!("data:image/png;base64,{}", BASE64.encode(&bytes))
    }

    #[test]
    fn full_pipeline_produces_a_loadable_pdf() {
        // Aspect ratio just over two A4 pages: 595.28 wide capture of
        // height 2.5 * 841.89 scales to exactly 2.5 page heights.
        let width = 596u32;
        let height = (2.5 * 841.89 * 596.0 / 595.28) as u32;
        let pdf = export_pdf_from_data_url(&png_data_url(width, height)).unwrap();
        let doc = lopdf::Document::load_mem(&pdf).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn bad_data_url_is_a_decode_error() {
        let err = export_pdf_from_data_url("data:text/plain;base64,AAAA").unwrap_err();
        assert!(matches!(err, ExportError::Decode(_)));
    }
}
