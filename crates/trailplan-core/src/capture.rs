//! Decoding of the rasterized page snapshot.
//!
//! The browser hands us the capture as a PNG data URL
//! (`canvas.toDataURL('image/png')`). We decode it once into flat RGB8
//! pixels; the capture is flattened over an opaque background before it
//! reaches us, so any alpha channel carries no information and is dropped.

use crate::error::ExportError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// A raster snapshot of the page content. Produced once per export and
/// immediately consumed by the PDF composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    /// Width in device pixels
    pub width: u32,
    /// Height in device pixels
    pub height: u32,
    /// Flat RGB8 pixel data, `width * height * 3` bytes, row-major
    pub pixels: Vec<u8>,
}

impl CapturedImage {
    /// Decode a `data:image/png;base64,` URL as emitted by
    /// `canvas.toDataURL('image/png')`.
    pub fn from_data_url(url: &str) -> Result<Self, ExportError> {
        let encoded = url
            .strip_prefix(PNG_DATA_URL_PREFIX)
            .ok_or_else(|| ExportError::Decode("Not a PNG data URL".into()))?;

        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| ExportError::Decode(format!("Invalid base64 payload: {}", e)))?;

        Self::from_png_bytes(&bytes)
    }

    /// Decode raw PNG bytes into RGB8 pixels.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        let decoder = png::Decoder::new(bytes);
        let mut reader = decoder
            .read_info()
            .map_err(|e| ExportError::Decode(format!("Invalid PNG header: {}", e)))?;

        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e| ExportError::Decode(format!("Failed to decode PNG frame: {}", e)))?;
        buf.truncate(info.buffer_size());

        if info.bit_depth != png::BitDepth::Eight {
            return Err(ExportError::Decode(format!(
                "Unsupported bit depth: {:?}",
                info.bit_depth
            )));
        }

        let pixels = match info.color_type {
            png::ColorType::Rgb => buf,
            png::ColorType::Rgba => buf
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g]).collect(),
            png::ColorType::GrayscaleAlpha => buf
                .chunks_exact(2)
                .flat_map(|px| [px[0], px[0], px[0]])
                .collect(),
            other => {
                return Err(ExportError::Decode(format!(
                    "Unsupported color type: {:?}",
                    other
                )))
            }
        };

        Ok(Self {
            width: info.width,
            height: info.height,
            pixels,
        })
    }
}
