use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to decode captured image: {0}")]
    Decode(String),

    #[error("Failed to compose PDF: {0}")]
    Compose(String),
}
