use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinpointError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("PDF backend error: {0}")]
    Pdf(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedExtension(String),

    #[error("Document has no pages")]
    EmptyDocument,

    #[error("Page index {index} out of range (total: {total})")]
    PageOutOfRange { index: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, PinpointError>;
