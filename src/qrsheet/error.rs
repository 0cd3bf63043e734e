use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrSheetError {
    #[error("Invalid range: {0}")]
    Range(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("QR encoding error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("SVG error: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("PNG encoding error: {0}")]
    Png(String),

    #[error("Image error: {0}")]
    Image(#[from] printpdf::image_crate::ImageError),

    #[error("PDF error: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, QrSheetError>;
