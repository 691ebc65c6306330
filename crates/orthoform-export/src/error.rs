use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("refusing to deliver an empty document")]
    EmptyArtifact,

    #[error("delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}

impl From<lopdf::Error> for ExportError {
    fn from(e: lopdf::Error) -> Self {
        ExportError::Pdf(e.to_string())
    }
}

/// Errors reported by a [`crate::delivery::Host`].
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The host declined to show the document (e.g. a blocked popup).
    #[error("viewer refused: {0}")]
    Refused(String),

    #[error("could not create a handle for the document: {0}")]
    Handle(String),

    #[error("download failed: {0}")]
    Download(String),
}
