use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MetadataError {
    #[error("Missing required metadata field: {0}")]
    MissingRequiredField(String),

    #[error("Expected a JSON object for {0}")]
    NotAnObject(String),
}
