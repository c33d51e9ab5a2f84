use std::path::PathBuf;

use thiserror::Error;

// Error types for seat map processing
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("XML parse error: {0}")]
    XmlParseError(String),

    #[error("Missing required element <{element}> in <{parent}>")]
    MissingRequiredField { element: String, parent: String },

    #[error("Missing required attribute {attribute} on <{element}>")]
    MissingRequiredAttribute { attribute: String, element: String },

    #[error("Unresolved seat definition reference: {0}")]
    UnresolvedSeatDefinition(String),

    #[error("JSON serialize error: {0}")]
    JsonSerializeError(String),

    #[error("I/O error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Extraction task failed: {0}")]
    TaskFailed(String),
}

impl ProcessingError {
    pub(crate) fn missing_field(element: &str, parent: &str) -> Self {
        ProcessingError::MissingRequiredField {
            element: element.to_string(),
            parent: parent.to_string(),
        }
    }

    pub(crate) fn missing_attribute(attribute: &str, element: &str) -> Self {
        ProcessingError::MissingRequiredAttribute {
            attribute: attribute.to_string(),
            element: element.to_string(),
        }
    }
}
