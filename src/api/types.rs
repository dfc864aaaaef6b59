use hodiya_core::mapping::{MappingConfigError, MappingEntry};
use hodiya_core::translit::TranslitError;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum HodiyaError {
    #[error("invalid direction: {selector}")]
    InvalidDirection { selector: String },
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl From<TranslitError> for HodiyaError {
    fn from(e: TranslitError) -> Self {
        match e {
            TranslitError::InvalidDirection(selector) => HodiyaError::InvalidDirection { selector },
        }
    }
}

impl From<MappingConfigError> for HodiyaError {
    fn from(e: MappingConfigError) -> Self {
        HodiyaError::InvalidData { msg: e.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct HodiyaMappingEntry {
    pub script: String,
    pub roman: String,
}

impl From<&MappingEntry> for HodiyaMappingEntry {
    fn from(e: &MappingEntry) -> Self {
        Self {
            script: e.script.clone(),
            roman: e.roman.clone(),
        }
    }
}
