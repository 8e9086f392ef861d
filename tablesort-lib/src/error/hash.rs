//! URL hash errors

/// Error raised when a URL fragment cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// A key or value is not valid percent-encoded UTF-8.
    #[error("Invalid percent-encoding in '{component}'")]
    Decode { component: String },
}
