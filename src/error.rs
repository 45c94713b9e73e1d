//! Error types for bearwatch.

/// Result type alias for bearwatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for bearwatch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// No file was selected before submission.
    #[error("no file selected for detection")]
    NoFileSelected,

    /// A detection request is already outstanding for this session.
    #[error("a detection request is already in flight")]
    RequestInFlight,

    /// Input file does not exist.
    #[error("input file does not exist: {path}")]
    InputFileNotFound {
        /// Path to the missing input file.
        path: std::path::PathBuf,
    },

    /// Failed to read an input file.
    #[error("failed to read input file '{path}'")]
    InputFileRead {
        /// Path to the input file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Transport-level request failure (DNS, connect, timeout).
    #[error("request to '{url}' failed: {source}")]
    RequestFailed {
        /// URL that failed.
        url: String,
        /// Underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Server rejected the request with an error message in the body.
    #[error("detection failed: {message}")]
    ServerRejected {
        /// Error message from the response body.
        message: String,
    },

    /// Server returned a non-success status without a usable error body.
    #[error("server returned HTTP {status}")]
    ServerStatus {
        /// HTTP status code.
        status: u16,
    },

    /// Response body was not valid JSON for the expected shape.
    #[error("unexpected response from '{url}'")]
    InvalidResponse {
        /// URL that produced the response.
        url: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Processed image payload could not be decoded.
    #[error("failed to decode processed image data")]
    ImageDecode {
        /// Underlying decode error.
        #[source]
        source: base64::DecodeError,
    },

    /// Failed to write an output file.
    #[error("failed to write output file '{path}'")]
    OutputWrite {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}
