/// Why a chunk sequence could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// The input ended while a continuation chunk was still expected.
    Truncated,
    /// The sixth chunk of a value still carried the continuation bit.
    TooManyChunks,
    /// A byte outside the printable polyline alphabet (`?` to `~`).
    InvalidByte(u8),
}

/// Error type for polyline-codec operations.
#[derive(Debug, PartialEq)]
pub enum PolylineError {
    /// The encoded byte stream is not a valid chunk sequence.
    MalformedEncoding { position: usize, reason: Malformed },
    /// The encoded string held no coordinates.
    EmptyInput,
    /// The precision digits or factor cannot be used for quantization.
    InvalidPrecision(String),
    /// A zoom level too large to fit in six chunks.
    LevelOutOfRange(u32),
    /// A map object could not be parsed from JSON.
    JsonError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for Malformed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Malformed::Truncated => write!(f, "input ended mid-value"),
            Malformed::TooManyChunks => write!(f, "value exceeds six chunks"),
            Malformed::InvalidByte(b) => write!(f, "invalid byte 0x{:02X}", b),
        }
    }
}

impl std::fmt::Display for PolylineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolylineError::MalformedEncoding { position, reason } => {
                write!(f, "Malformed encoding at byte {}: {}", position, reason)
            }
            PolylineError::EmptyInput => write!(f, "Empty input"),
            PolylineError::InvalidPrecision(msg) => write!(f, "Invalid precision: {}", msg),
            PolylineError::LevelOutOfRange(level) => write!(f, "Level out of range: {}", level),
            PolylineError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            PolylineError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for PolylineError {}

impl From<serde_json::Error> for PolylineError {
    fn from(e: serde_json::Error) -> Self {
        PolylineError::JsonError(e.to_string())
    }
}
