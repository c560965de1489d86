use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation crate.
///
/// The core physics surface is total (every collision-time query returns a
/// time value, using the `NEVER` sentinel for "no event"), so errors only
/// arise at validated construction and at the snapshot I/O boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Malformed particle snapshot data.
    #[error("parse error: {0}")]
    Parse(String),

    /// Propagated I/O errors from snapshot loading/exporting.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
