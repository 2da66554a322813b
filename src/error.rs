use std::path::PathBuf;

/// Errors produced while factoring, caching, rendering or writing a prime clock.
#[derive(Debug, thiserror::Error)]
pub enum PrimeClockError {
    /// Integer or prime factor outside the supported basis.
    #[error("value {value} is outside the supported range 0..=60")]
    OutOfRange { value: i64 },

    /// The persisted decomposition table is missing or unreadable.
    #[error("decomposition table at {} is unavailable: {reason}", path.display())]
    CacheUnavailable { path: PathBuf, reason: String },

    #[error("render failed: {0}")]
    Render(String),

    /// The output path has no extension the image encoder knows.
    #[error("unsupported output format for {}", path.display())]
    UnsupportedOutput { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PrimeClockError>;
