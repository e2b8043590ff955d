use std::path::PathBuf;

/// Error type that can be returned by fallible operations in this crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Opening or creating a file failed
    #[error("Failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error reading or writing CSV data; could wrap IO or parsing errors
    #[error("Error processing CSV")]
    Csv(#[from] csv::Error),
    /// The input CSV lacks the `customer` or `order_price` header
    #[error("CSV must contain 'customer' and 'order_price' columns (found: {found})")]
    MissingColumns { found: String },
    /// Rendering a chart failed
    #[error("Failed to render chart {}: {message}", path.display())]
    Chart { path: PathBuf, message: String },
    /// The configuration file could not be parsed
    #[error("Invalid configuration in {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// The configuration parsed but holds an unusable value
    #[error("Invalid configuration in {}: {message}", path.display())]
    InvalidSetting { path: PathBuf, message: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, Error>;
