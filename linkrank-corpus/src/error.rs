use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Page '{page}' is missing the '{marker}' marker")]
    MissingMarker { page: String, marker: &'static str },
}

pub type Result<T> = std::result::Result<T, CorpusError>;
