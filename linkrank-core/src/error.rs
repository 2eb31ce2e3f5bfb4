use linkrank_corpus::CorpusError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("Unknown page: '{0}'")]
    UnknownNode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Degenerate weight: '{from_url}' contributes to '{to_url}' but its {term} aggregate is {value}")]
    DegenerateWeight {
        from_url: String,
        to_url: String,
        term: &'static str,
        value: f64,
    },

    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Aggregation error: {0}")]
    Aggregate(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RankError>;
