pub mod adjacency;
pub mod aggregate;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod pipeline;
pub mod presenter;
pub mod rank;
pub mod report;
pub mod search;

pub use error::{RankError, Result};
pub use graph::{LinkGraph, LinkOutcome, Node, NodeId};
pub use presenter::{RankedPage, rank_listing};
pub use rank::{RankConfig, RankSummary, rank};
