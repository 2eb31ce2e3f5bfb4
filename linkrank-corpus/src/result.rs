use serde::{Deserialize, Serialize};

/// One page of the collection and the names it links to, in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub url: String,
    pub outlinks: Vec<String>,
}

impl PageRecord {
    pub fn with_outlinks(url: String, outlinks: Vec<String>) -> Self {
        Self { url, outlinks }
    }
}

/// A line of a previously written rank listing: `<url> <outDegree> <weight>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankListEntry {
    pub url: String,
    pub out_degree: usize,
    pub weight: f64,
}
