use crate::collection::read_file;
use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Default name of the inverted index file.
pub const INVERTED_INDEX_FILE: &str = "invertedIndex.txt";

/// Term to page-name postings, read from `<term> <url> <url> ...` lines.
///
/// A term that appears on several lines keeps the postings of every line,
/// and a url repeated on a line is kept once per occurrence.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<String>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(content: &str) -> Self {
        let mut index = Self::new();
        for line in content.lines() {
            let mut tokens = line.split_whitespace();
            let Some(term) = tokens.next() else {
                continue;
            };
            index.insert(term, tokens.map(str::to_string));
        }
        index
    }

    pub fn insert(&mut self, term: &str, urls: impl IntoIterator<Item = String>) {
        self.postings
            .entry(term.to_string())
            .or_default()
            .extend(urls);
    }

    /// Postings for an exact, case-sensitive term.
    pub fn postings(&self, term: &str) -> &[String] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

pub fn read_inverted_index(path: &Path) -> Result<InvertedIndex> {
    let content = read_file(path)?;
    let index = InvertedIndex::parse(&content);
    debug!("Read {} term(s) from {}", index.term_count(), path.display());
    Ok(index)
}
