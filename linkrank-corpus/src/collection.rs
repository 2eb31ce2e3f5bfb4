use crate::error::{CorpusError, Result};
use crate::result::PageRecord;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Name of the file listing every page of a corpus.
pub const COLLECTION_FILE: &str = "collection.txt";

/// Extension appended to a page name to find its file.
pub const PAGE_EXTENSION: &str = "txt";

/// Token that opens the outbound-link section of a page.
pub const LINKS_START: &str = "Section-1";

/// Token that closes the outbound-link section of a page.
pub const LINKS_END: &str = "#end";

pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the whitespace-separated page names of a collection file.
/// Repeated names are kept only at their first position.
pub fn read_collection_names(path: &Path) -> Result<Vec<String>> {
    let content = read_file(path)?;
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for token in content.split_whitespace() {
        if seen.insert(token) {
            names.push(token.to_string());
        } else {
            debug!("Ignoring repeated collection entry {}", token);
        }
    }

    Ok(names)
}

/// Extract the outbound links of a page from its text.
///
/// Tokens before `Section-1` are skipped; every token after it up to `#end`
/// is a link name. Anything past `#end` is not part of the link section.
pub fn parse_page(name: &str, text: &str) -> Result<PageRecord> {
    let mut tokens = text.split_whitespace();

    if !tokens.by_ref().any(|token| token == LINKS_START) {
        return Err(CorpusError::MissingMarker {
            page: name.to_string(),
            marker: LINKS_START,
        });
    }

    let mut outlinks = Vec::new();
    for token in tokens {
        if token == LINKS_END {
            return Ok(PageRecord::with_outlinks(name.to_string(), outlinks));
        }
        outlinks.push(token.to_string());
    }

    Err(CorpusError::MissingMarker {
        page: name.to_string(),
        marker: LINKS_END,
    })
}

/// Load every page named in `<dir>/collection.txt` from `<dir>/<name>.txt`.
pub fn load_collection(dir: &Path) -> Result<Vec<PageRecord>> {
    let collection_path = dir.join(COLLECTION_FILE);
    info!("Loading collection from {}", collection_path.display());

    let names = read_collection_names(&collection_path)?;
    let mut records = Vec::with_capacity(names.len());

    for name in names {
        let page_path = dir.join(format!("{}.{}", name, PAGE_EXTENSION));
        let text = read_file(&page_path)?;
        let record = parse_page(&name, &text)?;
        debug!("Page {} links to {} page(s)", name, record.outlinks.len());
        records.push(record);
    }

    info!("Loaded {} page(s)", records.len());
    Ok(records)
}
