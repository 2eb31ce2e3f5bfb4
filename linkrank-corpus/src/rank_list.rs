use crate::collection::read_file;
use crate::error::Result;
use crate::result::RankListEntry;
use std::path::Path;
use tracing::{debug, warn};

/// Default name of a rank listing written by `linkrank rank`.
pub const RANK_LIST_FILE: &str = "pageRankList.txt";

/// Parse `<url> <outDegree> <weight>` lines.
///
/// Reading stops at the first line that is not a well-formed triple; the
/// entries before it are returned. Blank lines are skipped.
pub fn parse_rank_list(content: &str) -> Vec<RankListEntry> {
    let mut entries = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_rank_line(line) {
            Some(entry) => entries.push(entry),
            None => {
                warn!("Stopping rank list at malformed line {}: {:?}", line_no + 1, line);
                break;
            }
        }
    }

    entries
}

fn parse_rank_line(line: &str) -> Option<RankListEntry> {
    let mut fields = line.split_whitespace();
    let url = fields.next()?;
    let out_degree = fields.next()?.parse().ok()?;
    let weight = fields.next()?.parse().ok()?;

    Some(RankListEntry {
        url: url.to_string(),
        out_degree,
        weight,
    })
}

/// Read a rank listing file from disk.
pub fn read_rank_list(path: &Path) -> Result<Vec<RankListEntry>> {
    let content = read_file(path)?;
    let entries = parse_rank_list(&content);
    debug!("Read {} ranked page(s) from {}", entries.len(), path.display());
    Ok(entries)
}

/// Read a plain ordering of urls (whitespace separated, best first), as used
/// by rank aggregation inputs.
pub fn read_url_ranking(path: &Path) -> Result<Vec<String>> {
    let content = read_file(path)?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}
