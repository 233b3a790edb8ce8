//! Wire types for the scoreboard REST interface.

use serde::{Deserialize, Serialize};

/// One submitted or listed score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// Response body of `GET /scores`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreList {
    pub scores: Vec<ScoreEntry>,
}

/// Parse a `GET /scores` body leniently.
///
/// Anything that does not match the documented shape is "no data", never an
/// error the caller has to handle.
pub fn parse_scores(body: &str) -> Option<Vec<ScoreEntry>> {
    serde_json::from_str::<ScoreList>(body)
        .ok()
        .map(|list| list.scores)
}

/// Sort descending by score and keep the best `limit` entries.
pub fn top_entries(mut entries: Vec<ScoreEntry>, limit: usize) -> Vec<ScoreEntry> {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(limit);
    entries
}
