//! Reporter runtime integration.
//!
//! Bridges the sync game loop with the async HTTP client. The loop submits
//! scores and polls for leaderboard updates through channels; a background
//! tokio runtime does the talking.

use reqwest::Client;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::ReporterConfig;
use crate::types::TOP_SCORES;
use crate::wire::{parse_scores, top_entries, ScoreEntry};

/// Request delivered to the background worker.
#[derive(Debug, Clone)]
enum Command {
    /// Submit a final score, then refresh the leaderboard on success
    Submit { score: u32 },
    /// Refresh the leaderboard without submitting
    Refresh,
}

/// Running reporter instance.
///
/// Dropping it drops the runtime; an in-flight request is abandoned, never
/// awaited (fire-and-forget all the way down).
pub struct Reporter {
    _rt: Runtime,
    cmd_tx: mpsc::UnboundedSender<Command>,
    scores_rx: mpsc::UnboundedReceiver<Vec<ScoreEntry>>,
}

impl Reporter {
    /// Start the reporter from environment variables.
    ///
    /// Returns None if `SNAKE_SCORES_DISABLED` is set or the runtime cannot
    /// be created (reporting is optional; the game runs without it).
    pub fn start_from_env() -> Option<Self> {
        if ReporterConfig::is_disabled() {
            return None;
        }
        Self::start(ReporterConfig::from_env())
    }

    /// Start the reporter against an explicit configuration.
    pub fn start(config: ReporterConfig) -> Option<Self> {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<Command>();
        let (scores_tx, scores_rx) = mpsc::unbounded_channel::<Vec<ScoreEntry>>();

        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(err) => {
                debug!(error = %err, "could not create reporter runtime");
                return None;
            }
        };
        info!(base_url = %config.base_url, "score reporter started");
        rt.spawn(run_worker(config, cmd_rx, scores_tx));

        Some(Self {
            _rt: rt,
            cmd_tx,
            scores_rx,
        })
    }

    /// Hand a final score to the background worker. Never blocks.
    pub fn submit(&self, score: u32) {
        let _ = self.cmd_tx.send(Command::Submit { score });
    }

    /// Ask for a leaderboard refresh. Never blocks.
    pub fn refresh(&self) {
        let _ = self.cmd_tx.send(Command::Refresh);
    }

    /// Latest leaderboard delivery, if any arrived since the last poll.
    ///
    /// Drains the channel so a burst of updates collapses into the newest.
    pub fn try_recv_scores(&mut self) -> Option<Vec<ScoreEntry>> {
        let mut latest = None;
        while let Ok(scores) = self.scores_rx.try_recv() {
            latest = Some(scores);
        }
        latest
    }
}

async fn run_worker(
    config: ReporterConfig,
    mut cmd_rx: mpsc::UnboundedReceiver<Command>,
    scores_tx: mpsc::UnboundedSender<Vec<ScoreEntry>>,
) {
    let client = Client::new();

    // Initial leaderboard fetch; a dead endpoint just means no list yet.
    if let Some(scores) = fetch_scores(&client, &config).await {
        let _ = scores_tx.send(scores);
    }

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            Command::Submit { score } => {
                if submit_score(&client, &config, score).await {
                    if let Some(scores) = fetch_scores(&client, &config).await {
                        let _ = scores_tx.send(scores);
                    }
                }
            }
            Command::Refresh => {
                if let Some(scores) = fetch_scores(&client, &config).await {
                    let _ = scores_tx.send(scores);
                }
            }
        }
    }
}

/// POST the score. Returns whether the server answered with success.
async fn submit_score(client: &Client, config: &ReporterConfig, score: u32) -> bool {
    let entry = ScoreEntry {
        name: config.player.clone(),
        score,
    };

    match client.post(config.scores_url()).json(&entry).send().await {
        Ok(resp) if resp.status().is_success() => {
            debug!(score, "score submitted");
            true
        }
        Ok(resp) => {
            debug!(status = %resp.status(), "score submission rejected");
            false
        }
        Err(err) => {
            debug!(error = %err, "score submission failed");
            false
        }
    }
}

/// GET the leaderboard. Any failure or shape mismatch is `None`.
async fn fetch_scores(client: &Client, config: &ReporterConfig) -> Option<Vec<ScoreEntry>> {
    let resp = match client.get(config.scores_url()).send().await {
        Ok(resp) => resp,
        Err(err) => {
            debug!(error = %err, "leaderboard fetch failed");
            return None;
        }
    };
    if !resp.status().is_success() {
        debug!(status = %resp.status(), "leaderboard fetch rejected");
        return None;
    }

    let body = resp.text().await.ok()?;
    parse_scores(&body).map(|entries| top_entries(entries, TOP_SCORES))
}
