//! Terminal Snake runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! A single poll-with-deadline loop drives rendering, input and ticks; the
//! score reporter runs on its own runtime and is only ever polled.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::input::{is_theme_toggle, map_key, should_quit};
use tui_snake::report::{Reporter, ReporterConfig, ScoreEntry};
use tui_snake::term::{GameView, ScoreRow, TerminalRenderer, Theme, Viewport};
use tui_snake::types::{Phase, StepOutcome, TICK_MS, TOP_SCORES};

fn main() -> Result<()> {
    init_tracing();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Route logs to stderr only when `SNAKE_LOG` asks for them; the alternate
/// screen stays clean otherwise.
fn init_tracing() {
    if let Ok(filter) = std::env::var("SNAKE_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(clock_seed());
    let view = GameView::default();
    let mut theme = Theme::dark();

    let config = ReporterConfig::from_env();
    let player = config.player.clone();
    let mut reporter = if ReporterConfig::is_disabled() {
        None
    } else {
        Reporter::start(config)
    };

    // Remote list once seen; session-local bests otherwise.
    let mut remote_scores: Option<Vec<ScoreRow>> = None;
    let mut session_scores: Vec<ScoreRow> = Vec::new();

    let mut snap = GameSnapshot::default();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        if let Some(rep) = reporter.as_mut() {
            if let Some(scores) = rep.try_recv_scores() {
                remote_scores = Some(scores.into_iter().map(score_row).collect());
            }
        }

        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let scores = remote_scores.as_deref().or_else(|| {
            if session_scores.is_empty() {
                None
            } else {
                Some(session_scores.as_slice())
            }
        });
        let fb = view.render(&snap, scores, &theme, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_theme_toggle(key) {
                        theme = theme.toggle();
                        continue;
                    }
                    if let Some(action) = map_key(key) {
                        let was_running = game.phase() == Phase::Running;
                        game.apply_action(action);
                        // Entering Running (or rearming via restart) starts a
                        // fresh tick window.
                        if !was_running {
                            last_tick = Instant::now();
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if game.tick() == StepOutcome::Died {
                let score = game.score();
                if score > 0 {
                    if let Some(rep) = &reporter {
                        rep.submit(score);
                    }
                    record_session_score(&mut session_scores, &player, score);
                }
            }
        }
    }
}

fn score_row(entry: ScoreEntry) -> ScoreRow {
    ScoreRow {
        name: entry.name,
        score: entry.score,
    }
}

/// Keep the session-local fallback list sorted and bounded.
fn record_session_score(scores: &mut Vec<ScoreRow>, player: &str, score: u32) {
    scores.push(ScoreRow {
        name: player.to_string(),
        score,
    });
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores.truncate(TOP_SCORES);
}
