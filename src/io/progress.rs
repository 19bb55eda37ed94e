//! Terminal progress for placement runs

use crate::algorithm::driver::{Commit, PlacementOutcome, RoundObserver};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::tiles::tile::{Token, format_tokens};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PLACED_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Placed [{{bar:{PROGRESS_BAR_WIDTH}.green/white}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static ROUND_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>9}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Two-bar display: reserve tiles placed so far and batches tried this round
pub struct ProgressManager {
    multi_progress: MultiProgress,
    placed_bar: ProgressBar,
    round_bar: ProgressBar,
}

impl ProgressManager {
    /// Create bars drawn to stderr for a reserve of `reserve_size` tiles
    pub fn new(reserve_size: usize) -> Self {
        Self::with_target(reserve_size, ProgressDrawTarget::stderr())
    }

    /// Create bars that are tracked but never drawn
    pub fn hidden(reserve_size: usize) -> Self {
        Self::with_target(reserve_size, ProgressDrawTarget::hidden())
    }

    fn with_target(reserve_size: usize, target: ProgressDrawTarget) -> Self {
        let multi_progress = MultiProgress::with_draw_target(target);

        let placed_bar = multi_progress.add(ProgressBar::new(reserve_size as u64));
        placed_bar.set_style(PLACED_STYLE.clone());

        let round_bar = multi_progress.add(ProgressBar::new(0));
        round_bar.set_style(ROUND_STYLE.clone());

        Self {
            multi_progress,
            placed_bar,
            round_bar,
        }
    }

    /// Reserve tiles placed so far
    pub fn placed(&self) -> u64 {
        self.placed_bar.position()
    }

    /// Batches tried in the current round
    pub fn tried(&self) -> u64 {
        self.round_bar.position()
    }
}

impl RoundObserver for ProgressManager {
    fn on_round_start(&mut self, round: usize, candidates: usize) {
        self.round_bar.set_length(candidates as u64);
        self.round_bar.set_position(0);
        self.round_bar.set_prefix(format!("round {round}"));
        self.round_bar.set_message(String::new());
    }

    fn on_candidate(&mut self, batch: &[Token]) {
        self.round_bar.inc(1);
        self.round_bar.set_message(format_tokens(batch));
    }

    fn on_commit(&mut self, commit: &Commit) {
        self.placed_bar.inc(commit.batch.len() as u64);
        self.placed_bar
            .set_message(format!("last: {}", format_tokens(&commit.batch)));
    }

    fn on_finish(&mut self, outcome: &PlacementOutcome) {
        self.round_bar.finish_and_clear();
        self.placed_bar
            .abandon_with_message(outcome.termination.to_string());
        let _ = self.multi_progress.clear();
    }
}
