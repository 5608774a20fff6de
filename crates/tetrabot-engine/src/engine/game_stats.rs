use serde::Serialize;

/// Points awarded per lock, indexed by the number of lines cleared, before the
/// level multiplier is applied.
const SCORE_TABLE: [usize; 5] = [0, 100, 300, 500, 800];

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: usize = 10;

/// Score, level and line counters of a [`Match`](super::Match).
///
/// - **Score**: `SCORE_TABLE[lines] × level` per lock, using the level before the lock
/// - **Level**: `1 + total_cleared_lines / 10`
/// - **Completed pieces**: number of locks so far
/// - **Line clear distribution**: locks grouped by the number of lines they cleared
///
/// All counters only grow until the owning match is reset.
///
/// # Example
///
/// ```
/// use tetrabot_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_drop(4);
///
/// assert_eq!(stats.score(), 800);
/// assert_eq!(stats.level(), 1);
/// assert_eq!(stats.total_cleared_lines(), 4);
/// assert_eq!(stats.line_cleared_counter()[4], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStats {
    score: usize,
    level: usize,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of locks by lines cleared (`[0]` = locks that cleared nothing).
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Records one lock that cleared `cleared_lines` lines.
    pub fn complete_piece_drop(&mut self, cleared_lines: usize) {
        self.completed_pieces += 1;
        if let Some(counter) = self.line_cleared_counter.get_mut(cleared_lines) {
            *counter += 1;
        }
        if cleared_lines == 0 {
            return;
        }
        self.total_cleared_lines += cleared_lines;
        let points = SCORE_TABLE.get(cleared_lines).copied().unwrap_or(0);
        self.score += points * self.level;
        self.level = 1 + self.total_cleared_lines / LINES_PER_LEVEL;
    }
}
