pub const DEFAULT_WIDTH: usize = 8;
pub const DEFAULT_HEIGHT: usize = 8;

/// Upper bound on back rows stocked with pieces per side.
pub const MAX_SAFE_ROWS: usize = 3;

/// Board dimensions, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl BoardConfig {
    /// Build a config, substituting the default for missing or zero dimensions.
    pub fn new(width: Option<usize>, height: Option<usize>) -> Self {
        Self {
            width: width.filter(|w| *w > 0).unwrap_or(DEFAULT_WIDTH),
            height: height.filter(|h| *h > 0).unwrap_or(DEFAULT_HEIGHT),
        }
    }

    /// Parse dimensions from text. Anything that is not a positive integer
    /// falls back to the default.
    pub fn parse(width: &str, height: &str) -> Self {
        Self::new(width.trim().parse().ok(), height.trim().parse().ok())
    }

    /// Number of back rows per side populated at setup:
    /// `min(floor((height - 2) / 2), 3)`, never negative.
    pub fn safe_rows(&self) -> usize {
        (self.height.saturating_sub(2) / 2).min(MAX_SAFE_ROWS)
    }

    pub fn tile_count(&self) -> usize {
        self.width * self.height
    }
}
