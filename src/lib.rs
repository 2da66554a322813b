// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod animate;
pub mod basis;
pub mod cache;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod table;
pub mod time;

use std::path::Path;

use tracing::info;

pub use animate::Animator;
pub use basis::{factorize, Decomposition, PRIME_BASIS};
pub use cache::DecompositionTable;
pub use config::{CacheConfig, ChartConfig, Color};
pub use error::{PrimeClockError, Result};
pub use output::OutputFormat;
pub use render::{Frame, PolarRenderer};
pub use table::PrimeTimeTable;
pub use time::{Clock, ClockTime, FixedClock, SystemClock};

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// What [`PrimeClock::write`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Written {
    Still,
    Animation { frames: usize },
}

/// Decomposition table, renderer and animator wired together.
pub struct PrimeClock {
    table: DecompositionTable,
    renderer: PolarRenderer,
    animator: Animator,
}

impl PrimeClock {
    pub fn new(table: DecompositionTable, renderer: PolarRenderer, animator: Animator) -> Self {
        Self {
            table,
            renderer,
            animator,
        }
    }

    /// Opens (or rebuilds) the table described by `cache` and loads the chart font.
    pub fn open(cache: &CacheConfig, chart: ChartConfig, animator: Animator) -> Result<Self> {
        let table = DecompositionTable::open(cache)?;
        let renderer = PolarRenderer::new(chart)?;
        Ok(Self::new(table, renderer, animator))
    }

    /// Hours, minutes and seconds decompositions for `time`.
    pub fn fingerprint(&self, time: ClockTime) -> Result<PrimeTimeTable> {
        Ok(PrimeTimeTable::new(
            *self.table.lookup(time.hours)?,
            *self.table.lookup(time.minutes)?,
            *self.table.lookup(time.seconds)?,
        ))
    }

    /// The table to print before writing `path`: still output only.
    pub fn table_for_output(&self, time: ClockTime, path: &Path) -> Result<Option<PrimeTimeTable>> {
        if OutputFormat::from_path(path)?.is_animated() {
            return Ok(None);
        }
        self.fingerprint(time).map(Some)
    }

    pub fn render(&self, time: ClockTime) -> Result<Frame> {
        let fingerprint = self.fingerprint(time)?;
        let [hours, minutes, seconds] = &fingerprint.rows;
        self.renderer
            .render(hours, minutes, seconds, &time.to_string())
    }

    /// Renders `time` to `path`, animating when the extension asks for it.
    pub fn write(&self, time: ClockTime, path: &Path) -> Result<Written> {
        match OutputFormat::from_path(path)? {
            OutputFormat::Still(format) => {
                let frame = self.render(time)?;
                output::save_still(&frame, path, format)?;
                Ok(Written::Still)
            }
            OutputFormat::Animated => {
                let frames = self.animator.animate(time, &self.table, &self.renderer)?;
                output::save_animation(&frames, path, self.animator.frame_delay_ms)?;
                info!(start = %time, frames = frames.len(), "animated prime clock");
                Ok(Written::Animation {
                    frames: frames.len(),
                })
            }
        }
    }
}
