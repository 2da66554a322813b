use bon::Builder;
use tracing::debug;

use crate::cache::DecompositionTable;
use crate::error::Result;
use crate::render::{Frame, PolarRenderer};
use crate::time::ClockTime;

/// Renders consecutive seconds as a sequence of frames.
#[derive(Debug, Clone, Copy, Builder)]
pub struct Animator {
    #[builder(default = 10)]
    pub frames: usize,
    #[builder(default = 1000)]
    pub frame_delay_ms: u32,
}

impl Default for Animator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Animator {
    /// Times shown by each frame, starting at `start` and one second apart.
    pub fn frame_times(&self, start: ClockTime) -> Vec<ClockTime> {
        std::iter::successors(Some(start), |time| Some(time.advance()))
            .take(self.frames)
            .collect()
    }

    /// Renders every frame in generation order.
    ///
    /// Each frame's time is looked up before the clock advances, so an
    /// unfactorable start fails on the first frame.
    pub fn animate(
        &self,
        start: ClockTime,
        table: &DecompositionTable,
        renderer: &PolarRenderer,
    ) -> Result<Vec<Frame>> {
        let mut frames = Vec::with_capacity(self.frames);
        let mut time = start;
        for index in 0..self.frames {
            let label = time.to_string();
            debug!(frame = index, time = %label, "rendering frame");
            frames.push(renderer.render(
                table.lookup(time.hours)?,
                table.lookup(time.minutes)?,
                table.lookup(time.seconds)?,
                &label,
            )?);
            time = time.advance();
        }
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::error::PrimeClockError;

    #[test]
    fn default_is_ten_frames_a_second_apart() {
        let animator = Animator::default();
        assert_eq!(animator.frames, 10);
        assert_eq!(animator.frame_delay_ms, 1000);
    }

    #[test]
    fn frame_times_wrap_past_the_maximum() {
        let animator = Animator::builder().frames(3).build();
        assert_eq!(
            animator.frame_times(ClockTime::new(24, 60, 59)),
            vec![
                ClockTime::new(24, 60, 59),
                ClockTime::new(24, 60, 60),
                ClockTime::new(1, 1, 1),
            ]
        );
    }

    #[test]
    fn frames_follow_generation_order() {
        let table = DecompositionTable::compute().unwrap();
        let renderer = PolarRenderer::without_text(
            ChartConfig::builder().width(160).height(180).margin(10).build(),
        );
        let animator = Animator::builder().frames(4).build();

        let frames = animator
            .animate(ClockTime::new(13, 5, 58), &table, &renderer)
            .unwrap();
        let labels: Vec<&str> = frames.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["13:05:58", "13:05:59", "13:05:60", "13:06:01"]);
    }

    #[test]
    fn second_at_i32_max_fails_with_out_of_range() {
        let table = DecompositionTable::compute().unwrap();
        let renderer = PolarRenderer::without_text(ChartConfig::default());
        let result =
            Animator::default().animate(ClockTime::new(1, 1, i32::MAX), &table, &renderer);
        assert!(matches!(
            result,
            Err(PrimeClockError::OutOfRange { value }) if value == i64::from(i32::MAX)
        ));
    }

    #[test]
    fn unfactorable_hour_fails_the_run() {
        let table = DecompositionTable::compute().unwrap();
        let renderer = PolarRenderer::without_text(ChartConfig::default());
        let result = Animator::default().animate(ClockTime::new(-2, 1, 1), &table, &renderer);
        assert!(matches!(result, Err(PrimeClockError::OutOfRange { value: -2 })));
    }
}
