//! Keeps track of time elapsed for a process that may have multiple parts

use crate::util::moving_average::MovingAverage;
use std::time::Instant;

/// Times a process with named segments and remembers an average total over
/// recent runs.
pub struct Stopwatch {
    started: Option<Instant>,
    last_mark: Option<Instant>,
    segment_times: Vec<(&'static str, f32)>,
    last_total: Option<f32>,
    total_average: MovingAverage,
}

impl Stopwatch {
    /// Creates a stopwatch averaging totals over `num_samples` runs.
    pub fn new(num_samples: usize) -> Self {
        Self {
            started: None,
            last_mark: None,
            segment_times: Vec::new(),
            last_total: None,
            total_average: MovingAverage::new(num_samples),
        }
    }

    /// Marks the beginning of a run, discarding the previous run's segments.
    pub fn start(&mut self) {
        let now = Instant::now();
        self.started = Some(now);
        self.last_mark = Some(now);
        self.segment_times.clear();
    }

    /// Records the time since the previous mark (or start) under `name`.
    pub fn mark_segment(&mut self, name: &'static str) {
        let now = Instant::now();
        if let Some(last) = self.last_mark {
            self.segment_times
                .push((name, now.duration_since(last).as_secs_f32()));
        }
        self.last_mark = Some(now);
    }

    /// Ends the run, returning the total elapsed seconds and feeding the
    /// rolling average. Returns zero if the stopwatch was never started.
    pub fn stop(&mut self) -> f32 {
        let total = self
            .started
            .take()
            .map_or(0.0, |started| started.elapsed().as_secs_f32());
        self.last_mark = None;
        self.last_total = Some(total);
        self.total_average.add_sample(total);
        total
    }

    /// Total seconds of the most recently completed run, if any.
    pub fn last_total(&self) -> Option<f32> {
        self.last_total
    }

    /// Segment times of the most recent run.
    pub fn segment_times(&self) -> &[(&'static str, f32)] {
        &self.segment_times
    }

    /// Average total seconds over recent runs.
    pub fn average_total(&self) -> f32 {
        self.total_average.average()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_segments_and_total() {
        let mut stopwatch = Stopwatch::new(5);
        assert_eq!(stopwatch.last_total(), None);

        stopwatch.start();
        stopwatch.mark_segment("build");
        stopwatch.mark_segment("collect");
        let total = stopwatch.stop();

        assert!(total >= 0.0);
        assert_eq!(stopwatch.last_total(), Some(total));
        let names: Vec<&str> = stopwatch.segment_times().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["build", "collect"]);
    }

    #[test]
    fn restarting_discards_old_segments() {
        let mut stopwatch = Stopwatch::new(5);
        stopwatch.start();
        stopwatch.mark_segment("build");
        stopwatch.stop();

        stopwatch.start();
        assert!(stopwatch.segment_times().is_empty());
    }

    #[test]
    fn stop_without_start_is_zero() {
        let mut stopwatch = Stopwatch::new(5);
        assert_eq!(stopwatch.stop(), 0.0);
    }
}
