// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{
    algorithm::Algorithm,
    monitor::sort_monitor::{Direction, SortMonitor},
    stats::SortStatistics,
};
use disks_model::{index::DiskIndex, row::DiskRow};

/// A monitor that reports the progress of a sort through `tracing`.
///
/// The start and end of a run are logged at `INFO`, every pass at `DEBUG`.
/// Individual swaps are logged at `TRACE` when `log_swaps` is enabled; they
/// render the whole row and are off by default.
#[derive(Debug, Clone, Default)]
pub struct LogMonitor {
    log_swaps: bool,
    algorithm: Option<Algorithm>,
    pass: u64,
}

impl LogMonitor {
    pub fn new(log_swaps: bool) -> Self {
        Self {
            log_swaps,
            algorithm: None,
            pass: 0,
        }
    }

    /// Returns `true` if individual swaps are logged.
    #[inline]
    pub fn logs_swaps(&self) -> bool {
        self.log_swaps
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(log_swaps: {})", self.log_swaps)
    }
}

impl SortMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_sort(&mut self, algorithm: Algorithm, before: &DiskRow) {
        self.algorithm = Some(algorithm);
        self.pass = 0;
        tracing::info!(
            algorithm = %algorithm,
            disks = before.total_count(),
            misplaced = before.misplaced_count(),
            "sort started"
        );
    }

    fn on_pass_start(&mut self, direction: Direction, pass: u64) {
        self.pass = pass;
        tracing::debug!(%direction, pass, "pass started");
    }

    fn on_swap(&mut self, row: &DiskRow, left_index: DiskIndex) {
        if self.log_swaps {
            tracing::trace!(pass = self.pass, index = left_index.get(), row = %row, "swap");
        }
    }

    fn on_pass_end(&mut self, direction: Direction, swaps: u64) {
        tracing::debug!(%direction, pass = self.pass, swaps, "pass finished");
    }

    fn on_exit_sort(&mut self, statistics: &SortStatistics) {
        let algorithm = self
            .algorithm
            .map(|a| a.name())
            .unwrap_or("unknown");
        tracing::info!(
            algorithm,
            passes = statistics.passes,
            comparisons = statistics.comparisons,
            swaps = statistics.swaps,
            elapsed_secs = statistics.sort_duration.as_secs_f64(),
            "sort finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::LogMonitor;
    use crate::{algorithm::Algorithm, monitor::sort_monitor::SortMonitor};
    use disks_model::row::DiskRow;

    fn with_subscriber<F: FnOnce()>(f: F) {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, f);
    }

    #[test]
    fn test_name_and_display() {
        let monitor = LogMonitor::new(true);
        assert_eq!(monitor.name(), "LogMonitor");
        assert!(monitor.logs_swaps());
        assert_eq!(monitor.to_string(), "LogMonitor(log_swaps: true)");
        assert!(!LogMonitor::default().logs_swaps());
    }

    #[test]
    fn test_logging_a_full_run_does_not_panic() {
        with_subscriber(|| {
            for algorithm in Algorithm::ALL {
                let mut monitor = LogMonitor::new(true);
                let outcome = algorithm.sort_monitored(&DiskRow::new(4), &mut monitor);
                assert_eq!(outcome.sorted.swap_count(), 6);
            }
        });
    }

    #[test]
    fn test_remembers_algorithm() {
        let mut monitor = LogMonitor::new(false);
        monitor.on_enter_sort(Algorithm::Lawnmower, &DiskRow::new(1));
        assert_eq!(monitor.algorithm, Some(Algorithm::Lawnmower));
    }
}
