//! Run summaries and terminal output.

use std::collections::BTreeMap;
use std::time::Duration;

use colored::Colorize;
use tabled::{Table, Tabled};

/// Outcome counts and latencies for one load run.
#[derive(Debug, Default)]
pub struct RunSummary {
    statuses: BTreeMap<u16, usize>,
    network_errors: usize,
    latencies: Vec<Duration>,
}

#[derive(Debug, Tabled)]
struct OutcomeRow {
    #[tabled(rename = "Outcome")]
    outcome: String,

    #[tabled(rename = "Count")]
    count: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an iteration that got an HTTP response.
    pub fn record_status(&mut self, status: u16, latency: Duration) {
        *self.statuses.entry(status).or_insert(0) += 1;
        self.latencies.push(latency);
    }

    /// Record an iteration that failed at the network level.
    pub fn record_network_error(&mut self, latency: Duration) {
        self.network_errors += 1;
        self.latencies.push(latency);
    }

    /// Total iterations recorded.
    pub fn iterations(&self) -> usize {
        self.latencies.len()
    }

    /// True when every recorded iteration failed to reach the target.
    pub fn target_unreachable(&self) -> bool {
        self.network_errors > 0 && self.network_errors == self.iterations()
    }

    fn min_latency(&self) -> Duration {
        self.latencies.iter().min().copied().unwrap_or_default()
    }

    fn max_latency(&self) -> Duration {
        self.latencies.iter().max().copied().unwrap_or_default()
    }

    fn mean_latency(&self) -> Duration {
        if self.latencies.is_empty() {
            return Duration::ZERO;
        }
        self.latencies.iter().sum::<Duration>() / self.latencies.len() as u32
    }

    /// Print the summary table and latency line.
    pub fn print(&self) {
        let mut rows: Vec<OutcomeRow> = self
            .statuses
            .iter()
            .map(|(status, count)| OutcomeRow {
                outcome: format!("HTTP {status}"),
                count: *count,
            })
            .collect();

        if self.network_errors > 0 {
            rows.push(OutcomeRow {
                outcome: "network error".to_string(),
                count: self.network_errors,
            });
        }

        if rows.is_empty() {
            println!("{}", "No iterations recorded.".dimmed());
            return;
        }

        println!("{}", Table::new(rows));
        println!(
            "{} {} iterations, latency min/mean/max = {:.1?}/{:.1?}/{:.1?}",
            "Done:".green().bold(),
            self.iterations(),
            self.min_latency(),
            self.mean_latency(),
            self.max_latency(),
        );
    }
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}
