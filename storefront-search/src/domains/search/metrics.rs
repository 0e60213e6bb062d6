use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Maximum number of lookup samples to keep in history
const MAX_HISTORY_SIZE: usize = 100;

/// Where a lookup's results came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupSource {
    /// Server search endpoint answered
    Server,
    /// Server search failed; full product list filtered locally
    Fallback,
    /// Both server search and the fallback fetch failed
    Unavailable,
    /// Blank query, nothing dispatched
    Skipped,
}

impl LookupSource {
    /// Whether results from this source are worth caching
    pub fn is_cacheable(&self) -> bool {
        matches!(self, LookupSource::Server | LookupSource::Fallback)
    }
}

impl fmt::Display for LookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LookupSource::Server => "server",
            LookupSource::Fallback => "fallback",
            LookupSource::Unavailable => "unavailable",
            LookupSource::Skipped => "skipped",
        };
        f.write_str(name)
    }
}

/// Metrics for a single lookup
#[derive(Debug, Clone)]
pub struct LookupMetrics {
    pub source: LookupSource,
    pub query_length: usize,
    pub execution_time: Duration,
    pub result_count: usize,
    pub timestamp: Instant,
}

/// Rolling lookup history
#[derive(Debug, Clone)]
pub struct LookupHistory {
    samples: VecDeque<LookupMetrics>,
}

impl Default for LookupHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_HISTORY_SIZE),
        }
    }

    pub fn add_metric(&mut self, metric: LookupMetrics) {
        if metric.source == LookupSource::Skipped {
            return;
        }
        if self.samples.len() >= MAX_HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back(metric);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Average execution time for lookups answered by `source`
    pub fn average_execution_time(
        &self,
        source: LookupSource,
    ) -> Option<Duration> {
        let times: Vec<Duration> = self
            .samples
            .iter()
            .filter(|m| m.source == source)
            .map(|m| m.execution_time)
            .collect();

        if times.is_empty() {
            return None;
        }

        let total: Duration = times.iter().sum();
        Some(total / times.len() as u32)
    }

    /// Share of recorded lookups that could not use server search (0.0 - 1.0)
    pub fn fallback_rate(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }

        let degraded = self
            .samples
            .iter()
            .filter(|m| m.source != LookupSource::Server)
            .count();
        degraded as f32 / self.samples.len() as f32
    }
}
