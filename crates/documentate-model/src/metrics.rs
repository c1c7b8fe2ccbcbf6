use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Metrics collected during extraction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractorMetrics {
    /// Total files attempted
    pub files_attempted: usize,

    /// Files successfully extracted
    pub files_succeeded: usize,

    /// Files that failed extraction
    pub files_failed: usize,

    /// Total time spent extracting, in milliseconds
    #[serde(with = "duration_millis")]
    pub total_extract_time: Duration,

    /// Classes extracted
    pub total_classes: usize,

    /// Methods extracted
    pub total_functions: usize,
}

// Helper module for serializing Duration
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis: u64 = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

impl ExtractorMetrics {
    /// Record one successful extraction
    pub fn record_success(&mut self, duration: Duration, classes: usize, functions: usize) {
        self.files_attempted += 1;
        self.files_succeeded += 1;
        self.total_extract_time += duration;
        self.total_classes += classes;
        self.total_functions += functions;
    }

    /// Record one failed extraction
    pub fn record_failure(&mut self, duration: Duration) {
        self.files_attempted += 1;
        self.files_failed += 1;
        self.total_extract_time += duration;
    }

    /// Success rate (0.0 to 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.files_attempted == 0 {
            0.0
        } else {
            self.files_succeeded as f64 / self.files_attempted as f64
        }
    }

    /// Average extraction time per attempted file
    pub fn avg_extract_time(&self) -> Duration {
        if self.files_attempted == 0 {
            Duration::ZERO
        } else {
            self.total_extract_time.div_f64(self.files_attempted as f64)
        }
    }
}
