//! Statistics and performance tracking for conversion operations

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Performance statistics for conversion operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Input CSV size in bytes
    pub input_size_bytes: u64,
    /// Output JSON size in bytes
    pub output_size_bytes: u64,
    /// Number of records produced
    pub record_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Number of files processed
    pub file_count: usize,
    /// Throughput (bytes processed per second)
    pub throughput_bytes_per_sec: f32,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ConversionStatistics {
    fn default() -> Self {
        Self {
            input_size_bytes: 0,
            output_size_bytes: 0,
            record_count: 0,
            processing_time_ms: 0,
            file_count: 0,
            throughput_bytes_per_sec: 0.0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ConversionStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create statistics for a single conversion
    pub fn for_conversion(
        input_size: u64,
        output_size: u64,
        record_count: usize,
        processing_time: Duration,
    ) -> Self {
        let throughput_bytes_per_sec = if processing_time.as_secs_f64() > 0.0 {
            input_size as f64 / processing_time.as_secs_f64()
        } else {
            0.0
        } as f32;

        Self {
            input_size_bytes: input_size,
            output_size_bytes: output_size,
            record_count,
            processing_time_ms: processing_time.as_millis() as u64,
            file_count: 1,
            throughput_bytes_per_sec,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Combine statistics from multiple operations
    pub fn combine(&mut self, other: &Self) {
        self.input_size_bytes += other.input_size_bytes;
        self.output_size_bytes += other.output_size_bytes;
        self.record_count += other.record_count;
        self.file_count += other.file_count;
        self.processing_time_ms += other.processing_time_ms;

        self.throughput_bytes_per_sec = if self.processing_time_ms > 0 {
            self.input_size_bytes as f32 / (self.processing_time_ms as f32 / 1000.0)
        } else {
            0.0
        };

        self.collected_at = chrono::Utc::now();
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        format!(
            "Converted {} records from {} files in {:.1}s - {} bytes in, {} bytes out",
            self.record_count,
            self.file_count,
            self.processing_time_ms as f32 / 1000.0,
            self.input_size_bytes,
            self.output_size_bytes
        )
    }
}

/// Measures wall time around a conversion
pub struct PerformanceTracker {
    start_time: Instant,
}

impl PerformanceTracker {
    /// Start tracking a new conversion operation
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Complete tracking and return statistics
    pub fn finish(self, input_size: u64, output_size: u64, record_count: usize) -> ConversionStatistics {
        ConversionStatistics::for_conversion(
            input_size,
            output_size,
            record_count,
            self.start_time.elapsed(),
        )
    }
}
