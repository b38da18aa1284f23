// WHY: Per-run summary written as JSON for later inspection
// Mirrors the shape of the per-file stats the reader produces

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::concordance::Concordance;
use crate::reader::ReadStats;

/// Processing statistics for one concordance run
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunStats {
    /// Input document path
    pub path: String,
    /// Lines read from the document
    pub lines_read: u64,
    /// Bytes read from the document
    pub bytes_read: u64,
    /// Raw whitespace-delimited tokens seen
    pub tokens_read: u64,
    /// Distinct normalized words in the concordance
    pub distinct_words: usize,
    /// Sum of all word counts
    pub total_occurrences: usize,
    /// Sentences closed by a terminating period
    pub sentences: usize,
    /// Read and build time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput in tokens per second
    pub tokens_per_sec: f64,
}

impl RunStats {
    pub fn from_read(read: &ReadStats, concordance: &Concordance) -> Self {
        let tokens_per_sec = if read.duration_ms > 0 {
            read.tokens_read as f64 / (read.duration_ms as f64 / 1000.0)
        } else {
            0.0
        };

        Self {
            path: read.file_path.clone(),
            lines_read: read.lines_read,
            bytes_read: read.bytes_read,
            tokens_read: read.tokens_read,
            distinct_words: concordance.len(),
            total_occurrences: concordance.total_occurrences(),
            sentences: concordance.sentence_count(),
            processing_time_ms: read.duration_ms,
            tokens_per_sec,
        }
    }

    /// Write stats as pretty JSON, creating parent directories as needed
    pub async fn write_json(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write stats file {}", path.display()))
    }
}
