use anyhow::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::concordance::{AbbreviationSet, Concordance, ConcordanceBuilder};

/// Configuration for document reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Statistics for one document read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    /// Exact bytes consumed, line terminators included
    pub bytes_read: u64,
    pub tokens_read: u64,
    pub duration_ms: u64,
}

/// Async document reader that streams a file line-by-line into a concordance builder
pub struct DocumentReader {
    config: ReaderConfig,
}

impl DocumentReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a document and build its concordance in one pass
    pub async fn read_concordance<P: AsRef<Path>>(
        &self,
        file_path: P,
        abbreviations: &AbbreviationSet,
    ) -> Result<(Concordance, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of document: {}", path.display());

        // A zero-capacity BufReader reports end of file on the first fill
        if self.config.buffer_size == 0 {
            anyhow::bail!("Read buffer size must be at least 1 byte, got 0");
        }

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open file {}: {}", path.display(), e);
                warn!("{}", error_msg);
                return Err(anyhow::anyhow!(error_msg));
            }
        };

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut builder = ConcordanceBuilder::with_abbreviations(abbreviations);
        let mut line = String::new();
        let mut line_count = 0u64;
        let mut byte_count = 0u64;

        loop {
            line.clear();
            match reader.read_line(&mut line).await {
                Ok(0) => break,
                Ok(bytes) => {
                    byte_count += bytes as u64;
                    line_count += 1;
                    builder.push_line(&line);
                }
                Err(e) => {
                    let error_msg = format!(
                        "UTF-8 decoding error in {} at line {}: {}",
                        path.display(),
                        line_count + 1,
                        e
                    );
                    warn!("{}", error_msg);
                    return Err(anyhow::anyhow!(error_msg));
                }
            }
        }

        let tokens_read = builder.tokens_seen();
        let concordance = builder.finish();
        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: line_count,
            bytes_read: byte_count,
            tokens_read,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Read {}: {} lines, {} tokens, {} distinct words in {}ms",
            path.display(),
            line_count,
            tokens_read,
            concordance.len(),
            stats.duration_ms
        );

        Ok((concordance, stats))
    }
}

/// Convenience function for reading a single document with default configuration
pub async fn concordance_from_file<P: AsRef<Path>>(file_path: P) -> Result<Concordance> {
    let reader = DocumentReader::new(ReaderConfig::default());
    let (concordance, _stats) = reader
        .read_concordance(file_path, AbbreviationSet::standard())
        .await?;
    Ok(concordance)
}
