pub mod concordance;
pub mod prompt;
pub mod reader;
pub mod render;
pub mod stats;

// Re-export main types for convenient access
pub use concordance::{
    build, build_from_reader, build_from_str,
    AbbreviationSet, Concordance, ConcordanceBuilder, ConcordanceEntry
};

pub use reader::{concordance_from_file, DocumentReader, ReadStats, ReaderConfig};
pub use render::{JsonRenderer, OutputFormat, Renderer, TextRenderer};
pub use stats::RunStats;
