// WHY: Output formats for a finished concordance
// Renderers only read the concordance; ordering comes from the map itself

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

use crate::concordance::Concordance;

/// Writes a concordance to any byte sink
pub trait Renderer {
    fn render(&self, concordance: &Concordance, out: &mut dyn Write) -> io::Result<()>;
}

/// Selectable output format for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `word: { count : s1, s2 }` per line
    #[default]
    Text,
    /// Array of `{word, count, sentences}` objects
    Json,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer { pretty: true }),
        }
    }
}

/// Console format: `word: { 3 : 1, 1, 2 }`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, concordance: &Concordance, out: &mut dyn Write) -> io::Result<()> {
        for (word, entry) in concordance {
            write!(out, "{}: {{ {} : ", word, entry.count())?;
            let mut sentences = entry.sentences().iter().peekable();
            while let Some(sentence) = sentences.next() {
                if sentences.peek().is_some() {
                    write!(out, "{sentence}, ")?;
                } else {
                    write!(out, "{sentence}")?;
                }
            }
            writeln!(out, " }}")?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    word: &'a str,
    count: usize,
    sentences: &'a [usize],
}

/// JSON array in ascending word order
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, concordance: &Concordance, out: &mut dyn Write) -> io::Result<()> {
        let entries: Vec<JsonEntry<'_>> = concordance
            .iter()
            .map(|(word, entry)| JsonEntry {
                word,
                count: entry.count(),
                sentences: entry.sentences(),
            })
            .collect();

        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
        } else {
            serde_json::to_writer(&mut *out, &entries)?;
        }
        writeln!(out)
    }
}

/// Render into an owned string
pub fn render_to_string(renderer: &dyn Renderer, concordance: &Concordance) -> io::Result<String> {
    let mut buffer = Vec::new();
    renderer.render(concordance, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
