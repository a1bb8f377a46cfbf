//! Renderers for resolution results. Results go to `out`, the audit log
//! (with `--debug`) and errors go to `err`.

mod csv;
mod json;
mod reduced;
mod text;

use clap::ValueEnum;
use dnslink_domain::{PathEntry, ResolveError, Resolution};
use std::io::{self, Write};

pub use self::csv::CsvRenderer;
pub use self::json::JsonRenderer;
pub use self::reduced::ReducedRenderer;
pub use self::text::TextRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Txt,
    Json,
    Csv,
    Reduced,
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// More than one lookup is rendered, so each line names its lookup.
    pub multiple: bool,
    pub debug: bool,
    /// Only print identifiers of this namespace.
    pub key: Option<String>,
}

impl RenderOptions {
    fn wants(&self, namespace: &str) -> bool {
        match self.key.as_deref() {
            Some(key) => key == namespace,
            None => true,
        }
    }
}

pub trait Renderer {
    fn begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn write(&mut self, lookup: &str, resolution: &Resolution) -> io::Result<()>;

    fn write_error(&mut self, lookup: &str, error: &ResolveError) -> io::Result<()>;

    fn end(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn create_renderer(format: Format, options: RenderOptions) -> Box<dyn Renderer> {
    let (out, err) = (io::stdout(), io::stderr());
    match format {
        Format::Txt => Box::new(TextRenderer::new(options, out, err)),
        Format::Json => Box::new(JsonRenderer::new(options, out, err)),
        Format::Csv => Box::new(CsvRenderer::new(options, out, err)),
        Format::Reduced => Box::new(ReducedRenderer::new(options, out, err)),
    }
}

/// Joins path entries for display, last hop first.
pub(crate) fn render_paths(path: &[PathEntry]) -> String {
    path.iter()
        .map(PathEntry::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Plain `lookup: error` line shared by the line-oriented renderers.
pub(crate) fn write_error_line<W: Write>(
    err: &mut W,
    multiple: bool,
    lookup: &str,
    error: &ResolveError,
) -> io::Result<()> {
    if multiple {
        writeln!(err, "{}: {}", lookup, error)
    } else {
        writeln!(err, "{}", error)
    }
}
