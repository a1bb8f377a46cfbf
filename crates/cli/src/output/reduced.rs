use super::text::log_line;
use super::{write_error_line, RenderOptions, Renderer};
use dnslink_domain::{reduce, ResolveError, Resolution};
use std::io::{self, Write};

/// Each identifier with the resolved path applied: `/namespace/identifier/path?query`.
pub struct ReducedRenderer<O, E> {
    options: RenderOptions,
    out: O,
    err: E,
}

impl<O: Write, E: Write> ReducedRenderer<O, E> {
    pub fn new(options: RenderOptions, out: O, err: E) -> Self {
        Self { options, out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Renderer for ReducedRenderer<O, E> {
    fn write(&mut self, lookup: &str, resolution: &Resolution) -> io::Result<()> {
        let prefix = if self.options.multiple {
            format!("{}: ", lookup)
        } else {
            String::new()
        };
        let path = resolution.hop_order_path();

        for (namespace, entries) in &resolution.links {
            if !self.options.wants(namespace) {
                continue;
            }
            for entry in entries {
                let reduced = reduce(&path, &entry.identifier);
                if self.options.key.is_some() {
                    writeln!(self.out, "{}{}", prefix, reduced)?;
                } else {
                    writeln!(self.out, "{}/{}/{}", prefix, namespace, reduced)?;
                }
            }
        }

        if self.options.debug {
            for statement in &resolution.log {
                writeln!(self.err, "{}", log_line(statement))?;
            }
        }
        Ok(())
    }

    fn write_error(&mut self, lookup: &str, error: &ResolveError) -> io::Result<()> {
        if self.options.debug {
            if let Some(partial) = error.partial() {
                for statement in &partial.log {
                    writeln!(self.err, "{}", log_line(statement))?;
                }
            }
        }
        write_error_line(&mut self.err, self.options.multiple, lookup, error)
    }
}
