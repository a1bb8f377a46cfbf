use super::{render_paths, write_error_line, RenderOptions, Renderer};
use dnslink_domain::path::render_search;
use dnslink_domain::{LogStatement, ResolveError, Resolution};
use std::io::{self, Write};

/// `lookup,key,value,path` rows with every field quoted.
pub struct CsvRenderer<O, E> {
    options: RenderOptions,
    out: O,
    err: E,
    first_out: bool,
    first_err: bool,
}

/// Quotes every field, doubling embedded quotes (RFC 4180).
pub(crate) fn csv_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

impl<O: Write, E: Write> CsvRenderer<O, E> {
    pub fn new(options: RenderOptions, out: O, err: E) -> Self {
        Self {
            options,
            out,
            err,
            first_out: true,
            first_err: true,
        }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_log(&mut self, log: &[LogStatement]) -> io::Result<()> {
        for statement in log {
            if self.first_err {
                self.first_err = false;
                writeln!(self.err, "domain,pathname,search,code,entry,reason")?;
            }

            let (pathname, search) = match statement.path() {
                Some(path) if !path.search.is_empty() => {
                    (path.pathname.as_str(), format!("?{}", render_search(&path.search)))
                }
                Some(path) => (path.pathname.as_str(), String::new()),
                None => ("", String::new()),
            };
            let reason = statement.reason().map(|r| r.as_str()).unwrap_or_default();

            writeln!(
                self.err,
                "{}",
                csv_row(&[
                    statement.domain().unwrap_or_default(),
                    pathname,
                    &search,
                    statement.code(),
                    statement.entry().unwrap_or_default(),
                    reason,
                ])
            )?;
        }
        Ok(())
    }
}

impl<O: Write, E: Write> Renderer for CsvRenderer<O, E> {
    fn write(&mut self, lookup: &str, resolution: &Resolution) -> io::Result<()> {
        if self.first_out {
            self.first_out = false;
            writeln!(self.out, "lookup,key,value,path")?;
        }

        let path = render_paths(&resolution.path);
        for (namespace, entries) in &resolution.links {
            if !self.options.wants(namespace) {
                continue;
            }
            for entry in entries {
                writeln!(
                    self.out,
                    "{}",
                    csv_row(&[lookup, namespace, &entry.identifier, &path])
                )?;
            }
        }

        if self.options.debug {
            self.write_log(&resolution.log)?;
        }
        Ok(())
    }

    fn write_error(&mut self, lookup: &str, error: &ResolveError) -> io::Result<()> {
        if self.options.debug {
            if let Some(partial) = error.partial() {
                self.write_log(&partial.log)?;
            }
        }
        write_error_line(&mut self.err, self.options.multiple, lookup, error)
    }
}
