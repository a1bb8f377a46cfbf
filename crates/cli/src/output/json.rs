use super::{RenderOptions, Renderer};
use dnslink_domain::{LogStatement, ResolveError, Resolution};
use serde_json::{json, Value};
use std::io::{self, Write};

/// One JSON object per lookup, wrapped in an array when there are several.
/// With `debug` the log is a JSON array on `err`.
pub struct JsonRenderer<O, E> {
    options: RenderOptions,
    out: O,
    err: E,
    first_out: bool,
    first_err: bool,
}

impl<O: Write, E: Write> JsonRenderer<O, E> {
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

    fn with_lookup(&self, mut value: Value, lookup: &str) -> Value {
        if self.options.multiple {
            if let Value::Object(map) = &mut value {
                map.insert("lookup".to_string(), Value::String(lookup.to_string()));
            }
        }
        value
    }

    fn emit_err(&mut self, value: &Value) -> io::Result<()> {
        let line = serde_json::to_string(value)?;
        if self.options.debug && !self.first_err {
            writeln!(self.err, ",{}", line)
        } else {
            self.first_err = false;
            writeln!(self.err, "{}", line)
        }
    }

    fn write_log(&mut self, lookup: &str, log: &[LogStatement]) -> io::Result<()> {
        for statement in log {
            let value = self.with_lookup(serde_json::to_value(statement)?, lookup);
            self.emit_err(&value)?;
        }
        Ok(())
    }
}

impl<O: Write, E: Write> Renderer for JsonRenderer<O, E> {
    fn begin(&mut self) -> io::Result<()> {
        if self.options.multiple {
            writeln!(self.out, "[")?;
        }
        if self.options.debug {
            writeln!(self.err, "[")?;
        }
        Ok(())
    }

    fn write(&mut self, lookup: &str, resolution: &Resolution) -> io::Result<()> {
        let value = self.with_lookup(
            json!({
                "links": resolution.links,
                "path": resolution.path,
            }),
            lookup,
        );
        let line = serde_json::to_string(&value)?;
        if self.first_out {
            self.first_out = false;
            writeln!(self.out, "{}", line)?;
        } else {
            writeln!(self.out, ",{}", line)?;
        }

        if self.options.debug {
            self.write_log(lookup, &resolution.log)?;
        }
        Ok(())
    }

    fn write_error(&mut self, lookup: &str, error: &ResolveError) -> io::Result<()> {
        if self.options.debug {
            if let Some(partial) = error.partial() {
                self.write_log(lookup, &partial.log)?;
            }
        }
        let value = json!({
            "lookup": lookup,
            "error": error.to_string(),
        });
        self.emit_err(&value)
    }

    fn end(&mut self) -> io::Result<()> {
        if self.options.multiple {
            writeln!(self.out, "]")?;
        }
        if self.options.debug {
            writeln!(self.err, "]")?;
        }
        Ok(())
    }
}
