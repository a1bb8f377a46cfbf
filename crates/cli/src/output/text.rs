use super::{write_error_line, RenderOptions, Renderer};
use dnslink_domain::path::render_search;
use dnslink_domain::{LogStatement, ResolveError, Resolution};
use std::io::{self, Write};

/// `/namespace/identifier [path]...` lines, one per link.
pub struct TextRenderer<O, E> {
    options: RenderOptions,
    out: O,
    err: E,
}

impl<O: Write, E: Write> TextRenderer<O, E> {
    pub fn new(options: RenderOptions, out: O, err: E) -> Self {
        Self { options, out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_log(&mut self, log: &[LogStatement]) -> io::Result<()> {
        for statement in log {
            writeln!(self.err, "{}", log_line(statement))?;
        }
        Ok(())
    }
}

/// `[CODE] domain=... pathname=... search=... entry=... reason=...`
pub(crate) fn log_line(statement: &LogStatement) -> String {
    let mut line = format!("[{}]", statement.code());
    if let Some(domain) = statement.domain() {
        line.push_str(&format!(" domain={}", domain));
    }
    if let Some(path) = statement.path() {
        if !path.pathname.is_empty() {
            line.push_str(&format!(" pathname={}", path.pathname));
        }
        if !path.search.is_empty() {
            line.push_str(&format!(" search=?{}", render_search(&path.search)));
        }
    }
    if let Some(entry) = statement.entry() {
        line.push_str(&format!(" entry={}", entry));
    }
    if let Some(reason) = statement.reason() {
        line.push_str(&format!(" reason={}", reason));
    }
    line
}

impl<O: Write, E: Write> Renderer for TextRenderer<O, E> {
    fn write(&mut self, lookup: &str, resolution: &Resolution) -> io::Result<()> {
        let prefix = if self.options.multiple {
            format!("{}: ", lookup)
        } else {
            String::new()
        };
        let suffix: String = resolution
            .path
            .iter()
            .map(|part| format!(" [{}]", part))
            .collect();

        for (namespace, entries) in &resolution.links {
            if !self.options.wants(namespace) {
                continue;
            }
            for entry in entries {
                if self.options.key.is_some() {
                    writeln!(self.out, "{}{}{}", prefix, entry.identifier, suffix)?;
                } else {
                    writeln!(
                        self.out,
                        "{}/{}/{}{}",
                        prefix, namespace, entry.identifier, suffix
                    )?;
                }
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

#[cfg(test)]
mod tests {
    use super::*;
    use dnslink_domain::{NamespaceEntry, PathEntry, Reason, Search};

    fn resolution() -> Resolution {
        let mut links = dnslink_domain::Links::new();
        links.insert(
            "ipfs".to_string(),
            vec![NamespaceEntry::new("QmA", 60), NamespaceEntry::new("QmB", 60)],
        );
        links.insert("ipns".to_string(), vec![NamespaceEntry::new("k51", 60)]);
        Resolution {
            links,
            path: vec![PathEntry::new("/docs", Search::new())],
            log: vec![
                LogStatement::Resolve {
                    domain: "_dnslink.a.com".to_string(),
                    path: PathEntry::new("/docs", Search::new()),
                },
                LogStatement::InvalidEntry {
                    entry: "dnslink=".to_string(),
                    reason: Reason::WrongStart,
                },
            ],
        }
    }

    fn render(options: RenderOptions, lookups: &[&str]) -> (String, String) {
        let mut renderer = TextRenderer::new(options, Vec::new(), Vec::new());
        for lookup in lookups {
            renderer.write(lookup, &resolution()).unwrap();
        }
        let (out, err) = renderer.into_inner();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_text_lines() {
        let (out, err) = render(RenderOptions::default(), &["a.com"]);
        assert_eq!(
            out,
            "/ipfs/QmA [/docs]\n/ipfs/QmB [/docs]\n/ipns/k51 [/docs]\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_text_key_filter() {
        let options = RenderOptions {
            key: Some("ipns".to_string()),
            ..RenderOptions::default()
        };
        let (out, _) = render(options, &["a.com"]);
        assert_eq!(out, "k51 [/docs]\n");
    }

    #[test]
    fn test_text_multiple_lookups_prefix() {
        let options = RenderOptions {
            multiple: true,
            key: Some("ipns".to_string()),
            ..RenderOptions::default()
        };
        let (out, _) = render(options, &["a.com", "b.com"]);
        assert_eq!(out, "a.com: k51 [/docs]\nb.com: k51 [/docs]\n");
    }

    #[test]
    fn test_text_debug_log() {
        let options = RenderOptions {
            debug: true,
            ..RenderOptions::default()
        };
        let (_, err) = render(options, &["a.com"]);
        assert_eq!(
            err,
            "[RESOLVE] domain=_dnslink.a.com pathname=/docs\n[INVALID_ENTRY] entry=dnslink= reason=WRONG_START\n"
        );
    }
}
