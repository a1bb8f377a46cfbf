//! Path entries collected while walking redirects, and their reduction into
//! one path/query the way a browser composes relative redirects.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use url::form_urlencoded;

use crate::url_parts::UrlParts;

/// Query parameters, keyed by name, values kept in the order they were seen.
pub type Search = BTreeMap<String, Vec<String>>;

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Normalizes one segment: decodes existing escapes, then re-escapes.
pub fn escape_segment(segment: &str) -> String {
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    utf8_percent_encode(&decoded, SEGMENT).to_string()
}

/// Renders a query set sorted by key, `""` when empty.
pub fn render_search(search: &Search) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in search {
        for value in values {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}

/// Appends every value of `other` after the values already present.
pub fn merge_search(into: &mut Search, other: &Search) {
    for (key, values) in other {
        into.entry(key.clone())
            .or_default()
            .extend(values.iter().cloned());
    }
}

/// One hop's contribution to the resolved path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pathname: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub search: Search,
}

impl PathEntry {
    pub fn new(pathname: impl Into<String>, search: Search) -> Self {
        Self {
            pathname: pathname.into(),
            search,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pathname.is_empty() && self.search.is_empty()
    }
}

impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pathname)?;
        if !self.search.is_empty() {
            write!(f, "?{}", render_search(&self.search))?;
        }
        Ok(())
    }
}

/// Composes `path` (first hop first) against `input`.
///
/// A pathname starting with `//` is absolute and discards the segments
/// collected so far; any other pathname is appended. Query values from every
/// entry accumulate. `.` and `..` segments are resolved after all entries
/// have been applied, and a `#fragment` in `input` is dropped.
pub fn reduce(path: &[PathEntry], input: &str) -> PathEntry {
    let base = UrlParts::parse(input);

    let joined = format!("{}{}", base.domain, base.pathname);
    let mut segments: Vec<String> = if joined.is_empty() {
        Vec::new()
    } else {
        joined.split('/').map(str::to_string).collect()
    };
    let mut search = base.search;

    for entry in path {
        if let Some(absolute) = entry.pathname.strip_prefix("//") {
            segments = absolute.split('/').map(str::to_string).collect();
        } else if !entry.pathname.is_empty() {
            let relative = entry
                .pathname
                .strip_prefix('/')
                .unwrap_or(&entry.pathname);
            segments.extend(relative.split('/').map(str::to_string));
        }
        merge_search(&mut search, &entry.search);
    }

    let mut reduced: Vec<String> = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment.as_str() {
            "." => {}
            ".." => {
                reduced.pop();
            }
            _ => reduced.push(escape_segment(&segment)),
        }
    }

    PathEntry {
        pathname: reduced.join("/"),
        search,
    }
}
