use crate::classify::is_ident_char;
use crate::error::{PathSyntaxError, PathSyntaxErrorKind};
use std::fmt;

/// One step of a [`Path`]: an object property name, an array index, or the
/// wildcard `*`. The wildcard is only meaningful to matching callers; it
/// never addresses real data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Name(String),
    Index(usize),
    Wildcard,
}

impl Segment {
    pub fn name(name: impl Into<String>) -> Self {
        Segment::Name(name.into())
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl From<&str> for Segment {
    fn from(name: &str) -> Self {
        Segment::Name(name.to_string())
    }
}

impl From<String> for Segment {
    fn from(name: String) -> Self {
        Segment::Name(name)
    }
}

/// An ordered sequence of segments addressing a location inside a JSON
/// value. Immutable once produced; left = outer, right = inner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The empty path, addressing the document root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;
    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify_path(self))
    }
}

/// Parse a dotted/bracketed path expression like `.items[3].name` or
/// `["with space"][*]` into a [`Path`].
///
/// Fails with [`PathSyntaxError`] at the first malformed construct; no
/// partial recovery is attempted.
pub fn parse_path(expression: &str) -> Result<Path, PathSyntaxError> {
    let chars: Vec<char> = expression.chars().collect();
    let mut segments = Vec::new();
    let mut i = 0usize;

    while i < chars.len() {
        match chars[i] {
            '.' => {
                i += 1;
                let start = i;
                while i < chars.len() && is_ident_char(chars[i]) {
                    i += 1;
                }
                if i == start {
                    return Err(PathSyntaxError::new(
                        PathSyntaxErrorKind::PropertyNameExpected,
                        start,
                    ));
                }
                segments.push(Segment::Name(chars[start..i].iter().collect()));
            }
            '[' => {
                i += 1;
                if let Some(&quote) = chars.get(i)
                    && (quote == '\'' || quote == '"')
                {
                    i += 1;
                    let start = i;
                    while i < chars.len() && chars[i] != quote {
                        i += 1;
                    }
                    if i >= chars.len() {
                        return Err(PathSyntaxError::new(
                            PathSyntaxErrorKind::UnexpectedEnd(quote),
                            i,
                        ));
                    }
                    segments.push(Segment::Name(chars[start..i].iter().collect()));
                    i += 1;
                    match chars.get(i) {
                        Some(']') => i += 1,
                        Some(&c) => {
                            return Err(PathSyntaxError::new(
                                PathSyntaxErrorKind::UnexpectedChar(c),
                                i,
                            ));
                        }
                        None => {
                            return Err(PathSyntaxError::new(
                                PathSyntaxErrorKind::UnexpectedEnd(']'),
                                i,
                            ));
                        }
                    }
                } else {
                    let start = i;
                    while i < chars.len() && chars[i] != ']' {
                        i += 1;
                    }
                    if i >= chars.len() {
                        return Err(PathSyntaxError::new(
                            PathSyntaxErrorKind::UnexpectedEnd(']'),
                            i,
                        ));
                    }
                    let raw: String = chars[start..i].iter().collect();
                    i += 1;
                    let trimmed = raw.trim();
                    if trimmed == "*" {
                        segments.push(Segment::Wildcard);
                    } else if !trimmed.is_empty()
                        && trimmed.bytes().all(|b| b.is_ascii_digit())
                        && let Ok(index) = trimmed.parse::<usize>()
                    {
                        segments.push(Segment::Index(index));
                    } else {
                        return Err(PathSyntaxError::new(
                            PathSyntaxErrorKind::InvalidIndex(trimmed.to_string()),
                            start,
                        ));
                    }
                }
            }
            c => {
                return Err(PathSyntaxError::new(
                    PathSyntaxErrorKind::UnexpectedChar(c),
                    i,
                ));
            }
        }
    }

    Ok(Path::from_segments(segments))
}

/// Render a [`Path`] back into dotted/bracketed expression form.
///
/// Name segments outside `[A-Za-z0-9_$]+` render bracket-quoted with no
/// escaping of embedded quotes, so such segments do not round-trip through
/// [`parse_path`]. Known-lossy, kept for output stability.
pub fn stringify_path(path: &Path) -> String {
    let mut out = String::new();
    for segment in path {
        match segment {
            Segment::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
            Segment::Wildcard => out.push_str("[*]"),
            Segment::Name(name) => {
                if !name.is_empty() && name.chars().all(is_ident_char) {
                    out.push('.');
                    out.push_str(name);
                } else {
                    out.push_str("[\"");
                    out.push_str(name);
                    out.push_str("\"]");
                }
            }
        }
    }
    out
}

/// Compile a [`Path`] into an RFC 6901 JSON Pointer. The empty path compiles
/// to the empty string, the pointer to the document root.
pub fn compile_pointer(path: &Path) -> String {
    let mut out = String::new();
    for segment in path {
        out.push('/');
        match segment {
            Segment::Index(index) => out.push_str(&index.to_string()),
            Segment::Wildcard => out.push('*'),
            Segment::Name(name) => push_escaped_token(&mut out, name),
        }
    }
    out
}

/// Append one pointer reference token with RFC 6901 escaping:
/// `~` becomes `~0`, `/` becomes `~1`.
pub(crate) fn push_escaped_token(out: &mut String, token: &str) {
    for c in token.chars() {
        match c {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            _ => out.push(c),
        }
    }
}
