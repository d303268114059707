use crate::path::{compile_pointer, parse_path};
use crate::sourcemap::{Location, SourceMapProvider, StrictMapProvider};

/// A path expression resolved to its 1-based line/column in a JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocatedPath {
    pub path: String,
    pub line: usize,
    pub column: usize,
}

/// Resolve each path expression to a line/column location in `text`, using
/// the built-in strict source-map provider.
///
/// Per-expression failures are silent omissions: an unparseable expression
/// or a pointer absent from the map contributes no entry. If `text` is not
/// strict JSON no map exists, and the whole call returns an empty vector.
pub fn locate<S: AsRef<str>>(text: &str, expressions: &[S]) -> Vec<LocatedPath> {
    locate_with(&StrictMapProvider, text, expressions)
}

/// [`locate`] with a caller-supplied source-map provider.
pub fn locate_with<P, S>(provider: &P, text: &str, expressions: &[S]) -> Vec<LocatedPath>
where
    P: SourceMapProvider,
    S: AsRef<str>,
{
    let Ok(map) = provider.build_map(text) else {
        return Vec::new();
    };
    let mut results = Vec::new();
    for expression in expressions {
        let expression = expression.as_ref();
        let Ok(path) = parse_path(expression) else {
            continue;
        };
        let pointer = compile_pointer(&path);
        let Some(entry) = map.get(&pointer) else {
            continue;
        };
        // prefer the key location; the zero location marks an entry with
        // neither key nor value recorded
        let loc = entry
            .key
            .or(entry.value)
            .unwrap_or(Location { line: 0, column: 0 });
        results.push(LocatedPath {
            path: expression.to_string(),
            line: loc.line,
            column: loc.column,
        });
    }
    results
}
