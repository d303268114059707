use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathSyntaxErrorKind {
    #[error("property name expected")]
    PropertyNameExpected,
    #[error("unexpected end, character {0:?} expected")]
    UnexpectedEnd(char),
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("invalid array index {0:?}")]
    InvalidIndex(String),
}

/// Syntax error in a path expression. `index` is the char offset of the
/// offending construct within the expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid path: {kind} at index {index}")]
pub struct PathSyntaxError {
    pub kind: PathSyntaxErrorKind,
    pub index: usize,
}

impl PathSyntaxError {
    pub fn new(kind: PathSyntaxErrorKind, index: usize) -> Self {
        Self { kind, index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("object key expected")]
    ObjectKeyExpected,
    #[error("colon expected")]
    ColonExpected,
    #[error("invalid number")]
    InvalidNumber,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("control character in string")]
    ControlCharacter,
    #[error("trailing characters after value")]
    TrailingCharacters,
}

/// Strict-scan failure from the built-in source-map provider. `position` is
/// a byte offset into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {position}")]
pub struct MapError {
    pub kind: MapErrorKind,
    pub position: usize,
}

impl MapError {
    pub fn new(kind: MapErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Decode failure surfaced by the strict JSON decoder collaborator,
/// never generated by the repair pass itself.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DecodeError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

#[cfg(feature = "serde")]
impl DecodeError {
    pub(crate) fn from_serde(err: &serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
