mod classify;
pub mod error;
mod locate;
pub mod options;
pub mod path;
mod repair;
pub mod sourcemap;

#[cfg(feature = "serde")]
pub use error::DecodeError;
pub use error::{MapError, MapErrorKind, PathSyntaxError, PathSyntaxErrorKind};
pub use locate::{LocatedPath, locate, locate_with};
pub use options::Options;
pub use path::{Path, Segment, compile_pointer, parse_path, stringify_path};
pub use repair::RepairLogEntry;
pub use sourcemap::{
    Location, PointerEntry, SourceMap, SourceMapProvider, StrictMapProvider, build_map,
};

/// Repair a potentially invalid JSON-like string into valid JSON text.
/// Handles JSONP wrappers, comments, smart quotes, unquoted keys, vendor
/// constructor calls, and trailing commas.
///
/// This function never fails: constructs it cannot safely repair are passed
/// through, so the strict decode stage reports one well-located error
/// instead of two inconsistent ones.
pub fn repair_to_string(input: &str, opts: &Options) -> String {
    repair::repair_to_string(input, opts)
}

/// Repair a potentially invalid JSON-like string and return both the result
/// and a log of the repairs performed.
pub fn repair_to_string_with_log(input: &str, opts: &Options) -> (String, Vec<RepairLogEntry>) {
    repair::repair_to_string_with_log(input, opts)
}

use std::io::Write;

/// Repair a potentially invalid JSON-like string and write the result into
/// an `io::Write` sink.
pub fn repair_to_writer<W: Write>(
    input: &str,
    opts: &Options,
    writer: &mut W,
) -> std::io::Result<()> {
    let s = repair::repair_to_string(input, opts);
    writer.write_all(s.as_bytes())
}

#[cfg(feature = "serde")]
/// Repair and then strictly decode into `serde_json::Value`.
pub fn repair_to_value(input: &str, opts: &Options) -> Result<serde_json::Value, DecodeError> {
    let s = repair::repair_to_string(input, opts);
    serde_json::from_str(&s).map_err(|e| DecodeError::from_serde(&e))
}

#[cfg(test)]
mod tests;
