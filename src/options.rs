#[derive(Clone, Debug)]
pub struct Options {
    /// Strip a whole-input function-call wrapper (JSONP style), including an
    /// optional leading block comment and trailing semicolon.
    pub strip_call_wrappers: bool,
    /// Unwrap vendor extended-type constructor calls like `ObjectId("...")`
    /// or `NumberLong(2)` into their argument.
    pub unwrap_vendor_types: bool,
    /// Enable repair logging. Use `repair_to_string_with_log` to retrieve
    /// the entries.
    pub logging: bool,
    /// Context window size used when building log context snippets.
    /// Controls how many characters are captured on both sides of the
    /// position.
    pub log_context_window: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strip_call_wrappers: true,
            unwrap_vendor_types: true,
            logging: false,
            log_context_window: 10,
        }
    }
}
