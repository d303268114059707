use crate::classify::{
    closing_quote_for, control_escape, is_ident_char, is_ident_start, is_opening_quote,
    is_special_whitespace, is_whitespace,
};
use crate::options::Options;
use memchr::memchr;

/// One repair performed during a pass, with a snippet of the surrounding
/// input for display. `position` is a char index into the scanned text
/// (after wrapper stripping).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RepairLogEntry {
    pub position: usize,
    pub message: &'static str,
    pub context: String,
}

#[derive(Default)]
struct Logger {
    enable: bool,
    window: usize,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    #[inline]
    fn log(&mut self, chars: &[char], position: usize, message: &'static str) {
        if self.enable {
            self.entries.push(RepairLogEntry {
                position,
                message,
                context: build_context(chars, position, self.window),
            });
        }
    }
}

#[inline]
fn build_context(chars: &[char], pos: usize, win_usize: usize) -> String {
    let win: isize = win_usize as isize;
    let len = chars.len() as isize;
    let p = pos as isize;
    let start = (p - win).max(0) as usize;
    let end = (p + win).min(len) as usize;
    chars[start..end].iter().collect::<String>()
}

#[inline]
fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{FEFF}').unwrap_or(s)
}

/// Whole-input JSONP check: optional whitespace, optional block comment,
/// an identifier run, `(`, a greedy body extending to the last `)` whose
/// tail is only whitespace and at most one `;`. Returns the body.
fn strip_call_wrapper(s: &str) -> Option<&str> {
    let mut head = s.trim_start();
    if let Some(rest) = head.strip_prefix("/*") {
        let end = rest.find("*/")?;
        head = rest[end + 2..].trim_start();
    }
    let ident_len = head.chars().take_while(|&c| is_ident_char(c)).count();
    if ident_len == 0 {
        return None;
    }
    // identifier chars are ASCII, so char count equals byte length
    head = head[ident_len..].trim_start();
    let body = head.strip_prefix('(')?;
    let mut tail = body.trim_end();
    if let Some(t) = tail.strip_suffix(';') {
        tail = t.trim_end();
    }
    tail.strip_suffix(')')
}

pub(crate) fn repair_to_string(input: &str, opts: &Options) -> String {
    let logger = Logger {
        enable: opts.logging,
        window: opts.log_context_window,
        entries: Vec::new(),
    };
    run(input, opts, logger).0
}

pub(crate) fn repair_to_string_with_log(
    input: &str,
    opts: &Options,
) -> (String, Vec<RepairLogEntry>) {
    // Execute with a live logger regardless of `opts.logging`.
    let logger = Logger {
        enable: true,
        window: opts.log_context_window,
        entries: Vec::new(),
    };
    run(input, opts, logger)
}

fn run(input: &str, opts: &Options, logger: Logger) -> (String, Vec<RepairLogEntry>) {
    let mut text = strip_bom(input);
    let mut stripped_wrapper = false;
    if opts.strip_call_wrappers
        && let Some(body) = strip_call_wrapper(text)
    {
        text = body;
        stripped_wrapper = true;
    }

    let mut s = Sanitizer::new(text, opts, logger);
    if stripped_wrapper {
        s.logger.log(&s.chars, 0, "stripped function call wrapper");
    }
    s.run();
    (s.out, s.logger.entries)
}

/// Single left-to-right pass over the input. The cursor only advances;
/// context decisions look back into the already-emitted output, never ahead
/// beyond bounded whitespace peeks.
struct Sanitizer<'a> {
    src: &'a str,
    chars: Vec<char>,
    // byte offset of each char in `src`; lets the char cursor use memchr
    offs: Vec<usize>,
    ascii: bool,
    i: usize,
    out: String,
    opts: &'a Options,
    logger: Logger,
}

impl<'a> Sanitizer<'a> {
    fn new(src: &'a str, opts: &'a Options, logger: Logger) -> Self {
        let chars: Vec<char> = src.chars().collect();
        let mut offs: Vec<usize> = Vec::with_capacity(chars.len());
        for (bi, _c) in src.char_indices() {
            offs.push(bi);
        }
        Self {
            src,
            chars,
            offs,
            ascii: src.is_ascii(),
            i: 0,
            out: String::with_capacity(src.len() + 8),
            opts,
            logger,
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars.get(self.i).copied()
    }

    #[inline]
    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.i + ahead).copied()
    }

    #[inline]
    fn prev(&self) -> Option<char> {
        self.i.checked_sub(1).and_then(|p| self.chars.get(p)).copied()
    }

    #[inline]
    fn byte_offset(&self, char_index: usize) -> usize {
        self.offs
            .get(char_index)
            .copied()
            .unwrap_or(self.src.len())
    }

    #[inline]
    fn byte_to_char(&self, target: usize) -> usize {
        if self.ascii {
            return target.min(self.chars.len());
        }
        match self.offs.binary_search(&target) {
            Ok(idx) | Err(idx) => idx.min(self.chars.len()),
        }
    }

    /// Last non-whitespace character already emitted to the output.
    fn last_emitted_non_ws(&self) -> Option<char> {
        self.out.chars().rev().find(|&c| !is_whitespace(c))
    }

    /// First non-whitespace character of the remaining input after the
    /// current one.
    fn next_non_ws(&self) -> Option<char> {
        self.chars[self.i + 1..]
            .iter()
            .copied()
            .find(|&c| !is_whitespace(c))
    }

    fn run(&mut self) {
        while let Some(c) = self.peek() {
            if c == '/' && self.peek_at(1) == Some('*') {
                self.logger.log(&self.chars, self.i, "removed block comment");
                self.skip_block_comment();
            } else if c == '/' && self.peek_at(1) == Some('/') {
                self.logger.log(&self.chars, self.i, "removed line comment");
                self.skip_line_comment();
            } else if is_special_whitespace(c) {
                self.logger
                    .log(&self.chars, self.i, "normalized unicode whitespace");
                self.out.push(' ');
                self.i += 1;
            } else if is_opening_quote(c) {
                if c != '"' {
                    self.logger
                        .log(&self.chars, self.i, "normalized quote delimiters");
                }
                let close = closing_quote_for(c).unwrap_or(c);
                let string = self.parse_string(close);
                self.out.push_str(&string);
            } else if is_ident_start(c) && matches!(self.last_emitted_non_ws(), Some('{' | ',')) {
                self.quote_key();
            } else if is_ident_start(c) {
                self.value_symbol();
            } else if c == ',' && matches!(self.next_non_ws(), Some(']' | '}')) {
                self.logger.log(&self.chars, self.i, "removed trailing comma");
                self.i += 1;
            } else {
                self.out.push(c);
                self.i += 1;
            }
        }
    }

    /// Skip past `*/`; an unclosed block comment consumes to end of input.
    fn skip_block_comment(&mut self) {
        let start_b = self.byte_offset(self.i + 2);
        let bytes = self.src.as_bytes();
        let mut off = start_b;
        while let Some(p) = memchr(b'*', &bytes[off..]) {
            let idx = off + p;
            if bytes.get(idx + 1) == Some(&b'/') {
                self.i = self.byte_to_char(idx + 2);
                return;
            }
            off = idx + 1;
        }
        self.i = self.chars.len();
    }

    /// Stop before the terminating newline so it passes through untouched.
    fn skip_line_comment(&mut self) {
        let start_b = self.byte_offset(self.i + 2);
        let bytes = self.src.as_bytes();
        match memchr(b'\n', &bytes[start_b..]) {
            Some(p) => self.i = self.byte_to_char(start_b + p),
            None => self.i = self.chars.len(),
        }
    }

    /// Read a quoted string opened at the cursor and return it re-quoted as
    /// a double-quoted JSON string. If the input ends before `close` is
    /// found, the partial string is returned without a closing quote and the
    /// downstream strict decode surfaces the error.
    fn parse_string(&mut self, close: char) -> String {
        let mut s = String::new();
        s.push('"');
        self.i += 1;
        while let Some(c) = self.peek() {
            if c == close {
                s.push('"');
                self.i += 1;
                return s;
            }
            if c == '"' && self.prev() != Some('\\') {
                s.push_str("\\\"");
            } else if let Some(esc) = control_escape(c) {
                s.push_str(esc);
            } else if c == '\\' {
                // drop the escape when it guards a single quote, which needs
                // none once re-quoted; keep any other escape pair verbatim
                self.i += 1;
                match self.peek() {
                    Some('\'') => s.push('\''),
                    Some(next) => {
                        s.push('\\');
                        s.push(next);
                    }
                    None => {
                        s.push('\\');
                        break;
                    }
                }
            } else {
                s.push(c);
            }
            self.i += 1;
        }
        self.logger.log(&self.chars, self.i, "unterminated string");
        s
    }

    /// Identifier run in key position: quote it, unless it is a bare JSON
    /// literal (left untouched even though literals are not valid key names).
    fn quote_key(&mut self) {
        let start = self.i;
        while matches!(self.peek(), Some(c) if is_ident_char(c)) {
            self.i += 1;
        }
        let key: String = self.chars[start..self.i].iter().collect();
        match key.as_str() {
            "null" | "true" | "false" => self.out.push_str(&key),
            _ => {
                self.logger.log(&self.chars, start, "quoted unquoted key");
                self.out.push('"');
                self.out.push_str(&key);
                self.out.push('"');
            }
        }
    }

    /// Identifier run in value position. A following `(` makes it a vendor
    /// constructor call whose argument replaces the whole construct; without
    /// one the identifier is emitted as-is, which is also how bare
    /// `null`/`true`/`false` values flow through.
    fn value_symbol(&mut self) {
        let start = self.i;
        while matches!(self.peek(), Some(c) if is_ident_char(c)) {
            self.i += 1;
        }
        let ident: String = self.chars[start..self.i].iter().collect();

        if !(self.opts.unwrap_vendor_types && self.peek() == Some('(')) {
            self.out.push_str(&ident);
            return;
        }
        self.i += 1;

        let value = match self.peek() {
            Some(open) if is_opening_quote(open) => {
                let close = closing_quote_for(open).unwrap_or(open);
                self.parse_string(close)
            }
            _ => {
                let arg_start = self.i;
                while matches!(self.peek(), Some(c) if c != ')') {
                    self.i += 1;
                }
                self.chars[arg_start..self.i].iter().collect()
            }
        };

        if self.peek() == Some(')') {
            self.i += 1;
            self.logger
                .log(&self.chars, start, "unwrapped vendor constructor");
            self.out.push_str(&value);
        } else {
            // no closing parenthesis: reconstruct instead of guessing
            self.out.push_str(&ident);
            self.out.push('(');
            self.out.push_str(&value);
            if let Some(c) = self.peek() {
                self.out.push(c);
                self.i += 1;
            }
        }
    }
}
