#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, '\u{0009}' | '\u{000A}' | '\u{000D}' | '\u{0020}')
}

/// Unicode space variants that get normalized to an ordinary space:
/// non-breaking space, the general punctuation spaces, narrow no-break
/// space, medium mathematical space, ideographic space.
#[inline]
pub fn is_special_whitespace(c: char) -> bool {
    matches!(c, '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}')
}

/// First char of an identifier run. Digits continue a run but never start
/// one, so numbers in value position fall through to the default rule.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

#[inline]
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[inline]
pub fn is_opening_quote(c: char) -> bool {
    closing_quote_for(c).is_some()
}

/// Map an opening quote delimiter to the closer that terminates it.
/// The grave accent pairs with the acute accent; the curly families pair
/// left with right.
#[inline]
pub fn closing_quote_for(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\'' => Some('\''),
        '\u{60}' => Some('\u{B4}'),
        '\u{2018}' => Some('\u{2019}'),
        '\u{201C}' => Some('\u{201D}'),
        _ => None,
    }
}

/// JSON two-character escape for an unescaped control character, if the
/// character is one we rewrite.
#[inline]
pub fn control_escape(c: char) -> Option<&'static str> {
    match c {
        '\u{0008}' => Some("\\b"),
        '\u{000C}' => Some("\\f"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\t' => Some("\\t"),
        _ => None,
    }
}
