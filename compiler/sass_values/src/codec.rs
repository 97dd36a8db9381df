//! String literal codec.
//!
//! Converts between the raw text of a string token (with its surrounding
//! quotes and escape sequences) and the decoded text stored on a
//! `StringConstant`. All functions are pure and allocation-bounded by
//! the input length.

/// Options controlling how [`unquote`] decodes a quoted token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnquoteOptions {
    /// Keep `\XX` escape sequences verbatim instead of decoding them.
    pub keep_utf8_escapes: bool,
    /// Return the input unchanged when it contains an unescaped
    /// occurrence of its own delimiter.
    pub strict: bool,
}

impl Default for UnquoteOptions {
    fn default() -> Self {
        UnquoteOptions {
            keep_utf8_escapes: false,
            strict: true,
        }
    }
}

/// Pick the quote mark that needs the fewest escapes.
///
/// Any single quote in the text forces double quotes. A double quote
/// switches to single quotes unless a single quote shows up later.
pub fn detect_best_quotemark(s: &str, fallback: char) -> char {
    let mut mark = if fallback == '\'' || fallback == '"' {
        fallback
    } else {
        '"'
    };
    for c in s.chars() {
        match c {
            '\'' => return '"',
            '"' => mark = '\'',
            _ => {}
        }
    }
    mark
}

/// Quote `s` for output.
///
/// The mark is auto-detected with `preferred` (or `"`) as the fallback.
/// The chosen delimiter and backslashes are escaped; newlines (and
/// `\r\n` pairs) become `\a`, followed by a space when the next
/// character would otherwise extend the escape.
pub fn quote(s: &str, preferred: Option<char>) -> String {
    let q = detect_best_quotemark(s, preferred.unwrap_or('"'));
    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        let c = if c == '\r' && chars.peek() == Some(&'\n') {
            chars.next();
            '\n'
        } else {
            c
        };
        match c {
            '\n' => {
                out.push_str("\\a");
                if chars
                    .peek()
                    .is_some_and(|next| next.is_ascii_hexdigit() || next.is_ascii_whitespace())
                {
                    out.push(' ');
                }
            }
            '\\' => out.push_str("\\\\"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}

/// Strip the surrounding quotes from `s` and decode its escapes.
///
/// Returns the decoded text and the quote mark that was removed. Inputs
/// that are not a complete quoted literal come back unchanged with no
/// mark, as do inputs ending in a dangling backslash and (in strict
/// mode) inputs with an unescaped inner delimiter.
pub fn unquote(s: &str, options: UnquoteOptions) -> (String, Option<char>) {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        return (s.to_string(), None);
    }
    let q = match (chars[0], chars[chars.len() - 1]) {
        ('"', '"') => '"',
        ('\'', '\'') => '\'',
        _ => return (s.to_string(), None),
    };

    let inner = &chars[1..chars.len() - 1];
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;
    let mut i = 0;
    while i < inner.len() {
        let c = inner[i];
        if c == '\\' && !escaped {
            escaped = true;
            if options.keep_utf8_escapes {
                out.push(c);
            } else if let Some((decoded, consumed)) = decode_hex_escape(inner, i) {
                out.push(decoded);
                escaped = false;
                i += consumed;
                continue;
            }
            i += 1;
            continue;
        }
        if options.strict && !escaped && c == q {
            return (s.to_string(), None);
        }
        escaped = false;
        out.push(c);
        i += 1;
    }

    if escaped {
        return (s.to_string(), None);
    }
    (out, Some(q))
}

/// Decode `\XX` hex escapes in unquoted text.
///
/// Escapes that are not followed by a hex digit keep their backslash.
pub fn read_hex_escapes(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\\' {
            if let Some((decoded, consumed)) = decode_hex_escape(&chars, i) {
                out.push(decoded);
                i += consumed;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Strip trailing CSS whitespace.
pub fn rtrim(s: &str) -> &str {
    s.trim_end_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C'))
}

/// Decode the escape starting at the backslash at `start`.
///
/// Returns the decoded character and the number of chars consumed, or
/// `None` when the backslash is not followed by a hex digit. A single
/// space terminating the escape is consumed with it; code point zero and
/// invalid code points decode to U+FFFD.
fn decode_hex_escape(chars: &[char], start: usize) -> Option<(char, usize)> {
    let digits = chars[start + 1..]
        .iter()
        .take_while(|c| c.is_ascii_hexdigit())
        .count();
    if digits == 0 {
        return None;
    }
    let mut code: u32 = 0;
    for c in &chars[start + 1..=start + digits] {
        let digit = c.to_digit(16).unwrap_or(0);
        code = code.saturating_mul(16).saturating_add(digit);
    }
    let mut consumed = 1 + digits;
    if chars.get(start + consumed) == Some(&' ') {
        consumed += 1;
    }
    let decoded = match code {
        0 => char::REPLACEMENT_CHARACTER,
        code => char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER),
    };
    Some((decoded, consumed))
}
