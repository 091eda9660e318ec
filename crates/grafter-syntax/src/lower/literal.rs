//! Decoding of string and numeric literal tokens.

use std::iter::Peekable;
use std::str::Chars;

/// A decoded numeric literal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Number {
    /// An ordinary number.
    Float(f64),
    /// A `BigInt` literal, kept as its decimal digits.
    BigInt(String),
}

/// Parses the text of a numeric literal.
///
/// Accepts decimal, hexadecimal, octal, and binary forms with `_`
/// separators, and `n`-suffixed `BigInt` literals. Returns `None` for text
/// that is not a number.
pub(crate) fn parse_number(raw: &str) -> Option<Number> {
    let digits: String = raw.chars().filter(|c| *c != '_').collect();
    if let Some(big) = digits.strip_suffix('n') {
        let value = parse_integer(big)?;
        return Some(Number::BigInt(value.to_string()));
    }
    if let Some(value) = parse_integer(&digits).filter(|_| is_prefixed(&digits)) {
        return Some(Number::Float(u128_to_f64(value)));
    }
    digits.parse::<f64>().ok().map(Number::Float)
}

fn is_prefixed(digits: &str) -> bool {
    let lower = digits.to_ascii_lowercase();
    ["0x", "0o", "0b"].iter().any(|prefix| lower.starts_with(prefix))
}

fn parse_integer(digits: &str) -> Option<u128> {
    let lower = digits.to_ascii_lowercase();
    let (radix, body) = match lower.get(..2) {
        Some("0x") => (16, lower.get(2..)?),
        Some("0o") => (8, lower.get(2..)?),
        Some("0b") => (2, lower.get(2..)?),
        _ => (10, lower.as_str()),
    };
    u128::from_str_radix(body, radix).ok()
}

fn u128_to_f64(value: u128) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "JavaScript numbers round large integers the same way"
    )]
    let float = value as f64;
    float
}

/// Decodes the text of a quoted string literal, quotes included.
///
/// Unknown escapes yield the escaped character, as JavaScript does.
pub(crate) fn decode_string(raw: &str) -> String {
    let inner = raw
        .get(1..raw.len().saturating_sub(1))
        .filter(|_| raw.len() >= 2)
        .unwrap_or_default();
    let mut decoded = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            decode_escape(&mut chars, &mut decoded);
        } else {
            decoded.push(c);
        }
    }
    decoded
}

fn decode_escape(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    let Some(escaped) = chars.next() else {
        return;
    };
    match escaped {
        'n' => out.push('\n'),
        't' => out.push('\t'),
        'r' => out.push('\r'),
        'b' => out.push('\u{8}'),
        'f' => out.push('\u{c}'),
        'v' => out.push('\u{b}'),
        '0' if !chars.peek().is_some_and(char::is_ascii_digit) => out.push('\0'),
        'x' => push_code(out, take_hex(chars, 2)),
        'u' if chars.peek() == Some(&'{') => {
            chars.next();
            let mut hex = String::new();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                hex.push(c);
            }
            push_code(out, Some(hex));
        }
        'u' => push_unicode(chars, out),
        '\r' => {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
        }
        '\n' | '\u{2028}' | '\u{2029}' => {}
        other => out.push(other),
    }
}

/// Decodes `\uXXXX`, joining surrogate pairs written as two escapes.
fn push_unicode(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    let Some(high) = take_hex(chars, 4).and_then(|hex| u32::from_str_radix(&hex, 16).ok()) else {
        return;
    };
    if (0xD800..0xDC00).contains(&high) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Some(low) =
                take_hex(&mut lookahead, 4).and_then(|hex| u32::from_str_radix(&hex, 16).ok())
            {
                if (0xDC00..0xE000).contains(&low) {
                    let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                    if let Some(c) = char::from_u32(code) {
                        out.push(c);
                        *chars = lookahead;
                        return;
                    }
                }
            }
        }
    }
    out.push(char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER));
}

fn take_hex(chars: &mut Peekable<Chars<'_>>, count: usize) -> Option<String> {
    let mut hex = String::with_capacity(count);
    for _ in 0..count {
        hex.push(chars.next_if(char::is_ascii_hexdigit)?);
    }
    Some(hex)
}

fn push_code(out: &mut String, hex: Option<String>) {
    let decoded = hex
        .and_then(|digits| u32::from_str_radix(&digits, 16).ok())
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    out.push(decoded);
}
