use crate::lexer::token::TokenKind;

pub const FRAMES: [&str; 3] = ["GF", "LF", "TF"];
pub const TYPE_KEYWORDS: [&str; 4] = ["int", "bool", "string", "nil"];

pub fn is_frame(s: &str) -> bool {
    FRAMES.contains(&s)
}

pub fn is_type_keyword(s: &str) -> bool {
    TYPE_KEYWORDS.contains(&s)
}

fn is_special(c: char) -> bool {
    matches!(c, '_' | '-' | '$' | '&' | '%' | '*' | '!' | '?')
}

/// Label and variable identifiers: a letter or special symbol, then letters, digits or
/// special symbols.
pub fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || is_special(c) => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || is_special(c))
}

/// Optional sign, then decimal, `0x` hexadecimal or `0o` octal digits.
pub fn is_int(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);

    let (digits, radix) = if let Some(hex) = digits.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(oct) = digits.strip_prefix("0o") {
        (oct, 8)
    } else {
        (digits, 10)
    };

    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

pub fn is_bool(s: &str) -> bool {
    s == "true" || s == "false"
}

pub fn is_nil(s: &str) -> bool {
    s == "nil"
}

/// No spaces or `#`, and every `\` starts a `\ddd` escape.
pub fn is_string(s: &str) -> bool {
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            ' ' | '#' => return false,
            '\\' => {
                for _ in 0..3 {
                    if !chars.next().is_some_and(|d| d.is_ascii_digit()) {
                        return false;
                    }
                }
            }
            _ => {}
        }
    }
    true
}

/// Checks the value part of `tag@value` against the kind named by its tag.
pub fn is_valid_symbol(kind: TokenKind, value: &str) -> bool {
    match kind {
        TokenKind::Int => is_int(value),
        TokenKind::Bool => is_bool(value),
        TokenKind::String => is_string(value),
        TokenKind::Nil => is_nil(value),
        _ => false,
    }
}
