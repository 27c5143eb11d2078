//! Triple-quoted string post-processing.
//!
//! Runs in three steps over the raw interior text the lexer captured:
//! trim a lone leading blank line, detect and strip the closing
//! delimiter's own indentation from every remaining line, then decode
//! escapes leniently (an unrecognized `\x` is kept as literal `\x`,
//! unlike the strict decoding single-line strings use in the lexer).

pub fn decode_triple_quoted(raw: &str) -> String {
    let trimmed = trim_leading_blank(raw);
    let (body, closing_indent) = split_closing_indent(trimmed);
    let dedented = strip_closing_indent(&body, &closing_indent);
    decode_lenient_escapes(&dedented)
}

fn trim_leading_blank(s: &str) -> &str {
    match s.find('\n') {
        Some(idx) if s[..idx].chars().all(is_indent_char) => &s[idx + 1..],
        _ => s,
    }
}

fn split_closing_indent(s: &str) -> (String, String) {
    match s.rfind('\n') {
        Some(idx) if s[idx + 1..].chars().all(is_indent_char) => {
            (s[..idx].to_string(), s[idx + 1..].to_string())
        }
        None if s.chars().all(is_indent_char) => (String::new(), s.to_string()),
        _ => (s.to_string(), String::new()),
    }
}

fn strip_closing_indent(body: &str, closing_indent: &str) -> String {
    if closing_indent.is_empty() {
        return body.to_string();
    }
    body.split('\n')
        .map(|line| line.strip_prefix(closing_indent).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_indent_char(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn decode_lenient_escapes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('\\') => {
                result.push('\\');
                chars.next();
            }
            Some('\'') => {
                result.push('\'');
                chars.next();
            }
            Some('"') => {
                result.push('"');
                chars.next();
            }
            Some('u') => {
                let mut lookahead = chars.clone();
                lookahead.next(); // 'u'
                let hex: String = lookahead.clone().take(4).collect();
                if hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                    chars.next(); // 'u'
                    for _ in 0..4 {
                        chars.next();
                    }
                    result.push(decode_unicode_unit(&hex, &mut chars));
                } else {
                    // Not a valid \uXXXX escape: kept literal, per the
                    // lenient rule for triple-quoted strings.
                    result.push('\\');
                    result.push('u');
                    chars.next();
                }
            }
            Some(other) => {
                result.push('\\');
                result.push(other);
                chars.next();
            }
            None => result.push('\\'),
        }
    }

    result
}

fn decode_unicode_unit(hex: &str, chars: &mut std::iter::Peekable<std::str::Chars>) -> char {
    let unit = u32::from_str_radix(hex, 16).expect("pre-checked hex digits");

    if (0xD800..=0xDBFF).contains(&unit) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            let low_hex: String = lookahead.clone().take(4).collect();
            if low_hex.len() == 4 && low_hex.chars().all(|c| c.is_ascii_hexdigit()) {
                if let Ok(low) = u32::from_str_radix(&low_hex, 16) {
                    if (0xDC00..=0xDFFF).contains(&low) {
                        chars.next(); // '\\'
                        chars.next(); // 'u'
                        for _ in 0..4 {
                            chars.next();
                        }
                        let combined = 0x10000 + (unit - 0xD800) * 0x400 + (low - 0xDC00);
                        return char::from_u32(combined).unwrap_or('\u{FFFD}');
                    }
                }
            }
        }
        return '\u{FFFD}';
    }
    if (0xDC00..=0xDFFF).contains(&unit) {
        return '\u{FFFD}';
    }

    char::from_u32(unit).unwrap_or('\u{FFFD}')
}
