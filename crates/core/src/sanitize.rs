//! Input sanitization: trimming, HTML escaping, email normalization.
//!
//! Sanitization must be idempotent: feeding a sanitized value back through
//! the pipeline yields the identical value. `escape_html` therefore leaves
//! an existing character entity (`&amp;`, `&#39;`, `&#x27;`, ...) alone
//! instead of re-escaping its ampersand.

/// HTML-escape a string, skipping ampersands that already start an entity.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    for (i, ch) in input.char_indices() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '`' => out.push_str("&#96;"),
            '&' => {
                if starts_entity(&bytes[i + 1..]) {
                    out.push('&');
                } else {
                    out.push_str("&amp;");
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Whether `rest` (the bytes after an `&`) begins with the body of a
/// character entity: `name;`, `#digits;`, or `#xhex;`.
fn starts_entity(rest: &[u8]) -> bool {
    let (body, kind) = match rest.first() {
        Some(b'#') => match rest.get(1) {
            Some(b'x') | Some(b'X') => (&rest[2..], HexDigits),
            _ => (&rest[1..], DecDigits),
        },
        Some(_) => (rest, Named),
        None => return false,
    };
    let len = body
        .iter()
        .take_while(|b| match kind {
            HexDigits => b.is_ascii_hexdigit(),
            DecDigits => b.is_ascii_digit(),
            Named => b.is_ascii_alphanumeric(),
        })
        .count();
    len > 0 && body.get(len) == Some(&b';')
}

use EntityBody::*;

enum EntityBody {
    Named,
    DecDigits,
    HexDigits,
}

/// Canonicalize an email address: trim and lowercase.
///
/// Provider-specific rewriting (gmail dot stripping and the like) is
/// deliberately out of scope; case-insensitive comparison is all the
/// listing and store paths need.
pub fn normalize_email(input: &str) -> String {
    input.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
