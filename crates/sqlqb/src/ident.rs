//! Safe SQL identifier resolution.
//!
//! Raw table/column references are resolved into dialect-safe identifier
//! text before they reach a statement. The default resolver accepts dotted
//! notation and quoted segments:
//!
//! - Bare segments must match `[A-Za-z_][A-Za-z0-9_$]*`
//! - Quoted segments allow any characters except NUL and escape `"` as `""`
//!
//! # Example
//! ```
//! use sqlqb::{IdentifierResolver, Sql92Resolver};
//!
//! let resolver = Sql92Resolver;
//! assert_eq!(resolver.resolve("public.users")?, "public.users");
//! assert_eq!(resolver.resolve(r#""CamelCase".id"#)?, r#""CamelCase".id"#);
//! # Ok::<(), sqlqb::QbError>(())
//! ```

use crate::error::{QbError, QbResult};

/// Resolves a raw name/alias into a quoted, dialect-safe identifier.
///
/// Statement builders depend on this narrow contract rather than a concrete
/// identifier representation, so alternative dialects can plug in.
pub trait IdentifierResolver {
    /// Resolve `raw` into identifier text, or fail for malformed input.
    fn resolve(&self, raw: &str) -> QbResult<String>;
}

/// The default resolver: SQL92 identifiers in canonical quoted form.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sql92Resolver;

impl IdentifierResolver for Sql92Resolver {
    fn resolve(&self, raw: &str) -> QbResult<String> {
        if raw.is_empty() {
            return Err(QbError::validation("Identifier cannot be empty"));
        }
        if raw.contains('\0') {
            return Err(QbError::validation(
                "Identifier cannot contain NUL character",
            ));
        }

        let mut out = String::with_capacity(raw.len());
        let mut rest = raw;
        loop {
            rest = if rest.starts_with('"') {
                scan_quoted(rest, &mut out)?
            } else {
                scan_bare(rest, &mut out)?
            };

            match rest.chars().next() {
                None => return Ok(out),
                Some('.') => {
                    rest = &rest[1..];
                    if rest.is_empty() {
                        return Err(QbError::validation("Trailing '.' in identifier"));
                    }
                    out.push('.');
                }
                Some(c) => {
                    return Err(QbError::validation(format!(
                        "Expected '.' between identifier parts, got '{c}'"
                    )));
                }
            }
        }
    }
}

/// Consume one bare segment, append it to `out`, and return the remainder.
fn scan_bare<'a>(input: &'a str, out: &mut String) -> QbResult<&'a str> {
    let end = input.find('.').unwrap_or(input.len());
    let (segment, rest) = input.split_at(end);

    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        Some(c) => {
            return Err(QbError::validation(format!(
                "Invalid identifier start character: '{c}'"
            )));
        }
        None => return Err(QbError::validation("Empty identifier segment")),
    }
    for c in chars {
        if c != '_' && c != '$' && !c.is_ascii_alphanumeric() {
            return Err(QbError::validation(format!(
                "Invalid character in identifier: '{c}'"
            )));
        }
    }

    out.push_str(segment);
    Ok(rest)
}

/// Consume one quoted segment (input starts at the opening quote), append
/// its canonical form to `out`, and return the remainder.
fn scan_quoted<'a>(input: &'a str, out: &mut String) -> QbResult<&'a str> {
    let body = &input[1..];
    let mut name = String::new();
    let mut iter = body.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if c != '"' {
            name.push(c);
            continue;
        }
        // Escaped quote: ""
        if let Some(&(_, '"')) = iter.peek() {
            iter.next();
            name.push('"');
            continue;
        }
        // Closing quote.
        if name.is_empty() {
            return Err(QbError::validation("Empty quoted identifier"));
        }
        out.push('"');
        for ch in name.chars() {
            if ch == '"' {
                out.push_str("\"\"");
            } else {
                out.push(ch);
            }
        }
        out.push('"');
        return Ok(&body[i + 1..]);
    }

    Err(QbError::validation("Unclosed quoted identifier"))
}
