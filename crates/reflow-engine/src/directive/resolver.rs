//! Directive application over a token sequence.
//!
//! Single forward pass: each well-formed marker rewrites a span of
//! preceding word tokens and is then removed together with the whitespace
//! run before it. Markers are applied in document order, so a later
//! directive sees (and may overwrite) the result of an earlier one.

use crate::token::{Token, TokenKind};

use super::{Directive, DirectiveKind};

/// Resolve all directive markers in `tokens`.
///
/// Inert markers (unterminated, unknown name, malformed count) are kept as
/// literal text. Well-formed markers are applied to their span, clamped to
/// the words actually available, and removed along with the whitespace run
/// immediately before them; a marker with nothing but whitespace before it
/// removes the run after it instead.
#[must_use]
pub fn resolve(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut skip_leading_space = false;

    for token in tokens {
        if skip_leading_space {
            if token.kind == TokenKind::Whitespace {
                continue;
            }
            skip_leading_space = false;
        }

        if token.kind != TokenKind::DirectiveMarker {
            out.push(token);
            continue;
        }

        let Some(directive) = Directive::parse(&token.text) else {
            tracing::trace!(marker = %token.text, "Inert marker left as literal text");
            out.push(token);
            continue;
        };

        tracing::debug!(marker = %token.text, scope = directive.scope, "Applying directive");

        while out.last().is_some_and(Token::is_whitespace) {
            out.pop();
        }
        if out.is_empty() {
            skip_leading_space = true;
        }
        apply(&mut out, directive);
    }

    out
}

/// Apply one directive to the tokens preceding its (already removed)
/// marker.
fn apply(out: &mut [Token], directive: Directive) {
    match directive.kind {
        DirectiveKind::HexToDecimal => convert_number(out, 16),
        DirectiveKind::BinToDecimal => convert_number(out, 2),
        kind => {
            for i in span_indices(out, directive.scope) {
                out[i].text = recase(kind, &out[i].text);
            }
        }
    }
}

/// Indices of the word tokens forming the rewrite span, nearest first.
///
/// The walk skips whitespace, punctuation, and quote delimiters, and stops
/// at the start of the sequence or at a marker token still present (an
/// inert literal marker bounds the span).
fn span_indices(out: &[Token], scope: usize) -> Vec<usize> {
    let mut indices = Vec::new();
    for (i, token) in out.iter().enumerate().rev() {
        if indices.len() == scope {
            break;
        }
        match token.kind {
            TokenKind::Word => indices.push(i),
            TokenKind::DirectiveMarker => break,
            _ => {}
        }
    }
    indices
}

fn recase(kind: DirectiveKind, text: &str) -> String {
    match kind {
        DirectiveKind::ToUpper => text.to_ascii_uppercase(),
        DirectiveKind::ToLower => text.to_ascii_lowercase(),
        _ => title_case(text),
    }
}

/// Title-case a word: first character uppercased, the rest lowercased.
///
/// A fully uppercase token longer than one character is left unchanged, so
/// `cap` does not down-case acronyms.
fn title_case(text: &str) -> String {
    if is_fully_uppercase(text) {
        return text.to_owned();
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut titled = first.to_ascii_uppercase().to_string();
            titled.push_str(&chars.as_str().to_ascii_lowercase());
            titled
        }
        None => String::new(),
    }
}

fn is_fully_uppercase(text: &str) -> bool {
    text.chars().count() > 1
        && text.chars().any(|c| c.is_ascii_alphabetic())
        && !text.chars().any(|c| c.is_ascii_lowercase())
}

/// Rewrite the nearest preceding word from `radix` to decimal.
///
/// A word that is empty, contains out-of-alphabet characters, or overflows
/// 64 bits is left unchanged; the marker has already been dropped.
fn convert_number(out: &mut [Token], radix: u32) {
    let Some(&i) = span_indices(out, 1).first() else {
        return;
    };
    if let Some(decimal) = to_decimal(&out[i].text, radix) {
        out[i].text = decimal;
    }
}

fn to_decimal(word: &str, radix: u32) -> Option<String> {
    let in_alphabet = match radix {
        2 => word.bytes().all(|b| matches!(b, b'0' | b'1')),
        16 => word.bytes().all(|b| b.is_ascii_hexdigit()),
        _ => false,
    };
    if word.is_empty() || !in_alphabet {
        return None;
    }
    u64::from_str_radix(word, radix).ok().map(|v| v.to_string())
}
