//! Single-quote span trimming.
//!
//! Quote delimiters are paired in document order (1st with 2nd, 3rd with
//! 4th, and so on). Whitespace immediately inside a pair is removed so a
//! span reads `'content'`; spacing between interior words and everything
//! outside the pair is untouched. A trailing unpaired delimiter is left
//! as a literal character.

use crate::token::{render, TokenKind};
use crate::tokenizer::tokenize;

/// Trim interior whitespace of every matched single-quote pair in `text`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let tokens = tokenize(text);
    let quotes: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.kind == TokenKind::QuoteDelimiter)
        .map(|(i, _)| i)
        .collect();

    let mut dropped = vec![false; tokens.len()];
    for pair in quotes.chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);

        let mut i = open + 1;
        while i < close && tokens[i].kind == TokenKind::Whitespace {
            dropped[i] = true;
            i += 1;
        }
        let mut i = close;
        while i > open + 1 && tokens[i - 1].kind == TokenKind::Whitespace {
            dropped[i - 1] = true;
            i -= 1;
        }
    }

    let kept: Vec<_> = tokens
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !dropped[*i])
        .map(|(_, t)| t)
        .collect();
    render(&kept)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_trims_leading_and_trailing_space() {
        assert_eq!(normalize("' hello '"), "'hello'");
        assert_eq!(normalize("'\t hello \t'"), "'hello'");
    }

    #[test]
    fn test_interior_spacing_preserved() {
        assert_eq!(normalize("' hello  there '"), "'hello  there'");
    }

    #[test]
    fn test_exterior_spacing_preserved() {
        assert_eq!(normalize("said  ' hi '  twice"), "said  'hi'  twice");
    }

    #[test]
    fn test_multiple_pairs() {
        assert_eq!(normalize("' hello ' world ' test '"), "'hello' world 'test'");
    }

    #[test]
    fn test_unpaired_delimiter_untouched() {
        assert_eq!(normalize("it's fine"), "it's fine");
        assert_eq!(normalize("'a' and ' stray"), "'a' and ' stray");
    }

    #[test]
    fn test_whitespace_only_span() {
        assert_eq!(normalize("'   '"), "''");
    }

    #[test]
    fn test_already_tight_pair() {
        assert_eq!(normalize("'hello'"), "'hello'");
    }

    #[test]
    fn test_no_quotes() {
        assert_eq!(normalize("plain text"), "plain text");
    }
}
