//! Token model shared by the tokenizer and the directive resolver.

/// Classification of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of characters that is not whitespace, punctuation, a quote
    /// delimiter, or a directive marker.
    Word,
    /// A single space, tab, or newline.
    Whitespace,
    /// One of `, . ! ? : ;`.
    Punctuation,
    /// A single `'`.
    QuoteDelimiter,
    /// A parenthesized inline command, e.g. `(up)` or `(cap, 3)`.
    ///
    /// The text includes both parentheses. An unterminated marker runs to
    /// the end of input and has no closing parenthesis.
    DirectiveMarker,
}

/// A unit of source text.
///
/// Concatenating `text` over a token sequence reproduces the tokenized
/// input byte-for-byte. `position` is the byte offset of the token in that
/// input; it is carried for diagnostics and never affects rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,
    /// The literal substring.
    pub text: String,
    /// Byte offset in the original input.
    pub position: usize,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Whether this token is a word.
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Whether this token is whitespace.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

/// Concatenate token texts back into a single string.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());
    for token in tokens {
        out.push_str(&token.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_concatenates_in_order() {
        let tokens = vec![
            Token::new(TokenKind::Word, "go", 0),
            Token::new(TokenKind::Whitespace, " ", 2),
            Token::new(TokenKind::DirectiveMarker, "(up)", 3),
        ];
        assert_eq!(render(&tokens), "go (up)");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }
}
