//! Inline directive parsing and resolution.
//!
//! A directive is a parenthesized command following a word or phrase, e.g.
//! `go (up)` or `this is important (cap, 3)`. The payload grammar is
//! `name` or `name, count` with `name` one of `up`, `low`, `cap`, `hex`,
//! `bin` and `count` an unsigned decimal integer. Whitespace is
//! insignificant only around the comma; the count form is not defined for
//! `hex` and `bin`.
//!
//! A marker whose payload does not match the grammar is inert and stays in
//! the output as literal text. A well-formed marker is always removed,
//! even when its effect cannot apply (zero count, failed numeric parse).

mod resolver;

pub use resolver::resolve;

/// The rewriting command a directive performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `up` - uppercase every word in the span.
    ToUpper,
    /// `low` - lowercase every word in the span.
    ToLower,
    /// `cap` - title-case every word in the span.
    ToTitle,
    /// `hex` - rewrite the preceding word from base 16 to decimal.
    HexToDecimal,
    /// `bin` - rewrite the preceding word from base 2 to decimal.
    BinToDecimal,
}

impl DirectiveKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "up" => Some(Self::ToUpper),
            "low" => Some(Self::ToLower),
            "cap" => Some(Self::ToTitle),
            "hex" => Some(Self::HexToDecimal),
            "bin" => Some(Self::BinToDecimal),
            _ => None,
        }
    }

    /// Whether the `name, count` payload form is defined for this kind.
    fn takes_count(self) -> bool {
        matches!(self, Self::ToUpper | Self::ToLower | Self::ToTitle)
    }
}

/// A parsed directive: the command plus the number of preceding words it
/// targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    /// The rewriting command.
    pub kind: DirectiveKind,
    /// Number of preceding word tokens to rewrite. A scope of 0 makes the
    /// directive inapplicable: the marker is removed and nothing else
    /// changes.
    pub scope: usize,
}

impl Directive {
    /// Parse a directive from a marker token's text (parentheses included).
    ///
    /// Returns `None` for an unterminated marker or a payload outside the
    /// grammar; such markers are left as literal text by the resolver.
    #[must_use]
    pub fn parse(marker: &str) -> Option<Self> {
        let payload = marker.strip_prefix('(')?.strip_suffix(')')?;

        let Some((name, count)) = payload.split_once(',') else {
            let kind = DirectiveKind::from_name(payload)?;
            return Some(Self { kind, scope: 1 });
        };

        let kind = DirectiveKind::from_name(name.trim_end())?;
        if !kind.takes_count() {
            return None;
        }

        let count = count.trim();
        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // All digits: a failed parse can only be overflow, which clamps to
        // every available word anyway.
        let scope = count.parse().unwrap_or(usize::MAX);
        Some(Self { kind, scope })
    }
}
