//! The canonical processing pipeline.
//!
//! Stage order is fixed and load-bearing: article correction must see the
//! word forms produced by directive resolution, and quote trimming must
//! run before punctuation spacing. Every execution strategy must produce
//! output identical to this ordering.

use crate::token::render;
use crate::{articles, directive, punctuation, quotes, tokenizer};

/// Rewrite `input` into normalized prose.
///
/// Tokenizes, resolves directive markers, then applies article, quote,
/// and punctuation normalization in that order. Total: any input,
/// including the empty string, produces a result. The engine keeps no
/// state between calls.
#[must_use]
pub fn process(input: &str) -> String {
    let tokens = tokenizer::tokenize(input);
    let tokens = directive::resolve(tokens);
    let text = render(&tokens);
    let text = articles::correct(&text);
    let text = quotes::normalize(&text);
    punctuation::normalize(&text)
}
