//! Directive-scoped text rewriting engine.
//!
//! Rewrites plain text containing inline formatting directives
//! (parenthesized commands following a word or phrase) into normalized
//! prose: numeric literals are converted between bases, word spans are
//! case-transformed, indefinite articles are corrected, quoted spans are
//! trimmed, and punctuation spacing is fixed.
//!
//! # Architecture
//!
//! [`process`] is the single entry point. It runs a fixed pipeline:
//!
//! 1. [`tokenize`]: split the input into typed tokens (lossless)
//! 2. [`resolve`](directive::resolve): apply and remove directive markers
//! 3. [`articles::correct`]: fix `a`/`an` agreement
//! 4. [`quotes::normalize`]: trim single-quote spans
//! 5. [`punctuation::normalize`]: fix punctuation spacing
//!
//! The engine is pure and total: `process` never fails, holds no state
//! between calls, and is safe to call concurrently. All directive and
//! numeric failure handling is local and silent; malformed markers stay
//! in the output as literal text.
//!
//! # Example
//!
//! ```
//! use reflow_engine::process;
//!
//! let output = process("1E (hex) files and go (up) test");
//! assert_eq!(output, "30 files and GO test");
//! ```

pub mod articles;
pub mod directive;
mod pipeline;
pub mod punctuation;
pub mod quotes;
mod stream;
mod token;
mod tokenizer;

pub use directive::{Directive, DirectiveKind};
pub use pipeline::process;
pub use stream::LineSession;
pub use token::{render, Token, TokenKind};
pub use tokenizer::tokenize;
