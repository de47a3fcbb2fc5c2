//! Indefinite article agreement.
//!
//! Corrects `a`/`an` based on the first letter of the following word, with
//! a fixed closed list of silent-initial-consonant words that take `an`
//! despite their spelling. Runs after directive resolution so it sees
//! final word forms; the following word itself is never altered.

use crate::token::{render, Token, TokenKind};
use crate::tokenizer::tokenize;

/// Words that phonetically begin with a vowel sound.
const SILENT_INITIAL: [&str; 4] = ["honest", "hour", "honor", "heir"];

/// Fix `a`/`an` agreement throughout `text`.
///
/// An article counts as "followed by" a word only when the two are
/// separated by whitespace alone; intervening punctuation or quote
/// delimiters suppress the correction. The article's case is mirrored:
/// `a` becomes `an`, `A` becomes `An`, and conversely.
#[must_use]
pub fn correct(text: &str) -> String {
    let mut tokens = tokenize(text);

    for i in 0..tokens.len() {
        if tokens[i].kind != TokenKind::Word {
            continue;
        }
        let Some(j) = following_word(&tokens, i) else {
            continue;
        };
        if let Some(corrected) = corrected_article(&tokens[i].text, &tokens[j].text) {
            tokens[i].text = corrected;
        }
    }

    render(&tokens)
}

/// Index of the word separated from token `i` by whitespace only.
fn following_word(tokens: &[Token], i: usize) -> Option<usize> {
    let mut saw_space = false;
    for (j, token) in tokens.iter().enumerate().skip(i + 1) {
        match token.kind {
            TokenKind::Whitespace => saw_space = true,
            TokenKind::Word if saw_space => return Some(j),
            _ => return None,
        }
    }
    None
}

fn corrected_article(article: &str, following: &str) -> Option<String> {
    let wants_an = starts_with_vowel(following) || is_silent_initial(following);
    match article {
        "a" if wants_an => Some("an".to_owned()),
        "A" if wants_an => Some("An".to_owned()),
        "an" | "An" | "AN" if !wants_an && starts_with_consonant(following) => {
            Some(if article.starts_with('A') { "A" } else { "a" }.to_owned())
        }
        _ => None,
    }
}

fn starts_with_vowel(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

fn starts_with_consonant(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && !starts_with_vowel(word)
}

fn is_silent_initial(word: &str) -> bool {
    SILENT_INITIAL.iter().any(|w| word.eq_ignore_ascii_case(w))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_a_before_vowel() {
        assert_eq!(correct("There it was. A amazing rock!"), "There it was. An amazing rock!");
        assert_eq!(correct("a apple"), "an apple");
    }

    #[test]
    fn test_silent_initial_words() {
        assert_eq!(correct("a honest man"), "an honest man");
        assert_eq!(correct("a hour"), "an hour");
        assert_eq!(correct("A Heir"), "An Heir");
    }

    #[test]
    fn test_plain_h_is_a_consonant() {
        assert_eq!(correct("a house"), "a house");
    }

    #[test]
    fn test_an_before_consonant() {
        assert_eq!(correct("an banana"), "a banana");
        assert_eq!(correct("An Banana"), "A Banana");
    }

    #[test]
    fn test_an_before_silent_word_kept() {
        assert_eq!(correct("an hour ago"), "an hour ago");
    }

    #[test]
    fn test_case_is_mirrored() {
        assert_eq!(correct("A owl"), "An owl");
        assert_eq!(correct("AN table"), "A table");
    }

    #[test]
    fn test_silent_list_is_exact_match() {
        // "hours" is not in the closed list.
        assert_eq!(correct("a hours"), "a hours");
    }

    #[test]
    fn test_following_word_requires_whitespace_only() {
        assert_eq!(correct("a, apple"), "a, apple");
        assert_eq!(correct("a 'apple'"), "a 'apple'");
        assert_eq!(correct("a"), "a");
    }

    #[test]
    fn test_following_word_case_untouched() {
        assert_eq!(correct("a Apple"), "an Apple");
    }

    #[test]
    fn test_an_before_digit_untouched() {
        assert_eq!(correct("an 8-bit bus"), "an 8-bit bus");
    }

    #[test]
    fn test_longer_words_ending_in_a_untouched() {
        assert_eq!(correct("gorilla orange"), "gorilla orange");
    }
}
