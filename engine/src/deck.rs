//! Deck loading: the `deck.txt` text format and a supplemented deterministic
//! shuffle for generating fresh deals without an external file.
//!
//! `deck.txt` is a stream of ASCII digits, 156 of them (52 cards * 3 digits:
//! rank tens digit, rank ones digit, suit digit), with `//`-prefixed line
//! comments skipped and all non-digit bytes otherwise ignored. This mirrors
//! `Solitaire::load` and `main`'s deck-file reader in the original solver.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::card::{Card, Suit};

pub const DECK_DIGITS: usize = 156;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck must contain exactly {DECK_DIGITS} digits, found {0}")]
    WrongLength(usize),
    #[error("card {index}: suit digit out of range")]
    BadSuit { index: usize },
    #[error("card {index}: rank out of range 1..=13")]
    BadRank { index: usize },
    #[error("deck does not contain exactly one of each card")]
    NotAPermutation,
}

/// Strips `//`-prefixed line comments and non-digit bytes, leaving the bare
/// digit stream a deck file is expected to reduce to.
fn extract_digits(text: &str) -> Vec<u8> {
    let mut digits = Vec::with_capacity(DECK_DIGITS);
    let mut chars = text.chars().peekable();
    let mut prev_slash = false;
    while let Some(c) = chars.next() {
        if c == '/' && prev_slash {
            for c2 in chars.by_ref() {
                if c2 == '\n' {
                    break;
                }
            }
            prev_slash = false;
            continue;
        }
        prev_slash = c == '/';
        if c.is_ascii_digit() {
            digits.push(c as u8 - b'0');
        }
    }
    digits
}

/// Parses a `deck.txt`-style digit stream into 52 ordered cards.
///
/// Per card: `(rank_tens, rank_ones, suit_digit)`. Suit digit `1..=4` maps to
/// `CDHS` order on disk, remapped internally so suit 2 and 3 swap (spades and
/// hearts trade places relative to the raw digit) to match the engine's
/// internal `Suit` ordering (clubs, diamonds, spades, hearts).
pub fn parse(text: &str) -> Result<[Card; 52], DeckError> {
    let digits = extract_digits(text);
    if digits.len() != DECK_DIGITS {
        return Err(DeckError::WrongLength(digits.len()));
    }
    let mut seen = [false; 52];
    let mut cards = [Card::new(0, Suit::Clubs); 52];
    for i in 0..52 {
        let suit_digit = digits[i * 3 + 2] as i32 - 1;
        if !(0..=3).contains(&suit_digit) {
            return Err(DeckError::BadSuit { index: i });
        }
        let suit_index = if suit_digit >= 2 {
            if suit_digit == 2 {
                3
            } else {
                2
            }
        } else {
            suit_digit
        } as u8;
        let rank = digits[i * 3] as i32 * 10 + digits[i * 3 + 1] as i32 - 1;
        if !(0..=12).contains(&rank) {
            return Err(DeckError::BadRank { index: i });
        }
        let suit = Suit::from_index(suit_index).expect("suit_index computed in 0..4");
        let card = Card::new(rank as u8, suit);
        let value = card.value() as usize;
        if seen[value] {
            return Err(DeckError::NotAPermutation);
        }
        seen[value] = true;
        cards[i] = card;
    }
    Ok(cards)
}

/// Serializes a 52-card deck back into the `deck.txt` digit format (no
/// comments, one line). Inverse of [`parse`] modulo comment stripping.
pub fn to_digit_string(cards: &[Card; 52]) -> String {
    let mut out = String::with_capacity(DECK_DIGITS);
    for card in cards {
        let rank1 = card.rank as u32 + 1;
        out.push_str(&format!("{:02}", rank1));
        let suit_index = card.suit as u8;
        let suit_digit = if suit_index >= 2 {
            if suit_index == 2 {
                3
            } else {
                2
            }
        } else {
            suit_index
        } + 1;
        out.push((b'0' + suit_digit) as char);
    }
    out
}

/// Builds a uniformly shuffled 52-card deck from an explicit seed.
///
/// Supplemental to the distilled format: the original generates decks either
/// from a fixed `deck.txt` or from its own hand-rolled xorshift-style
/// `Random`; neither is reproducible across runs against a specific numeric
/// seed using a standard, auditable RNG, so this uses `rand`'s
/// `ChaCha8Rng` seeded directly from the caller's `u64` instead of
/// reimplementing the original generator.
pub fn shuffled_deck(seed: u64) -> [Card; 52] {
    let mut cards: Vec<Card> = (0..52u8).map(Card::from_value).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    cards.shuffle(&mut rng);
    cards.try_into().expect("exactly 52 cards shuffled in place")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "092132014012091083053052082131102051021033122084062111094071081013103064041112093042113044104024124023074011054032133072031123134114043073063101121034022061";

    #[test]
    fn parses_sample_deck_into_52_distinct_cards() {
        let cards = parse(SAMPLE).expect("sample deck is valid");
        let mut seen = [false; 52];
        for c in &cards {
            assert!(!seen[c.value() as usize], "duplicate card in parsed deck");
            seen[c.value() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn strips_comment_lines() {
        let commented = format!("// a header comment\n{SAMPLE}\n// trailing\n");
        assert_eq!(parse(&commented).unwrap(), parse(SAMPLE).unwrap());
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(parse("0913201").unwrap_err(), DeckError::WrongLength(7));
    }

    #[test]
    fn round_trips_through_digit_string() {
        let cards = parse(SAMPLE).unwrap();
        let text = to_digit_string(&cards);
        assert_eq!(parse(&text).unwrap(), cards);
    }

    #[test]
    fn shuffled_deck_is_deterministic_per_seed() {
        let a = shuffled_deck(42);
        let b = shuffled_deck(42);
        assert_eq!(a, b);
        let c = shuffled_deck(43);
        assert_ne!(a, c);
    }
}
