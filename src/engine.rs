//! Constraint engine: narrows a [`CandidateStore`] using one round of feedback.
//!
//! A round of feedback is a pair of strings:
//! - the eliminated letters, confirmed absent from the solution
//! - the known string, one character per position: `*` for no information,
//!   an uppercase letter for a letter in its correct position, a lowercase
//!   letter for a letter present in the word but not at that position
//!
//! [`apply`] runs four passes in a fixed order and reports how many words
//! each pass removed. Input is never validated here; malformed feedback just
//! filters differently and never panics.

use crate::debug_log;
use crate::store::CandidateStore;
use std::fmt;

pub const UNKNOWN: char = '*';

/// The four filter passes, in the order [`apply`] runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPass {
    EliminatedLetters,
    KnownLetters,
    CorrectPosition,
    WrongPosition,
}

impl FilterPass {
    pub const ALL: [Self; 4] = [
        Self::EliminatedLetters,
        Self::KnownLetters,
        Self::CorrectPosition,
        Self::WrongPosition,
    ];

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::EliminatedLetters => "Filtering out words that contain eliminated letters",
            Self::KnownLetters => "Filtering out words that don't contain known letters",
            Self::CorrectPosition => {
                "Filtering out words that don't contain specified letters at specified positions"
            }
            Self::WrongPosition => {
                "Filtering out words that contain specified letters at known wrong positions"
            }
        }
    }
}

impl fmt::Display for FilterPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of a single filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterReport {
    pub pass: FilterPass,
    pub eliminated: usize,
    pub remaining: usize,
}

impl FilterReport {
    fn new(pass: FilterPass, eliminated: usize, store: &CandidateStore) -> Self {
        let report = Self {
            pass,
            eliminated,
            remaining: store.size(),
        };
        debug_log!(
            "{:?}: eliminated {} remaining {}",
            pass,
            report.eliminated,
            report.remaining
        );
        report
    }
}

/// Letters named anywhere in the known string, lowercased, `*` removed.
///
/// Duplicates are kept.
#[must_use]
pub fn known_letters(known: &str) -> String {
    known
        .chars()
        .filter(|&c| c != UNKNOWN)
        .flat_map(char::to_lowercase)
        .collect()
}

fn letter_at(word: &str, index: usize) -> Option<char> {
    word.chars().nth(index)
}

/// Remove every word containing any of `letters`.
///
/// Matching is case sensitive, so an uppercase letter never matches a
/// lowercase corpus.
pub fn eliminate_letters(store: &mut CandidateStore, letters: &str) -> FilterReport {
    let mut eliminated = 0;
    for letter in letters.chars() {
        eliminated += store.filter(|word| !word.contains(letter));
    }
    FilterReport::new(FilterPass::EliminatedLetters, eliminated, store)
}

/// Remove every word missing any letter named in the known string,
/// regardless of position or case.
pub fn require_letters(store: &mut CandidateStore, known: &str) -> FilterReport {
    let mut eliminated = 0;
    for letter in known_letters(known).chars() {
        eliminated += store.filter(|word| word.contains(letter));
    }
    FilterReport::new(FilterPass::KnownLetters, eliminated, store)
}

/// For every position holding an uppercase letter, keep only words with that
/// letter (lowercased) at the position. A word too short to have the position
/// is removed.
pub fn require_positions(store: &mut CandidateStore, known: &str) -> FilterReport {
    let mut eliminated = 0;
    for (index, hint) in known.chars().enumerate() {
        if hint == UNKNOWN || hint.is_lowercase() {
            continue;
        }
        let Some(expected) = hint.to_lowercase().next() else {
            continue;
        };
        eliminated += store.filter(|word| letter_at(word, index) == Some(expected));
    }
    FilterReport::new(FilterPass::CorrectPosition, eliminated, store)
}

/// For every position holding a lowercase letter, remove words with that
/// letter at the position. A word too short to have the position is kept.
pub fn exclude_positions(store: &mut CandidateStore, known: &str) -> FilterReport {
    let mut eliminated = 0;
    for (index, hint) in known.chars().enumerate() {
        if hint == UNKNOWN || hint.is_uppercase() {
            continue;
        }
        eliminated += store.filter(|word| letter_at(word, index) != Some(hint));
    }
    FilterReport::new(FilterPass::WrongPosition, eliminated, store)
}

/// Run all four passes in order and return their reports.
pub fn apply(store: &mut CandidateStore, eliminated: &str, known: &str) -> [FilterReport; 4] {
    [
        eliminate_letters(store, eliminated),
        require_letters(store, known),
        require_positions(store, known),
        exclude_positions(store, known),
    ]
}
