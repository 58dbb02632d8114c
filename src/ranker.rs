use crate::engine::known_letters;
use std::cmp::Ordering;
use std::collections::HashSet;

pub const MAX_ALTERNATIVES: usize = 10;

/// A suggested next guess and the words that tied with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestion {
    pub best: Option<String>,
    pub alternatives: Vec<String>,
}

/// Number of distinct letters in `word` that are not in `skip`.
#[must_use]
pub fn new_letter_count(word: &str, skip: &HashSet<char>) -> usize {
    word.chars()
        .filter(|c| !skip.contains(c))
        .collect::<HashSet<char>>()
        .len()
}

/// Pick the candidate revealing the most letters not already named in
/// `known`.
///
/// The first word (in store order) reaching the highest count wins; later
/// words with the same count become alternatives, capped at
/// [`MAX_ALTERNATIVES`].
#[must_use]
pub fn suggest(words: &[String], known: &str) -> Suggestion {
    let skip: HashSet<char> = known_letters(known).chars().collect();

    let mut best: Option<(&String, usize)> = None;
    let mut alternatives: Vec<String> = Vec::new();

    for word in words {
        let count = new_letter_count(word, &skip);
        match best.map(|(_, most)| count.cmp(&most)) {
            Some(Ordering::Less) => {}
            Some(Ordering::Equal) => alternatives.push(word.clone()),
            Some(Ordering::Greater) | None => {
                best = Some((word, count));
                alternatives.clear();
            }
        }
    }

    alternatives.truncate(MAX_ALTERNATIVES);
    Suggestion {
        best: best.map(|(word, _)| word.clone()),
        alternatives,
    }
}
