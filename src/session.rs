use crate::engine::{self, FilterReport};
use crate::info_log;
use crate::ranker::{self, Suggestion};
use crate::store::CandidateStore;

/// Remaining candidates are listed in full once there are at most this many.
pub const SOLUTION_LIST_LIMIT: usize = 10;

/// Everything a driver needs to report after one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub filters: [FilterReport; 4],
    pub remaining: usize,
    pub suggestion: Suggestion,
    /// All remaining candidates, present only when there are few enough.
    pub solutions: Option<Vec<String>>,
}

/// One game: a candidate store narrowed round by round.
#[derive(Debug, Clone)]
pub struct Session {
    store: CandidateStore,
}

impl Session {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            store: CandidateStore::new(words),
        }
    }

    #[must_use]
    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.store.size()
    }

    /// Apply one round of feedback and rank what is left.
    pub fn play_round(&mut self, eliminated: &str, known: &str) -> RoundReport {
        info_log!(
            "play_round() - eliminated: '{}', known: '{}', candidates: {}",
            eliminated,
            known,
            self.store.size()
        );
        let filters = engine::apply(&mut self.store, eliminated, known);
        let words = self.store.snapshot();
        let suggestion = ranker::suggest(words, known);
        let solutions = (words.len() <= SOLUTION_LIST_LIMIT).then(|| words.to_vec());
        info_log!(
            "play_round() - {} remaining, suggestion: {:?}",
            words.len(),
            suggestion.best
        );

        RoundReport {
            filters,
            remaining: words.len(),
            suggestion,
            solutions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(words: &[&str]) -> Session {
        Session::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_round_lists_solutions_when_few_remain() {
        let mut s = session(&["apple", "mango", "grape"]);
        let report = s.play_round("m", "*****");
        assert_eq!(report.remaining, 2);
        assert_eq!(
            report.solutions,
            Some(vec!["apple".to_string(), "grape".to_string()])
        );
        assert_eq!(report.suggestion.best.as_deref(), Some("grape"));
    }

    #[test]
    fn test_round_hides_solutions_when_many_remain() {
        let words: Vec<String> = (b'a'..=b'l')
            .map(|c| String::from_utf8(vec![c; 5]).unwrap())
            .collect();
        let mut s = Session::new(words);
        let report = s.play_round("", "*****");
        assert_eq!(report.remaining, 12);
        assert!(report.solutions.is_none());
    }

    #[test]
    fn test_store_persists_between_rounds() {
        let mut s = session(&["apple", "mango", "grape", "lemon"]);
        s.play_round("m", "*****");
        assert_eq!(s.remaining(), 2);
        let report = s.play_round("", "*PP**");
        assert_eq!(report.remaining, 1);
        assert_eq!(s.store().snapshot(), ["apple"]);
    }

    #[test]
    fn test_over_constrained_round() {
        let mut s = session(&["apple", "grape"]);
        let report = s.play_round("ae", "*****");
        assert_eq!(report.remaining, 0);
        assert_eq!(report.suggestion, Suggestion::default());
        assert_eq!(report.solutions, Some(Vec::new()));
    }

    #[test]
    fn test_sessions_are_independent() {
        let words = vec!["apple".to_string(), "grape".to_string()];
        let mut first = Session::new(words.clone());
        let second = Session::new(words);
        first.play_round("g", "*****");
        assert_eq!(first.remaining(), 1);
        assert_eq!(second.remaining(), 2);
    }
}
