/// The working set of candidate words for one session.
///
/// Words keep their corpus order. Every filter pass replaces the set with the
/// words that survive it, so the store only ever shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateStore {
    words: Vec<String>,
}

impl CandidateStore {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Keep only the words satisfying `keep`. Returns how many were removed.
    pub fn filter<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let before = self.words.len();
        self.words.retain(|word| keep(word));
        before - self.words.len()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn snapshot(&self) -> &[String] {
        &self.words
    }
}
