use crate::engine::UNKNOWN;
use crate::info_log;
use crate::session::{RoundReport, Session};

pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_GUESSES: usize = 6;
pub const DEFAULT_START_WORD: &str = "adieu";

/// Driver settings that stay fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    pub start_word: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
            start_word: DEFAULT_START_WORD.to_string(),
        }
    }
}

/// What the player typed at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Value(String),
    NewGame,
    Exit,
}

/// Shown once at startup.
#[derive(Debug, Clone)]
pub struct WelcomeInfo {
    pub start_word: String,
    pub word_count: usize,
    pub word_length: usize,
}

/// A front end for [`game_loop`].
///
/// The read methods return `None` for input that was rejected; the loop then
/// asks again for the same field.
pub trait GameInterface {
    fn display_welcome(&mut self, info: &WelcomeInfo);
    fn read_eliminated(&mut self) -> Option<UserInput>;
    fn read_known(&mut self, word_length: usize) -> Option<UserInput>;
    fn display_round(&mut self, report: &RoundReport, guesses_remaining: usize);
    fn display_new_game_message(&mut self, word_count: usize);
    fn display_exit_message(&mut self);
}

#[must_use]
pub fn is_valid_eliminated(letters: &str) -> bool {
    letters.chars().all(|c| c.is_ascii_alphabetic())
}

/// An empty line means no positional information.
#[must_use]
pub fn is_valid_known(known: &str, word_length: usize) -> bool {
    known.is_empty()
        || (known.chars().count() == word_length
            && known.chars().all(|c| c == UNKNOWN || c.is_ascii_alphabetic()))
}

/// The countdown shown after `rounds` rounds of feedback. The opening guess
/// counts as the first of `max_guesses`.
#[must_use]
pub fn guesses_remaining(max_guesses: usize, rounds: usize) -> usize {
    max_guesses.saturating_sub(rounds + 1)
}

enum Step {
    Value(String),
    NewGame,
    Exit,
}

fn read_until_valid<F>(mut read: F) -> Step
where
    F: FnMut() -> Option<UserInput>,
{
    loop {
        match read() {
            Some(UserInput::Value(value)) => return Step::Value(value),
            Some(UserInput::NewGame) => return Step::NewGame,
            Some(UserInput::Exit) => return Step::Exit,
            None => {}
        }
    }
}

pub fn game_loop<I: GameInterface>(
    initial_wordbank: &[String],
    config: &GameConfig,
    interface: &mut I,
) {
    interface.display_welcome(&WelcomeInfo {
        start_word: config.start_word.clone(),
        word_count: initial_wordbank.len(),
        word_length: config.word_length,
    });

    let mut session = Session::new(initial_wordbank.to_vec());
    let mut rounds = 0;

    loop {
        let eliminated = match read_until_valid(|| interface.read_eliminated()) {
            Step::Value(v) => v,
            Step::NewGame => {
                session = new_game(initial_wordbank, interface, &mut rounds);
                continue;
            }
            Step::Exit => break,
        };

        let known = match read_until_valid(|| interface.read_known(config.word_length)) {
            Step::Value(v) => v,
            Step::NewGame => {
                session = new_game(initial_wordbank, interface, &mut rounds);
                continue;
            }
            Step::Exit => break,
        };

        let report = session.play_round(&eliminated, &known);
        rounds += 1;
        interface.display_round(&report, guesses_remaining(config.max_guesses, rounds));
    }

    info_log!("game_loop() - exiting after {} rounds", rounds);
    interface.display_exit_message();
}

fn new_game<I: GameInterface>(
    initial_wordbank: &[String],
    interface: &mut I,
    rounds: &mut usize,
) -> Session {
    info_log!("new_game() - resetting {} words", initial_wordbank.len());
    *rounds = 0;
    interface.display_new_game_message(initial_wordbank.len());
    Session::new(initial_wordbank.to_vec())
}
