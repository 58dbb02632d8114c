// Library interface for wordle-narrower
// This allows integration tests to access internal modules

pub mod cli;
pub mod engine;
pub mod game_state;
pub mod logging;
pub mod ranker;
pub mod session;
pub mod store;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{FilterPass, FilterReport, apply};
pub use game_state::{GameConfig, GameInterface, UserInput, game_loop};
pub use ranker::{Suggestion, suggest};
pub use session::{RoundReport, Session};
pub use store::CandidateStore;
pub use wordbank::{load_wordbank, load_wordbank_from_file, load_wordbank_from_str};
