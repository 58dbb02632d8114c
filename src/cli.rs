use crate::game_state::{
    DEFAULT_MAX_GUESSES, DEFAULT_START_WORD, DEFAULT_WORD_LENGTH, GameInterface, UserInput,
    WelcomeInfo, is_valid_eliminated, is_valid_known,
};
use crate::session::RoundReport;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Narrow a word list from Wordle feedback and suggest the next guess
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Number of letters per word
    #[arg(short = 'l', long = "length", default_value_t = DEFAULT_WORD_LENGTH)]
    pub word_length: usize,

    /// Guesses allowed per game, used for the countdown only
    #[arg(short = 'g', long = "max-guesses", default_value_t = DEFAULT_MAX_GUESSES)]
    pub max_guesses: usize,

    /// Opening word to suggest before any feedback
    #[arg(short = 's', long = "start", default_value = DEFAULT_START_WORD)]
    pub start_word: String,

    /// Use the terminal UI instead of line prompts
    #[arg(long)]
    pub tui: bool,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[must_use]
pub fn instructions(word_length: usize) -> [String; 5] {
    [
        "New eliminated letters can be entered as a single string i.e. adie".to_string(),
        format!(
            "Known letters should be entered in sets of {word_length}, with asterisks denoting unknown characters"
        ),
        "If you know the location of a character is correct, enter it uppercase".to_string(),
        "If you know the location of a character is incorrect, enter it lowercase".to_string(),
        "Example, for the word Humor, *Uo** would indicate the letters U and O are known, that U must be in second position, and that O is in the string but NOT in third position".to_string(),
    ]
}

/// Render a word list the way the prompts show it: `[apple grape]`.
#[must_use]
pub fn format_word_list(words: &[String]) -> String {
    format!("[{}]", words.join(" "))
}

/// The lines printed after a round, in display order.
#[must_use]
pub fn round_lines(report: &RoundReport, guesses_remaining: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for filter in &report.filters {
        lines.push(format!("=== {} ===", filter.pass));
        lines.push(format!(
            "Eliminated: {} Remaining: {}",
            filter.eliminated, filter.remaining
        ));
    }
    lines.push(format!(
        "Suggested Guess: {}",
        report.suggestion.best.as_deref().unwrap_or("")
    ));
    lines.push(format!(
        "Alternatives: {}",
        format_word_list(&report.suggestion.alternatives)
    ));
    lines.push(format!("Guesses Remaining: {guesses_remaining}"));
    if let Some(solutions) = &report.solutions {
        lines.push(format!("Possible Solutions: {}", format_word_list(solutions)));
    }
    lines
}

// UI Input/Output functions

pub fn display_welcome(info: &WelcomeInfo) {
    println!("Suggested Start: {}", info.start_word);
    println!("Loaded {} words", info.word_count);
    for line in instructions(info.word_length) {
        println!("{line}");
    }
    println!("Enter 'exit' to quit or 'next' to start a new game at either prompt");
}

fn read_input<R: BufRead>(reader: &mut R) -> UserInput {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => return UserInput::Exit,
        Ok(_) => {}
        Err(e) => {
            log::warn!("Failed to read input: {e}");
            return UserInput::Exit;
        }
    }
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "exit" => UserInput::Exit,
        "next" => UserInput::NewGame,
        _ => UserInput::Value(input.to_string()),
    }
}

pub fn read_eliminated<R: BufRead>(reader: &mut R) -> Option<UserInput> {
    println!("Enter new eliminated letters");
    match read_input(reader) {
        UserInput::Value(letters) if !is_valid_eliminated(&letters) => {
            println!("Invalid letters. Please enter letters only, e.g. adie.");
            None
        }
        input => Some(input),
    }
}

pub fn read_known<R: BufRead>(reader: &mut R, word_length: usize) -> Option<UserInput> {
    println!("Enter known letters");
    match read_input(reader) {
        UserInput::Value(known) if !is_valid_known(&known, word_length) => {
            println!(
                "Invalid known letters. Please enter {word_length} characters using letters or *."
            );
            None
        }
        input => Some(input),
    }
}

pub fn display_round(report: &RoundReport, guesses_remaining: usize) {
    for line in round_lines(report, guesses_remaining) {
        println!("{line}");
    }
}

pub fn display_exit_message() {
    println!("Exiting.");
}

pub fn display_new_game_message(word_count: usize) {
    println!("New game started. Loaded {word_count} words.");
}

/// CLI implementation of the `GameInterface` trait
/// This struct wraps a `BufRead` reader and prompts on stdout
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_welcome(&mut self, info: &WelcomeInfo) {
        display_welcome(info);
    }

    fn read_eliminated(&mut self) -> Option<UserInput> {
        read_eliminated(&mut self.reader)
    }

    fn read_known(&mut self, word_length: usize) -> Option<UserInput> {
        read_known(&mut self.reader, word_length)
    }

    fn display_round(&mut self, report: &RoundReport, guesses_remaining: usize) {
        display_round(report, guesses_remaining);
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        display_new_game_message(word_count);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::parse_from(["wordle-narrower"]);
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.word_length, 5);
        assert_eq!(cli.max_guesses, 6);
        assert_eq!(cli.start_word, "adieu");
        assert!(!cli.tui);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::parse_from([
            "wordle-narrower",
            "-i",
            "custom.txt",
            "--length",
            "6",
            "-g",
            "8",
            "--start",
            "crane",
            "--tui",
            "--log-file",
            "out.log",
        ]);
        assert_eq!(cli.wordbank_path, Some(PathBuf::from("custom.txt")));
        assert_eq!(cli.word_length, 6);
        assert_eq!(cli.max_guesses, 8);
        assert_eq!(cli.start_word, "crane");
        assert!(cli.tui);
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
    }

    #[test]
    fn test_read_eliminated_valid() {
        let mut reader = Cursor::new("  adie \n");
        assert_eq!(
            read_eliminated(&mut reader),
            Some(UserInput::Value("adie".to_string()))
        );
    }

    #[test]
    fn test_read_eliminated_empty_line() {
        let mut reader = Cursor::new("\n");
        assert_eq!(
            read_eliminated(&mut reader),
            Some(UserInput::Value(String::new()))
        );
    }

    #[test]
    fn test_read_eliminated_keeps_case() {
        let mut reader = Cursor::new("AdIe\n");
        assert_eq!(
            read_eliminated(&mut reader),
            Some(UserInput::Value("AdIe".to_string()))
        );
    }

    #[test]
    fn test_read_eliminated_invalid() {
        let mut reader = Cursor::new("a d\n");
        assert_eq!(read_eliminated(&mut reader), None);
    }

    #[test]
    fn test_read_commands() {
        let mut reader = Cursor::new("EXIT\nnext\n");
        assert_eq!(read_eliminated(&mut reader), Some(UserInput::Exit));
        assert_eq!(read_known(&mut reader, 5), Some(UserInput::NewGame));
    }

    #[test]
    fn test_read_eof_is_exit() {
        let mut reader = Cursor::new("");
        assert_eq!(read_eliminated(&mut reader), Some(UserInput::Exit));
    }

    #[test]
    fn test_read_known_valid() {
        let mut reader = Cursor::new("*Uo**\n");
        assert_eq!(
            read_known(&mut reader, 5),
            Some(UserInput::Value("*Uo**".to_string()))
        );
    }

    #[test]
    fn test_read_known_wrong_length() {
        let mut reader = Cursor::new("*Uo*\n");
        assert_eq!(read_known(&mut reader, 5), None);
    }

    #[test]
    fn test_instructions_mention_length() {
        assert!(instructions(6)[1].contains("sets of 6"));
    }

    #[test]
    fn test_format_word_list() {
        assert_eq!(format_word_list(&[]), "[]");
        assert_eq!(
            format_word_list(&["apple".to_string(), "grape".to_string()]),
            "[apple grape]"
        );
    }

    #[test]
    fn test_round_lines() {
        let mut session = Session::new(vec![
            "apple".to_string(),
            "mango".to_string(),
            "grape".to_string(),
        ]);
        let report = session.play_round("m", "*****");
        let lines = round_lines(&report, 4);
        assert_eq!(
            lines[0],
            "=== Filtering out words that contain eliminated letters ==="
        );
        assert_eq!(lines[1], "Eliminated: 1 Remaining: 2");
        assert_eq!(lines[8], "Suggested Guess: grape");
        assert_eq!(lines[9], "Alternatives: []");
        assert_eq!(lines[10], "Guesses Remaining: 4");
        assert_eq!(lines[11], "Possible Solutions: [apple grape]");
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn test_round_lines_empty_store() {
        let mut session = Session::new(vec!["apple".to_string()]);
        let report = session.play_round("a", "*****");
        let lines = round_lines(&report, 4);
        assert!(lines.contains(&"Suggested Guess: ".to_string()));
        assert!(lines.contains(&"Possible Solutions: []".to_string()));
    }
}
