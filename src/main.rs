use std::io;
use std::process::ExitCode;
use wordle_narrower::cli::{CliInterface, parse_cli};
use wordle_narrower::game_state::{GameConfig, game_loop};
use wordle_narrower::tui::TuiInterface;
use wordle_narrower::{logging, wordbank};

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| if cli.tui { logging::default_log_path() } else { None });
    if let Err(e) = logging::init(log_file.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
    }

    let words = match wordbank::load_wordbank(cli.wordbank_path.as_deref(), cli.word_length) {
        Ok(words) => words,
        Err(e) => {
            let source = cli
                .wordbank_path
                .as_ref()
                .map_or_else(|| wordbank::LOCAL_WORDBANK.into(), |p| p.display().to_string());
            eprintln!("Failed to load word list from '{source}': {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {} words of length {}", words.len(), cli.word_length);

    let config = GameConfig {
        word_length: cli.word_length,
        max_guesses: cli.max_guesses,
        start_word: cli.start_word,
    };

    if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start the terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&words, &config, &mut interface);
    } else {
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&words, &config, &mut interface);
    }
    ExitCode::SUCCESS
}
