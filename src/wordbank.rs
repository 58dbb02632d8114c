use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

pub const LOCAL_WORDBANK: &str = "words.txt";
pub const APP_DIR: &str = "wordle-narrower";

fn normalize(line: &str, length: usize) -> Option<String> {
    let word = line.trim().to_lowercase();
    (word.len() == length && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
}

pub fn load_wordbank_from_str(data: &str, length: usize) -> Vec<String> {
    data.lines()
        .filter_map(|line| normalize(line, length))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?, length) {
            words.push(word);
        }
    }
    Ok(words)
}

/// `<data dir>/wordle-narrower/words.txt`, if the platform has a data dir.
#[must_use]
pub fn get_user_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(LOCAL_WORDBANK))
}

/// Where to read the word list from: the explicit path if given, otherwise
/// `words.txt` in the working directory, otherwise the user data dir copy.
/// `None` means the embedded list should be used.
#[must_use]
pub fn resolve_wordbank_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = PathBuf::from(LOCAL_WORDBANK);
    if local.is_file() {
        return Some(local);
    }
    get_user_wordbank_path().filter(|path| path.is_file())
}

/// Load the word list for a session of `length`-letter words.
pub fn load_wordbank(explicit: Option<&Path>, length: usize) -> io::Result<Vec<String>> {
    match resolve_wordbank_path(explicit) {
        Some(path) => {
            log::info!("Loading word list from {}", path.display());
            load_wordbank_from_file(&path, length)
        }
        None => {
            log::info!("Using embedded word list");
            Ok(load_wordbank_from_str(EMBEDDED_WORDBANK, length))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_str_filters_length_and_case() {
        let words = load_wordbank_from_str("Apple\nfig\n  grape \nbanana\nmang0\n\nLEMON", 5);
        assert_eq!(words, ["apple", "grape", "lemon"]);
    }

    #[test]
    fn test_load_from_str_other_length() {
        let words = load_wordbank_from_str("fig\nkiwi\npear\nplum\napple", 4);
        assert_eq!(words, ["kiwi", "pear", "plum"]);
    }

    #[test]
    fn test_load_from_str_keeps_order_and_duplicates() {
        let words = load_wordbank_from_str("melon\nlemon\nmelon", 5);
        assert_eq!(words, ["melon", "lemon", "melon"]);
    }

    #[test]
    fn test_embedded_wordbank() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK, 5);
        assert!(words.len() > 100);
        assert!(words.contains(&"adieu".to_string()));
        assert!(words.iter().all(|w| w.len() == 5));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("wordle_narrower_wordbank_test.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "apple").unwrap();
            writeln!(file, "kiwi").unwrap();
            writeln!(file, "Peach").unwrap();
        }
        let words = load_wordbank_from_file(&path, 5).unwrap();
        assert_eq!(words, ["apple", "peach"]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = load_wordbank_from_file("/nonexistent/wordle/words.txt", 5);
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = Path::new("/some/list.txt");
        assert_eq!(resolve_wordbank_path(Some(explicit)), Some(explicit.to_path_buf()));
    }

    #[test]
    fn test_load_wordbank_explicit_missing_is_error() {
        let result = load_wordbank(Some(Path::new("/nonexistent/wordle/words.txt")), 5);
        assert!(result.is_err());
    }
}
