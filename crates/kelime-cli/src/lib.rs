// kelime-cli: shared utilities for CLI tools.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use env_logger::Builder;
use log::LevelFilter;

use kelime_trie::config::DEFAULT_MAX_PENALTY;
use kelime_tr::{KeyboardLayout, SpellChecker};

/// Vocabulary file name looked up in the default locations.
const VOCABULARY_FILE: &str = "vocabulary.txt";

/// Environment variable naming a vocabulary file.
const VOCABULARY_ENV: &str = "KELIME_VOCABULARY";

/// Options shared by every kelime tool.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Vocabulary file, one word per line
    #[arg(short = 'd', long, value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,

    /// Largest total edit penalty a suggestion may have
    #[arg(short = 'p', long, default_value_t = DEFAULT_MAX_PENALTY)]
    pub max_penalty: f32,

    /// Discount substitutions between neighboring keys (f or q)
    #[arg(short, long, value_name = "LAYOUT")]
    pub keyboard: Option<KeyboardLayout>,

    /// Let ASCII letters match their Turkish counterparts (c/ç, g/ğ, ...)
    #[arg(short, long)]
    pub ascii_tolerant: bool,

    /// Verbosity level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommonArgs {
    /// Effective verbosity: 0 quiet, 1 normal, 2+ verbose.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Install the `env_logger` backend at a level derived from `verbosity`.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

// ---------------------------------------------------------------------------
// Vocabulary loading
// ---------------------------------------------------------------------------

/// Find the vocabulary file and build a spell checker from `args`.
///
/// Search order:
/// 1. `--vocabulary` argument (if provided)
/// 2. `KELIME_VOCABULARY` environment variable
/// 3. `~/.kelime/vocabulary.txt`
/// 4. `vocabulary.txt` in the current directory
pub fn load_speller(args: &CommonArgs) -> Result<SpellChecker, String> {
    let path = find_vocabulary(args.vocabulary.as_deref())?;
    let words = read_vocabulary(&path)?;
    log::info!("loaded {} words from {}", words.len(), path.display());

    let mut speller = match args.keyboard {
        Some(layout) => SpellChecker::with_near_keys(args.max_penalty, layout.near_keys()),
        None => SpellChecker::new(args.max_penalty),
    }
    .map_err(|e| e.to_string())?;
    speller.build_dictionary(&words);
    Ok(speller)
}

/// Return the first existing vocabulary file among the search paths.
pub fn find_vocabulary(explicit: Option<&Path>) -> Result<PathBuf, String> {
    let search_paths = build_search_paths(explicit);
    if let Some(found) = search_paths.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }
    Err(format!(
        "could not find a vocabulary file in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate vocabulary files.
fn build_search_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = explicit {
        paths.push(p.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(VOCABULARY_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".kelime").join(VOCABULARY_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(VOCABULARY_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Read a vocabulary file.
pub fn read_vocabulary(path: &Path) -> Result<Vec<String>, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Ok(parse_vocabulary(&contents))
}

/// One word per line; surrounding whitespace is trimmed, blank lines and
/// lines starting with `#` are skipped.
pub fn parse_vocabulary(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Call `f` for each word in `words`, or for each non-empty stdin line if
/// `words` is empty.
pub fn for_each_input<F>(words: &[String], mut f: F)
where
    F: FnMut(&str),
{
    if !words.is_empty() {
        for word in words {
            f(word);
        }
        return;
    }
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if !word.is_empty() {
            f(word);
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn vocabulary_skips_comments_and_blanks() {
        let text = "# header\nkitap\n\n  kapı  \n#kalem\nkitap lık\n";
        assert_eq!(parse_vocabulary(text), ["kitap", "kapı", "kitap lık"]);
    }

    #[test]
    fn explicit_path_is_searched_first() {
        let paths = build_search_paths(Some(Path::new("/tmp/words.txt")));
        assert_eq!(paths[0], PathBuf::from("/tmp/words.txt"));
        assert!(paths.len() >= 2);
    }

    #[test]
    fn defaults() {
        let cli = TestCli::try_parse_from(["kelime"]).unwrap();
        assert_eq!(cli.common.max_penalty, 1.0);
        assert_eq!(cli.common.keyboard, None);
        assert!(!cli.common.ascii_tolerant);
        assert_eq!(cli.common.verbosity(), 1);
    }

    #[test]
    fn parses_options() {
        let cli = TestCli::try_parse_from([
            "kelime",
            "--vocabulary",
            "words.txt",
            "--max-penalty",
            "2",
            "--keyboard",
            "f",
            "--ascii-tolerant",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.common.vocabulary, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.common.max_penalty, 2.0);
        assert_eq!(cli.common.keyboard, Some(KeyboardLayout::TurkishF));
        assert!(cli.common.ascii_tolerant);
        assert_eq!(cli.common.verbosity(), 3);
    }

    #[test]
    fn quiet_overrides_verbose() {
        let cli = TestCli::try_parse_from(["kelime", "-v", "-q"]).unwrap();
        assert_eq!(cli.common.verbosity(), 0);
    }

    #[test]
    fn unknown_layout_is_a_usage_error() {
        assert!(TestCli::try_parse_from(["kelime", "--keyboard", "dvorak"]).is_err());
    }

    #[test]
    fn speller_from_explicit_file() {
        let dir = std::env::temp_dir().join(format!("kelime-cli-test-{}", process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("words.txt");
        std::fs::write(&path, "kitap\nKAPI\n").unwrap();

        let cli = TestCli::try_parse_from(["kelime", "--vocabulary", path.to_str().unwrap()])
            .unwrap();
        assert_eq!(find_vocabulary(Some(path.as_path())), Ok(path.clone()));
        let speller = load_speller(&cli.common).unwrap();
        assert_eq!(speller.trie().word_count(), 2);
        assert_eq!(speller.decode("kapi").unwrap().get("kapı"), Some(1.0));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
