// kelime-suggest: Suggest vocabulary words for possibly misspelled input.
//
// Reads words from the command line, or from stdin (one per line) when none
// are given, and prints the vocabulary words within the penalty budget,
// best first.
//
// Usage:
//   kelime-suggest [-d VOCABULARY] [OPTIONS] [WORD...]

use std::io::{self, Write};

use clap::Parser;

use kelime_cli::CommonArgs;
use kelime_tr::ASCII_TOLERANT_MATCHER;

/// Suggest corrections from a vocabulary
#[derive(Parser, Debug)]
#[command(name = "kelime-suggest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct SuggestArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Maximum number of suggestions per word (0 = unlimited)
    #[arg(short = 'n', long, default_value_t = 5)]
    limit: usize,

    /// Words to check; read from stdin when omitted
    words: Vec<String>,
}

fn main() {
    let args = SuggestArgs::parse();
    kelime_cli::init_logging(args.common.verbosity());

    let speller =
        kelime_cli::load_speller(&args.common).unwrap_or_else(|e| kelime_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    kelime_cli::for_each_input(&args.words, |word| {
        let ranked = if args.common.ascii_tolerant {
            speller.get_suggestions_with_scores_using(word, &ASCII_TOLERANT_MATCHER)
        } else {
            speller.get_suggestions_with_scores(word)
        }
        .unwrap_or_else(|e| kelime_cli::fatal(&e.to_string()));

        if ranked.first().is_some_and(|s| s.word == word && s.penalty == 0.0) {
            let _ = writeln!(out, "{word} (correct)");
            return;
        }
        if ranked.is_empty() {
            let _ = writeln!(out, "{word}: (no suggestions)");
            return;
        }
        let limit = if args.limit == 0 { ranked.len() } else { args.limit };
        let _ = writeln!(out, "{word}:");
        for s in ranked.iter().take(limit) {
            let _ = writeln!(out, "  {s}");
        }
    });
}
