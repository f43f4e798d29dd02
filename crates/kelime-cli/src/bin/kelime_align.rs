// kelime-align: Show how each input word aligns with its matches.
//
// For every vocabulary word within the penalty budget, prints the penalty,
// the matched trie path and the edit operations of the best alignment.
//
// Usage:
//   kelime-align [-d VOCABULARY] [OPTIONS] [WORD...]

use std::io::{self, Write};

use clap::Parser;

use kelime_cli::CommonArgs;
use kelime_trie::{Decoder, Operation};
use kelime_tr::ASCII_TOLERANT_MATCHER;

/// Print edit alignments between input words and vocabulary matches
#[derive(Parser, Debug)]
#[command(name = "kelime-align")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct AlignArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Words to align; read from stdin when omitted
    words: Vec<String>,
}

fn format_operations(ops: &[Operation]) -> String {
    ops.iter().map(|op| op.tag()).collect::<Vec<_>>().join(" ")
}

fn main() {
    let args = AlignArgs::parse();
    kelime_cli::init_logging(args.common.verbosity());

    let speller =
        kelime_cli::load_speller(&args.common).unwrap_or_else(|e| kelime_cli::fatal(&e));
    let decoder = if args.common.ascii_tolerant {
        Decoder::with_matcher(speller.trie(), speller.config(), &ASCII_TOLERANT_MATCHER)
    } else {
        Decoder::new(speller.trie(), speller.config())
    }
    .unwrap_or_else(|e| kelime_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    kelime_cli::for_each_input(&args.words, |word| {
        let alignments = decoder.decode_alignments(word);
        if alignments.is_empty() {
            let _ = writeln!(out, "{word}: (no matches)");
            return;
        }
        let _ = writeln!(out, "{word}:");
        for a in &alignments {
            let _ = writeln!(
                out,
                "  {} ({:.2})  path={}  ops=[{}]",
                a.word,
                a.penalty,
                a.path,
                format_operations(&a.operations)
            );
        }
    });
}
