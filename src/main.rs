//! Terminal front end for word-scramble.
//!
//! Shows the root word and accepted answers, reads one answer per line.
//! `:new` starts a new round, `:quit` or end of input exits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use word_scramble::{
    Round, RoundRng, RoundRules, RootWordPool, SubmitResult, WordList, DEFAULT_LANGUAGE,
};

#[derive(Parser, Debug)]
#[command(name = "word-scramble", about = "Make words from the letters of a root word")]
struct Args {
    /// Newline-delimited list of root words.
    #[arg(long, default_value = "start.txt")]
    words: PathBuf,

    /// Newline-delimited dictionary of valid words.
    #[arg(long, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,

    /// Dictionary language tag.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// RNG seed; random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Reject answers shorter than this many letters.
    #[arg(long, default_value_t = 0)]
    min_length: usize,

    /// Reject the root word itself as an answer.
    #[arg(long)]
    no_root_word: bool,
}

impl Args {
    fn rules(&self) -> RoundRules {
        let rules = RoundRules::new()
            .with_language(self.language.clone())
            .with_min_word_length(self.min_length);
        if self.no_root_word {
            rules.reject_root_word()
        } else {
            rules
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let pool = RootWordPool::load(&args.words);
    let dictionary = WordList::from_path(args.language.clone(), &args.dictionary)
        .with_context(|| format!("loading dictionary {}", args.dictionary.display()))?;

    let mut rng = match args.seed {
        Some(seed) => RoundRng::new(seed),
        None => RoundRng::from_entropy(),
    };
    info!(seed = rng.seed(), "session started");

    let rules = args.rules();
    if !rules.is_permissive() {
        info!(
            min_word_length = rules.min_word_length,
            allow_root_word = rules.allow_root_word,
            "strict rules enabled"
        );
    }

    let mut round = Round::start(&pool, &mut rng, rules);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    render(&mut stdout, &round)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading answer")?;
        let answer = line.trim();

        match answer {
            "" => {}
            ":quit" | ":q" => break,
            ":new" => round.start_game(&pool, &mut rng),
            _ => {
                if let SubmitResult::Rejected(rejection) = round.submit(answer, &dictionary) {
                    writeln!(stdout, "\n{}\n{}", rejection.title(), rejection.message())?;
                }
            }
        }

        render(&mut stdout, &round)?;
    }

    Ok(())
}

fn render(out: &mut impl Write, round: &Round) -> io::Result<()> {
    writeln!(out, "\n== {} ==", round.root_word())?;
    for word in round.used_words() {
        writeln!(out, "  {word}")?;
    }
    write!(out, "answer> ")?;
    out.flush()
}
