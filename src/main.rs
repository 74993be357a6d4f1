//! Wordle - CLI
//!
//! Play Wordle in the terminal, either as a full-screen TUI or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use wordle_game::{
    commands::{run_simple, score_word},
    game::{AnimationTimings, GameConfig, GameSession},
    output::score_line,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Accept any five letters as a guess
    #[arg(long, global = true)]
    no_dictionary_check: bool,

    /// Hide the keyboard heat-map
    #[arg(long, global = true)]
    no_keyboard: bool,

    /// Resolve reveal animations immediately
    #[arg(long, global = true)]
    no_animations: bool,

    /// Reveal the target word (logged and shown on screen)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score one guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            dictionary_check: !self.no_dictionary_check,
            keyboard_enabled: !self.no_keyboard,
            reveal_target: self.debug,
            timings: if self.no_animations {
                AnimationTimings::instant()
            } else {
                AnimationTimings::default()
            },
        }
    }
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "all" => Dictionary::embedded().context("embedded word list is unusable"),
        path => Dictionary::from_file(path)
            .with_context(|| format!("cannot use word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // Log lines would tear the full-screen UI, so only raise the level for line modes
    let default_filter = if cli.debug && !matches!(command, Commands::Play) {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_target(false)
        .init();

    let dictionary = load_dictionary(&cli.wordlist)?;
    log::debug!("loaded {} words", dictionary.len());

    match command {
        Commands::Play => run_play_command(&dictionary, cli.game_config()),
        Commands::Simple => run_simple_command(&dictionary, cli.game_config()),
        Commands::Score { guess, target } => run_score_command(&guess, &target, &dictionary),
    }
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(GameSession::new(dictionary, config));
    run_tui(app)
}

fn run_simple_command(dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    let mut session = GameSession::new(dictionary, config);
    run_simple(&mut session, io::stdin().lock(), io::stdout())
}

fn run_score_command(guess: &str, target: &str, dictionary: &Dictionary) -> Result<()> {
    let result = score_word(guess, target, dictionary)?;

    println!("{}", score_line(&result.guess, &result.score));
    if !result.in_dictionary {
        println!(
            "{}",
            format!("note: {} is not in the dictionary", result.guess).yellow()
        );
    }
    if result.score.is_perfect() {
        println!("{}", "Solved!".green().bold());
    }
    Ok(())
}
