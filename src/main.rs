//! Wordle solver - CLI
//!
//! Interactive solver by default, plus commands to solve one word, run the
//! solver against the whole dictionary and inspect clues and guesses.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;
use std::io;
use std::path::PathBuf;
use wordle_sweep::{
    commands::{
        PlayEnd, analyze_word, feedback, print_test_all_statistics, run_play, run_test_all,
        select_secrets, solve_word,
    },
    config::{Backend, DEFAULT_OPENING, SolverConfig},
    core::Word,
    output::{ConsoleReporter, print_analysis_result, print_feedback, print_solve_result},
    solver::{ScoringPolicy, Solver},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_sweep",
    about = "Wordle solver sweeping every dictionary word with minimax or entropy scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Scoring policy: minimax (default) or entropy
    #[arg(short, long, global = true, default_value = "minimax")]
    policy: String,

    /// Sweep backend: pool (default) or rayon
    #[arg(short, long, global = true, default_value = "pool")]
    backend: String,

    /// Number of sweep workers (default: available parallelism)
    #[arg(short, long, global = true)]
    workers: Option<usize>,

    /// Opening word played without sweeping
    #[arg(short, long, global = true, default_value = DEFAULT_OPENING)]
    opening: String,

    /// Compute the opening word instead of using a fixed one
    #[arg(long, global = true)]
    no_opening: bool,

    /// Probe budget per game
    #[arg(long, global = true)]
    max_probes: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver: enter the clue for each guess (default)
    Play,

    /// Solve a specific secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show candidate counts for each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Test the solver against every dictionary word
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Test a random sample instead of dictionary order
        #[arg(short, long)]
        random: bool,
    },

    /// Print the clue a guess earns against a secret
    Feedback {
        /// The secret word
        secret: String,
        /// The guessed word
        guess: String,
    },

    /// Score a guess against the whole dictionary
    Analyze {
        /// Word to analyze
        word: String,
    },
}

/// Load the dictionary based on the --dictionary flag
fn load_dictionary(path: Option<&PathBuf>) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("cannot read dictionary {}", path.display()))?,
        None => words_from_slice(WORDS),
    };
    if words.is_empty() {
        bail!("dictionary contains no valid words");
    }
    info!("dictionary holds {} words", words.len());
    Ok(words)
}

/// Build the solver configuration from the global flags
fn solver_config(cli: &Cli) -> Result<SolverConfig> {
    let Some(policy) = ScoringPolicy::from_name(&cli.policy) else {
        bail!("unknown policy '{}' (expected minimax or entropy)", cli.policy);
    };
    let Some(backend) = Backend::from_name(&cli.backend) else {
        bail!("unknown backend '{}' (expected pool or rayon)", cli.backend);
    };
    let opening = if cli.no_opening {
        None
    } else {
        Some(Word::new(&cli.opening).with_context(|| format!("invalid opening '{}'", cli.opening))?)
    };

    let mut config = SolverConfig::new(policy)
        .with_backend(backend)
        .with_opening(opening);
    if let Some(workers) = cli.workers {
        config = config.with_workers(workers);
    }
    if let Some(max_probes) = cli.max_probes {
        config.max_probes = max_probes;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let play = Commands::Play;
    let command = cli.command.as_ref().unwrap_or(&play);

    match command {
        Commands::Feedback { secret, guess } => {
            let (secret, guess, clue) = feedback(secret, guess)?;
            print_feedback(&secret, &guess, &clue);
            Ok(())
        }
        Commands::Analyze { word } => {
            let dictionary = load_dictionary(cli.dictionary.as_ref())?;
            let result = analyze_word(word, &dictionary)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Play => {
            let solver = new_solver(&cli)?.with_reporter(ConsoleReporter);
            run_play_command(solver)
        }
        Commands::Solve { word, verbose } => {
            let secret = Word::new(word).with_context(|| format!("invalid secret '{word}'"))?;
            let mut solver = new_solver(&cli)?;
            let result = solve_word(&mut solver, secret)?;
            print_solve_result(&result, *verbose);
            Ok(())
        }
        Commands::TestAll { limit, random } => {
            let mut solver = new_solver(&cli)?;
            run_test_all_command(&mut solver, *limit, *random)
        }
    }
}

fn new_solver(cli: &Cli) -> Result<Solver> {
    let dictionary = load_dictionary(cli.dictionary.as_ref())?;
    Ok(Solver::new(dictionary, solver_config(cli)?))
}

fn run_play_command(mut solver: Solver) -> Result<()> {
    println!(
        "{}",
        "Enter the clue for each guess: 1 - gray, 2 - yellow, 3 - green (or undo, new, quit)"
            .bright_black()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let PlayEnd::Solved(guesses) = run_play(&mut solver, stdin.lock(), &mut stdout)? {
        info!("solved in {guesses} guesses");
    }
    Ok(())
}

fn run_test_all_command(solver: &mut Solver, limit: Option<usize>, random: bool) -> Result<()> {
    let secrets = select_secrets(solver.dictionary(), limit, random);

    println!("\n{}", "═".repeat(70));
    println!(" Wordle Solver Self-Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting {} of {} dictionary words",
        secrets.len(),
        solver.dictionary().len()
    );
    println!(
        "Policy: {}  Backend: {:?}  Workers: {}",
        solver.config().policy.name(),
        solver.config().backend,
        solver.config().workers
    );
    match solver.config().opening {
        Some(opening) => println!("Opening: {opening}\n"),
        None => println!("Opening: computed\n"),
    }

    let stats = run_test_all(solver, &secrets, true)?;
    print_test_all_statistics(&stats);

    if !stats.all_solved() {
        bail!(
            "{} words not found within {} probes",
            stats.failed.len(),
            solver.config().max_probes
        );
    }
    Ok(())
}
