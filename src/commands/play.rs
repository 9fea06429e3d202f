//! Interactive play
//!
//! Line-oriented loop: print a guess, read the clue the game gave for it.
//! Generic over the input and output streams so it can be driven from memory.

use crate::core::{Clue, Probe};
use crate::solver::{Session, SolveError, Solver};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Re-prompt for an unreadable clue line
pub const CLUE_HELP: &str = "expected result: 1 - gray, 2 - yellow, 3 - green";

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEnd {
    /// The last guess earned an all-green clue after this many guesses
    Solved(usize),
    Quit,
    /// Input closed
    EndOfInput,
}

enum Line {
    Clue(Clue),
    Undo,
    New,
    Quit,
    Invalid,
}

fn parse_line(line: &str) -> Line {
    match line.trim().to_lowercase().as_str() {
        "undo" | "u" => Line::Undo,
        "new" | "n" => Line::New,
        "quit" | "q" | "exit" => Line::Quit,
        _ => line.trim().parse().map_or(Line::Invalid, Line::Clue),
    }
}

/// Read one line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Run the interactive loop until solved, quit or end of input
///
/// # Errors
///
/// Returns an error if reading or writing fails, if the solver fails, or with
/// `SolveError::BudgetExhausted` once the probe budget is used up.
pub fn run_play<R: BufRead, W: Write>(
    solver: &mut Solver,
    mut input: R,
    output: &mut W,
) -> Result<PlayEnd> {
    let mut session = Session::new(solver.config().max_probes);

    'turn: loop {
        if session.is_exhausted() {
            return Err(SolveError::BudgetExhausted(session.max_probes()).into());
        }

        let guess = match solver.guess_word(session.probes()) {
            Ok(guess) => guess,
            Err(SolveError::NoCandidates) => {
                writeln!(
                    output,
                    "No words match those clues. Type 'undo' to go back or 'new' to start over."
                )?;
                loop {
                    let Some(line) = read_line(&mut input)? else {
                        return Ok(PlayEnd::EndOfInput);
                    };
                    match parse_line(&line) {
                        Line::Undo => {
                            session.undo();
                            continue 'turn;
                        }
                        Line::New => {
                            session.reset();
                            continue 'turn;
                        }
                        Line::Quit => return Ok(PlayEnd::Quit),
                        Line::Clue(_) | Line::Invalid => {
                            writeln!(output, "Type 'undo', 'new' or 'quit'.")?;
                        }
                    }
                }
            }
            Err(e) => return Err(e.into()),
        };

        writeln!(output, "{guess}")?;
        output.flush()?;

        let clue = loop {
            let Some(line) = read_line(&mut input)? else {
                return Ok(PlayEnd::EndOfInput);
            };
            match parse_line(&line) {
                Line::Clue(clue) => break clue,
                Line::Undo => {
                    session.undo();
                    continue 'turn;
                }
                Line::New => {
                    session.reset();
                    writeln!(output, "New game.")?;
                    continue 'turn;
                }
                Line::Quit => return Ok(PlayEnd::Quit),
                Line::Invalid => writeln!(output, "{CLUE_HELP}")?,
            }
        };

        if clue.is_perfect() {
            let guesses = session.probes_count() + 1;
            writeln!(output, "Solved in {guesses} guesses.")?;
            return Ok(PlayEnd::Solved(guesses));
        }
        session.save_probe(Probe::new(guess, clue))?;
    }
}
