//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a word per line, or a command.

use crate::dictionary::SpellChecker;
use crate::game::{Session, SubmitOutcome};
use crate::output::formatters::length_glyph;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word list is empty or on an I/O error reading
/// user input.
pub fn run_simple<S, D, R>(word_list: &[S], checker: &D, rng: &mut R) -> Result<()>
where
    S: AsRef<str>,
    D: SpellChecker + ?Sized,
    R: Rng + ?Sized,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(stdin.lock(), stdout.lock(), word_list, checker, rng)?;
    Ok(())
}

/// Run the simple mode against arbitrary input and output streams
///
/// Returns the session as it stood when input ended or the player quit.
///
/// # Errors
///
/// Returns an error if the word list is empty or on an I/O error.
pub fn run_simple_with<I, O, S, D, R>(
    mut input: I,
    mut output: O,
    word_list: &[S],
    checker: &D,
    rng: &mut R,
) -> Result<Session>
where
    I: BufRead,
    O: Write,
    S: AsRef<str>,
    D: SpellChecker + ?Sized,
    R: Rng + ?Sized,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                    Word Scramble - Simple                    ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make as many words as you can from the letters of the root word.")?;
    writeln!(output, "Commands: ':list' to show your words, ':new' for a new root, ':quit' to exit\n")?;

    let mut session = Session::start_with_rng(word_list, rng)?;
    announce_root(&mut output, &session)?;

    let mut line = String::new();
    loop {
        write!(output, "Word: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(session);
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(session);
            }
            ":new" | ":n" => {
                session = Session::start_with_rng(word_list, rng)?;
                writeln!(output, "\n🔄 New game started!")?;
                announce_root(&mut output, &session)?;
            }
            ":list" | ":l" => print_words(&mut output, &session)?,
            _ => {
                let draft = session.draft_mut();
                draft.clear();
                draft.push_str(line.trim_end_matches(['\r', '\n']));

                match session.submit_draft(checker) {
                    SubmitOutcome::Accepted(word) => {
                        writeln!(
                            output,
                            "{} {} {}\n",
                            "✓".green().bold(),
                            length_glyph(word.chars().count()),
                            word.bright_white().bold()
                        )?;
                    }
                    SubmitOutcome::Rejected(rejection) => {
                        writeln!(output, "{} {}", "✗".red().bold(), rejection.title().red().bold())?;
                        writeln!(output, "  {}\n", rejection.message())?;
                    }
                    SubmitOutcome::Ignored => {}
                }
            }
        }
    }
}

fn announce_root<O: Write>(output: &mut O, session: &Session) -> io::Result<()> {
    writeln!(
        output,
        "Root word: {}\n",
        session.root().to_uppercase().bright_yellow().bold()
    )
}

fn print_words<O: Write>(output: &mut O, session: &Session) -> io::Result<()> {
    if session.accepted().is_empty() {
        return writeln!(output, "No words yet!\n");
    }

    writeln!(output, "Words from {}:", session.root().to_uppercase())?;
    for word in session.accepted() {
        writeln!(output, "  {} {word}", length_glyph(word.chars().count()))?;
    }
    writeln!(output)
}
