//! The startup menu: pick a pattern source before the simulation begins.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use life_lib::{Pattern, Preset, persistence};
use rand::Rng;

/// Presents the pattern-source menu until the user picks a source or exits.
///
/// Returns `None` when the user chooses to exit (or the input ends). Load
/// failures are reported & the menu comes back; they never tear the program
/// down from here.
pub fn choose_pattern(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<Pattern>> {
    loop {
        queue!(
            output,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print("[1] Generate random configuration\n"),
            Print("[2] Load preset configuration\n"),
            Print("[3] Read layout file\n"),
            Print("[X] Exit\n\n: "),
        )?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match line.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('1') => {
                let mut rng = rand::thread_rng();
                let width = rng.gen_range(5..=50);
                let height = rng.gen_range(4..=40);
                return Ok(Some(Pattern::random(width, height, &mut rng)));
            }
            Some('2') => {
                if let Some(pattern) = choose_preset(input, output)? {
                    return Ok(Some(pattern));
                }
            }
            Some('3') => {
                if let Some(pattern) = choose_file(input, output)? {
                    return Ok(Some(pattern));
                }
            }
            Some('x') => return Ok(None),
            _ => {}
        }
    }
}

/// The preset submenu. Returns `None` to go back to the main menu.
fn choose_preset(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<Pattern>> {
    loop {
        queue!(output, Clear(ClearType::All), MoveTo(0, 0))?;
        for (index, preset) in Preset::ALL.iter().enumerate() {
            queue!(output, Print(format!("[{}] {preset}\n", index + 1)))?;
        }
        queue!(output, Print("[X] Back\n\n: "))?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match line.chars().next() {
            Some('x') | Some('X') => return Ok(None),
            Some(digit) => {
                let choice = digit.to_digit(10).map(|d| d as usize);
                if let Some(preset) = choice
                    .filter(|&d| (1..=Preset::ALL.len()).contains(&d))
                    .map(|d| Preset::ALL[d - 1])
                {
                    return Ok(Some(Pattern::preset(preset)));
                }
            }
            None => {}
        }
    }
}

/// Prompts for a layout file & loads it. Returns `None` to go back to the
/// main menu after a failed load.
fn choose_file(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<Pattern>> {
    queue!(
        output,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print("Enter filename\n: ")
    )?;
    output.flush()?;

    let Some(filename) = read_line(input)? else {
        return Ok(None);
    };
    let filename = filename.trim();
    if filename.is_empty() {
        return Ok(None);
    }

    match persistence::load_layout(filename) {
        Ok(layout) => Ok(Some(Pattern::custom(filename, layout))),
        Err(error) => {
            log::info!("layout file {filename:?} rejected: {error}");
            queue!(output, Print(format!("Could not load {filename:?}: {error}\n")))?;
            output.flush()?;
            Ok(None)
        }
    }
}

/// Reads one line, returning `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end().to_owned()))
}
