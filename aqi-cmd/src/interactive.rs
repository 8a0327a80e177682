//! Prompt loop: every line typed is one "analyze and predict" action.

use crate::assets::Assets;
use crate::report::analyze;
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter City Name (e.g. Delhi, Mumbai, Ahmedabad; case-insensitive): ";

fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

/// Read city names from `input` until EOF, `quit` or `exit`, writing one
/// rendered outcome per line to `output`.
///
/// Errors from a single forecast never end the loop; only I/O errors do.
pub fn run_interactive<R: BufRead, W: Write>(
    assets: &Assets,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    let cities = assets.cities();
    if !cities.is_empty() {
        writeln!(output, "{} cities available.", cities.len())?;
    }

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        if is_exit_command(&line) {
            break;
        }
        writeln!(output, "{}", analyze(assets, &line).render_text())?;
    }
    Ok(())
}
