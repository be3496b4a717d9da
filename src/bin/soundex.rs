use std::io::{self, BufRead, Write};

use algokit::soundex;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "Enter a string: ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let word = line.trim();

        if !word.is_empty() {
            match soundex(word) {
                Ok(code) => writeln!(stdout, "Soundex({}) = {}", word, code)?,
                Err(err) => warn!("{}", err),
            }
        }

        write!(stdout, "Enter a string: ")?;
        stdout.flush()?;
    }

    writeln!(stdout)?;
    Ok(())
}
