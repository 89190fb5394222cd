//! The interactive command loop.

use crate::commands::{self, Outcome};
use crate::repositories::BookRepository;
use crate::session::Session;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";

/// Read commands from `input` and write replies to `output` until `exit` or
/// end of input.
///
/// Lines need not be valid UTF-8: undecodable bytes become U+FFFD and the
/// line is handled like any other (usually as an unknown command). Command
/// errors are reported on `output` and reading goes on. A read error ends
/// the loop like end of input does. Either way a modified book is saved
/// before returning.
///
/// # Errors
///
/// Returns an error only if writing to `output` fails. The final save is
/// attempted first.
pub fn run<R, I, W>(session: &mut Session<R>, input: I, mut output: W) -> io::Result<()>
where
    R: BookRepository,
    I: BufRead,
    W: Write,
{
    let result = read_commands(session, input, &mut output);
    save_on_close(session, &mut output);
    result
}

fn read_commands<R, I, W>(session: &mut Session<R>, mut input: I, output: &mut W) -> io::Result<()>
where
    R: BookRepository,
    I: BufRead,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => return Ok(()),
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                writeln!(output, "Error: failed to read input: {}", e)?;
                return Ok(());
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let outcome = commands::parse(&line).and_then(|command| commands::execute(session, command));
        match outcome {
            Ok(Outcome::Reply(message)) => writeln!(output, "{}", message)?,
            Ok(Outcome::Exit(message)) => {
                writeln!(output, "{}", message)?;
                return Ok(());
            }
            Err(e) => {
                tracing::warn!(input = %line.trim(), "Command failed: {}", e);
                writeln!(output, "Error: {}", e)?;
            }
        }
    }
}

// End of input counts as a normal exit
fn save_on_close<R: BookRepository, W: Write>(session: &mut Session<R>, output: &mut W) {
    if !session.is_dirty() {
        return;
    }

    if let Err(e) = session.save() {
        tracing::error!("Failed to save address book: {}", e);
        // Output may be the thing that failed; the log above still has it
        let _ = writeln!(output, "Error: {}", e);
    }
}
