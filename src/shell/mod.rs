//! Terminal shell — a line-based front end for the profile app.
//!
//! Every input line is one UI event, handled to completion before the next
//! line is read.

pub mod command;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::{ProfileStore, Screen};
use crate::error::Error;

pub use command::{Command, help_text, parse_command};

/// Read commands from `input` until `quit` or end of input, writing screens
/// and messages to `out`.
///
/// Bad input is reported and skipped. A failed profile write ends the loop
/// with the error.
pub async fn run<R, W>(store: &mut ProfileStore, input: R, out: &mut W) -> Result<(), Error>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    writeln!(out, "{}\n", store.render())?;
    write!(out, "> ")?;
    out.flush()?;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }

        let step = match store.screen() {
            Screen::Questionnaire => store.questionnaire().map(|q| q.current_step()),
            Screen::Summary => None,
        };

        match parse_command(line, step) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{}\n", help_text(step))?,
            Ok(Command::Edit) => {
                store.request_edit();
                writeln!(out, "{}\n", store.render())?;
            }
            Ok(Command::Questionnaire(event)) => {
                tracing::debug!(?event, "Questionnaire event");
                store.handle_questionnaire_event(event).await?;
                writeln!(out, "{}\n", store.render())?;
            }
            Err(e) => {
                tracing::debug!(input = %line, error = %e, "Rejected command");
                writeln!(out, "{e}\n")?;
            }
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    Ok(())
}
