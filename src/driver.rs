use std::io::Write;

use colored::Colorize;
use github::{ActivitySource, FetchError};
use tracing::debug;

use crate::{
    prompt::{ask_for_username, UsernamePrompt},
    render::render_activity,
    spinner::Progress,
};

pub static SEARCHING_MESSAGE: &str = "Searching for user activity on GitHub...";

pub static COMPLETED_MESSAGE: &str = "Load activity completed!";

pub static UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Runs one prompt, fetch and render cycle. Any failure ends up as a single
/// red line on `out`; nothing is returned to the caller.
pub async fn run<P, S, W>(prompt: &mut P, source: &S, out: &mut W, limit: usize)
where
    P: UsernamePrompt,
    S: ActivitySource,
    W: Write,
{
    if let Err(e) = try_run(prompt, source, out, limit).await {
        report_error(out, &e);
    }
}

pub async fn try_run<P, S, W>(
    prompt: &mut P,
    source: &S,
    out: &mut W,
    limit: usize,
) -> anyhow::Result<()>
where
    P: UsernamePrompt,
    S: ActivitySource,
    W: Write,
{
    let username = ask_for_username(prompt)?;

    let progress = Progress::start(SEARCHING_MESSAGE);
    let events = source.fetch(&username).await?;
    progress.succeed(out, COMPLETED_MESSAGE)?;

    render_activity(out, &events, &username, limit)?;

    Ok(())
}

/// Message for errors this program knows how to describe, or
/// [`UNKNOWN_ERROR_MESSAGE`] for anything else.
pub fn error_message(e: &anyhow::Error) -> String {
    if let Some(e) = e.downcast_ref::<FetchError>() {
        return e.to_string();
    }
    if let Some(e) = e.downcast_ref::<dialoguer::Error>() {
        return e.to_string();
    }

    UNKNOWN_ERROR_MESSAGE.to_string()
}

pub fn report_error<W: Write>(out: &mut W, e: &anyhow::Error) {
    debug!(task = "run", err = format!("{:?}", e));

    let line = format!("Error: {}", error_message(e));
    if let Err(write_err) = writeln!(out, "{}", line.red()) {
        // Nowhere left to report to.
        debug!(task = "report error", err = write_err.to_string());
    }
}
