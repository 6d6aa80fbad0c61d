use std::io::{self, Write};

use colored::Colorize;
use github::Event;

pub const DEFAULT_LIMIT: usize = 5;

pub static EMPTY_ACTIVITY_MESSAGE: &str =
    "No recent activity found for this user";

/// Writes the first `limit` events in the order received. Events without a
/// type are skipped rather than shown half-filled.
pub fn render_activity<W: Write>(
    out: &mut W,
    events: &[Event],
    username: &str,
    limit: usize,
) -> io::Result<()> {
    let displayable: Vec<(&str, &str)> = events
        .iter()
        .filter_map(|event| {
            Some((event.r#type.as_deref()?, event.repo.name.as_str()))
        })
        .take(limit)
        .collect();

    if displayable.is_empty() {
        writeln!(out, "{}", EMPTY_ACTIVITY_MESSAGE.yellow())?;
        return Ok(());
    }

    writeln!(out, "{}", format!("\n Recent activity of {}", username).green())?;
    for (index, (r#type, repo)) in displayable.into_iter().enumerate() {
        writeln!(
            out,
            "{}. {} - {}",
            (index + 1).to_string().blue(),
            r#type.cyan(),
            repo.magenta()
        )?;
    }

    Ok(())
}
