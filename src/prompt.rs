use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};

pub static PROMPT_MESSAGE: &str = "Enter your GitHub username";

pub static EMPTY_USERNAME_MESSAGE: &str = "The username must not be empty";

pub trait UsernamePrompt {
    fn read_username(&mut self) -> anyhow::Result<String>;

    /// Called with the reason before the prompt is shown again.
    fn reject(&mut self, reason: &str);
}

pub fn validate_username(input: &str) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        return Err(EMPTY_USERNAME_MESSAGE);
    }

    Ok(())
}

/// Reads until the input passes [`validate_username`] and returns it trimmed.
pub fn ask_for_username<P: UsernamePrompt>(
    prompt: &mut P,
) -> anyhow::Result<String> {
    loop {
        let input = prompt.read_username()?;

        match validate_username(&input) {
            Ok(()) => return Ok(input.trim().to_string()),
            Err(reason) => prompt.reject(reason),
        }
    }
}

#[derive(Default)]
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl UsernamePrompt for TerminalPrompt {
    fn read_username(&mut self) -> anyhow::Result<String> {
        // Blank input is returned as is; `ask_for_username` rejects it.
        let username = Input::<String>::with_theme(&self.theme)
            .with_prompt(PROMPT_MESSAGE)
            .allow_empty(true)
            .interact_text()?;

        Ok(username)
    }

    fn reject(&mut self, reason: &str) {
        eprintln!("{} {}", "✘".red(), reason);
    }
}
