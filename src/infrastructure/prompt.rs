//! Interactive prompts

use dialoguer::{Input, Password};
use is_terminal::IsTerminal;

use crate::domain::value_objects::Answer;
use crate::error::{BerthError, BerthResult};

/// Ask until a non-empty answer is given. `masked` hides the input.
pub fn ask(message: &str, masked: bool) -> BerthResult<String> {
    if !std::io::stdin().is_terminal() {
        return Err(BerthError::invalid_argument(format!(
            "cannot prompt for '{}' without a terminal",
            message
        )));
    }

    loop {
        let answer = if masked {
            Password::new()
                .with_prompt(message)
                .allow_empty_password(true)
                .interact()?
        } else {
            Input::<String>::new()
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()?
        };
        if !answer.is_empty() {
            return Ok(answer);
        }
    }
}

/// Ask a yes/no question until the answer is recognized
pub fn confirm(message: &str) -> BerthResult<bool> {
    loop {
        let answer = Answer::new(ask(&format!("{} [yes/no]", message), false)?);
        if answer.is_yes() {
            return Ok(true);
        }
        if answer.is_no() {
            return Ok(false);
        }
    }
}
