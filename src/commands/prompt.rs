//! Thin wrappers over dialoguer prompts plus error reporting for service calls.

use crate::libs::error::{AppError, AppResult};
use crate::libs::messages::Message;
use crate::msg_error;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

/// Free text; empty answers are allowed and left to the service to judge.
pub fn text(prompt: Message) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

pub fn secret(prompt: Message) -> Result<String> {
    let value = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty_password(true)
        .interact()?;
    Ok(value.trim().to_string())
}

pub fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}

/// Index of the chosen item.
pub fn select(prompt: Message, items: &[Message]) -> Result<usize> {
    let labels: Vec<String> = items.iter().map(ToString::to_string).collect();
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .default(0)
        .interact()?)
}

/// Prints a service error and turns it into `None`.
pub fn report<T>(result: AppResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            msg_error!(Message::from(&e));
            None
        }
    }
}

/// Like [`report`] for flows that mix service errors with prompt errors.
/// Prompt failures are passed through.
pub fn report_any<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => match e.downcast_ref::<AppError>() {
            Some(app_error) => {
                msg_error!(Message::from(app_error));
                Ok(None)
            }
            None => Err(e),
        },
    }
}
