use anyhow::Context;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use passkeep::password_generation::{DEFAULT_LENGTH, MAX_UI_LENGTH, MIN_UI_LENGTH};
use passkeep::CredentialStore;

use crate::{operations, ProgError};

static MENU_ITEMS: &[&str] = &[
    "Generate Password",
    "Check Password Strength",
    "Store Password",
    "Retrieve Password",
    "Quit",
];

pub(crate) fn run_menu(store: &CredentialStore) -> Result<(), ProgError> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Password Manager & Strength Checker").bold());
    println!("Passwords are stored in {}\n", store.path().display());

    let mut selection = 0;
    loop {
        selection = Select::with_theme(&theme)
            .with_prompt("Select an option")
            .items(MENU_ITEMS)
            .default(selection)
            .interact_opt()
            .context("failed to query your selection")?
            .ok_or(ProgError::MenuCancelled)?;

        let result = match selection {
            0 => prompt_length(&theme).and_then(operations::generate),
            1 => operations::check_strength(),
            2 => prompt_text(&theme, "Enter site name").and_then(|site| {
                let username = prompt_text(&theme, "Enter username")?;
                operations::store_password(store, &site, &username)
            }),
            3 => prompt_text(&theme, "Enter site name")
                .and_then(|site| operations::retrieve_password(store, &site)),
            _ => return Ok(()),
        };
        // A failed operation, such as a corrupt password file, doesn't end the session.
        if let Err(err) = result {
            tracing::debug!(error = ?err, "menu operation failed");
            eprintln!("{}", style(err).red());
        }
        println!();
    }
}

fn prompt_length(theme: &ColorfulTheme) -> Result<usize, ProgError> {
    let length = Input::<usize>::with_theme(theme)
        .with_prompt(format!(
            "Select password length ({}-{})",
            MIN_UI_LENGTH, MAX_UI_LENGTH
        ))
        .default(DEFAULT_LENGTH)
        .validate_with(|length: &usize| -> Result<(), String> {
            if (MIN_UI_LENGTH..=MAX_UI_LENGTH).contains(length) {
                Ok(())
            } else {
                Err(format!(
                    "length must be between {} and {}",
                    MIN_UI_LENGTH, MAX_UI_LENGTH
                ))
            }
        })
        .interact_text()
        .context("failed to get your answer to a prompt")?;
    Ok(length)
}

fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, ProgError> {
    let text = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .context("failed to get your answer to a prompt")?;
    Ok(text)
}
