//! The four operations offered to the user, shared by the subcommands and the interactive menu.

use anyhow::Context;
use console::style;

use passkeep::strength::{Criteria, Strength};
use passkeep::{CredentialStore, Secret, NOT_FOUND_MESSAGE};

use crate::ProgError;

pub(crate) fn generate(length: usize) -> Result<(), ProgError> {
    let password = passkeep::generate_password(length)?;
    println!("{} {}", style("Generated Password:").green(), password.as_str());
    Ok(())
}

pub(crate) fn check_strength() -> Result<(), ProgError> {
    let password = prompt_password("Enter password: ")?;
    report_strength(&password);
    Ok(())
}

fn report_strength(password: &Secret) {
    let criteria = Criteria::evaluate(password.as_str());
    let strength = criteria.strength();
    let label = match strength {
        Strength::Weak => style(strength).red(),
        Strength::Medium => style(strength).yellow(),
        Strength::Strong => style(strength).green(),
    };
    println!("Password Strength: {}", label);
    for missing in criteria.unmet() {
        println!("  missing {}", missing);
    }
}

pub(crate) fn store_password(
    store: &CredentialStore,
    site: &str,
    username: &str,
) -> Result<(), ProgError> {
    let password = prompt_password("Enter password: ")?;
    let message = store.store(site, username, &password)?;
    println!("{}", style(message).green());
    Ok(())
}

pub(crate) fn retrieve_password(store: &CredentialStore, site: &str) -> Result<(), ProgError> {
    match store.retrieve(site)? {
        Some(record) => {
            let rows = [crate::table::RecordRow {
                site,
                record: &record,
            }];
            crate::table::display_table(&rows, std::io::stdout())
                .context("failed to output table")?;
        }
        None => println!("{}", style(NOT_FOUND_MESSAGE).yellow()),
    }
    Ok(())
}

fn prompt_password(prompt: &str) -> Result<Secret, ProgError> {
    let password = rpassword::prompt_password(prompt).context("failed to read password from TTY")?;
    Ok(Secret::from(password))
}
