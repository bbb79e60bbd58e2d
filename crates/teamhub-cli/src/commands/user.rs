//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use teamhub_core::config::AppConfig;
use teamhub_core::error::AppError;
use teamhub_entity::user::{NewUser, User};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List,
    /// Register a user and add them to the default project
    Register {
        /// Username
        username: String,
        /// Full name
        #[arg(long)]
        full_name: Option<String>,
        /// E-mail address (defaults to `<username>@<email_domain>`)
        #[arg(long)]
        email: Option<String>,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: i64,
    /// Username
    username: String,
    /// Display name
    name: String,
    /// Email
    email: String,
    /// Registered at
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.into_inner(),
            username: u.username.clone(),
            name: u.display_name().to_string(),
            email: u.email.clone().unwrap_or_default(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let hub = super::connect_hub(config).await?;

    match &args.command {
        UserCommand::List => {
            let users = hub.users.list_users().await?;
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            output::print_list(&rows, &users, format);
        }
        UserCommand::Register {
            username,
            full_name,
            email,
        } => {
            let password = dialoguer::Password::new()
                .with_prompt(format!("Password for '{username}'"))
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

            let mut data = NewUser::new(username.as_str(), password);
            if let Some(name) = full_name {
                data = data.with_full_name(name.as_str());
            }
            data.email = email.clone();

            let user = hub.users.register(data).await?;
            let row = UserRow::from(&user);
            output::print_item(
                &user,
                &[
                    ("ID", row.id.to_string()),
                    ("Username", row.username),
                    ("Name", row.name),
                    ("Email", row.email),
                ],
                format,
            );
            if format == OutputFormat::Table {
                output::print_success(&format!("User '{}' registered", user.username));
            }
        }
    }

    Ok(())
}
