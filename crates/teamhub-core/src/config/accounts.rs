//! Account and project defaults.

use serde::{Deserialize, Serialize};

/// Defaults applied to newly registered users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsConfig {
    /// Domain used to build a fallback e-mail address (`<username>@<domain>`).
    #[serde(default = "default_email_domain")]
    pub email_domain: String,
    /// Placeholder avatar URL; `{username}` is replaced with the username.
    #[serde(default = "default_avatar_template")]
    pub avatar_url_template: String,
}

impl AccountsConfig {
    /// Build the fallback e-mail address for a username.
    pub fn fallback_email(&self, username: &str) -> String {
        format!("{username}@{}", self.email_domain)
    }

    /// Build the placeholder avatar URL for a username.
    pub fn placeholder_avatar(&self, username: &str) -> String {
        self.avatar_url_template.replace("{username}", username)
    }
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            email_domain: default_email_domain(),
            avatar_url_template: default_avatar_template(),
        }
    }
}

/// The project every new user joins on registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsConfig {
    /// Name of the default project.
    #[serde(default = "default_project_name")]
    pub default_name: String,
    /// Description of the default project.
    #[serde(default = "default_project_description")]
    pub default_description: Option<String>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            default_name: default_project_name(),
            default_description: default_project_description(),
        }
    }
}

fn default_email_domain() -> String {
    "example.com".to_string()
}

fn default_avatar_template() -> String {
    "https://api.dicebear.com/7.x/initials/svg?seed={username}".to_string()
}

fn default_project_name() -> String {
    "Team Project".to_string()
}

fn default_project_description() -> Option<String> {
    Some("Shared workspace for the whole team".to_string())
}
