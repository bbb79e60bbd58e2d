//! User service: registration and lookup.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use teamhub_core::config::AccountsConfig;
use teamhub_core::error::AppError;
use teamhub_core::result::AppResult;
use teamhub_core::types::id::UserId;
use teamhub_database::EntityStore;
use teamhub_entity::user::{NewUser, User};

use crate::project::ProjectService;

/// Registers users and resolves them.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn EntityStore>,
    projects: ProjectService,
    accounts: AccountsConfig,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        store: Arc<dyn EntityStore>,
        projects: ProjectService,
        accounts: AccountsConfig,
    ) -> Self {
        Self {
            store,
            projects,
            accounts,
        }
    }

    /// Registers a user and adds them to the default project.
    ///
    /// The user row and the membership are written together, so a failed
    /// registration leaves nothing behind and can simply be retried.
    ///
    /// Missing e-mail and avatar are filled with `<username>@<domain>` and
    /// the placeholder avatar. The password is stored as given; hashing is
    /// the caller's job.
    pub async fn register(&self, mut data: NewUser) -> AppResult<User> {
        data.username = data.username.trim().to_string();
        data.validate()?;

        if data.email.as_deref().is_none_or(|e| e.trim().is_empty()) {
            data.email = Some(self.accounts.fallback_email(&data.username));
        }
        if data.avatar_url.as_deref().is_none_or(|a| a.trim().is_empty()) {
            data.avatar_url = Some(self.accounts.placeholder_avatar(&data.username));
        }

        let project = self.projects.ensure_default_project().await?;
        let enrolled = self.store.create_user_in_project(&data, project.id).await?;
        let user = enrolled.user;
        info!(
            user_id = %user.id,
            username = %user.username,
            project_id = %project.id,
            "User registered"
        );

        self.projects.announce_join(&enrolled.membership).await?;
        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get_user(&self, user_id: UserId) -> AppResult<User> {
        self.store
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Finds a user by username, ignoring case.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.store.find_user_by_username(username.trim()).await
    }

    /// Lists all users.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.store.list_users().await
    }
}
