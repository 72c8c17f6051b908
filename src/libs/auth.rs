//! Registration and login.

use super::error::{AppError, AppResult};
use super::hasher;
use super::session::LoginOutcome;
use crate::db::db::Db;
use crate::db::users::{UserProfile, Users};
use tracing::{debug, info};

pub struct AuthService<'a> {
    users: Users<'a>,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { users: Users::new(db) }
    }

    /// The id the next registration would get.
    pub fn next_user_id(&self) -> AppResult<i64> {
        self.users.next_id()
    }

    /// Creates a user and returns the generated id.
    ///
    /// An email that is already registered fails with
    /// [`AppError::DuplicateEmail`] and nothing is inserted. A unique-constraint
    /// failure on insert is reported the same way.
    pub fn register(&self, profile: &UserProfile, password: &str) -> AppResult<i64> {
        let user_id = self.users.next_id()?;

        if self.users.get_by_email(&profile.email)?.is_some() {
            debug!(email = %profile.email, "registration rejected, email exists");
            return Err(AppError::DuplicateEmail(profile.email.clone()));
        }

        let digest = hasher::hash(password);
        self.users
            .insert(user_id, profile, &digest)
            .map_err(|e| email_conflict(e, &profile.email))?;

        info!(user_id, "user registered");
        Ok(user_id)
    }

    /// Checks credentials. `current_attempts` is the failed-attempt count
    /// before this call.
    pub fn login(&self, email: &str, password: &str, current_attempts: u32) -> AppResult<LoginOutcome> {
        let digest = hasher::hash(password);

        match self.users.find_by_credentials(email, &digest)? {
            Some((user_id, user_name)) => {
                info!(user_id, "login succeeded");
                Ok(LoginOutcome::succeeded(user_id, user_name))
            }
            None => {
                let attempts = current_attempts.saturating_add(1);
                debug!(attempts, "login failed");
                Ok(LoginOutcome::failed(attempts))
            }
        }
    }
}

/// A unique violation on insert is reported as the email being taken.
fn email_conflict(error: AppError, email: &str) -> AppError {
    match error {
        AppError::DuplicateKey(_) => AppError::DuplicateEmail(email.to_string()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::db::classify;
    use rusqlite::ffi;

    #[test]
    fn test_unique_violation_reports_duplicate_email() {
        let failure = rusqlite::Error::SqliteFailure(
            ffi::Error::new(ffi::SQLITE_CONSTRAINT_UNIQUE),
            Some("UNIQUE constraint failed: user.email".to_string()),
        );

        let err = email_conflict(classify(failure, "INSERT INTO user"), "ana@example.com");
        assert!(matches!(err, AppError::DuplicateEmail(ref email) if email == "ana@example.com"));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err = email_conflict(AppError::Busy("database is locked".to_string()), "ana@example.com");
        assert!(matches!(err, AppError::Busy(_)));
    }
}
