//! Interactive session state.
//!
//! A session moves LoggedOut → LoggedIn → LoggedOut. While logged out it counts
//! failed logins; once the count reaches the limit the session reports
//! [`SessionStatus::Terminated`] and the console loop ends.

/// Failed logins allowed before the session is terminated.
pub const MAX_LOGIN_ATTEMPTS: u32 = 3;

/// Result of one login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub success: bool,
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    /// Failed attempts so far, reset to 0 on success.
    pub attempts: u32,
}

impl LoginOutcome {
    pub fn succeeded(user_id: i64, user_name: String) -> Self {
        Self {
            success: true,
            user_id: Some(user_id),
            user_name: Some(user_name),
            attempts: 0,
        }
    }

    pub fn failed(attempts: u32) -> Self {
        Self {
            success: false,
            user_id: None,
            user_name: None,
            attempts,
        }
    }

    pub fn is_terminal(&self, max_attempts: u32) -> bool {
        !self.success && self.attempts >= max_attempts
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn { user_id: i64, user_name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Terminated,
}

#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    login_attempts: u32,
    max_login_attempts: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MAX_LOGIN_ATTEMPTS)
    }
}

impl Session {
    pub fn new(max_login_attempts: u32) -> Self {
        Self {
            state: SessionState::LoggedOut,
            login_attempts: 0,
            max_login_attempts: max_login_attempts.max(1),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn { .. })
    }

    pub fn current_user(&self) -> Option<(i64, &str)> {
        match &self.state {
            SessionState::LoggedIn { user_id, user_name } => Some((*user_id, user_name.as_str())),
            SessionState::LoggedOut => None,
        }
    }

    pub fn login_attempts(&self) -> u32 {
        self.login_attempts
    }

    pub fn max_login_attempts(&self) -> u32 {
        self.max_login_attempts
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.max_login_attempts.saturating_sub(self.login_attempts)
    }

    pub fn status(&self) -> SessionStatus {
        if !self.is_logged_in() && self.login_attempts >= self.max_login_attempts {
            SessionStatus::Terminated
        } else {
            SessionStatus::Active
        }
    }

    /// Folds a login outcome into the session.
    ///
    /// A terminated session stays terminated; later outcomes are ignored.
    pub fn apply(&mut self, outcome: &LoginOutcome) -> SessionStatus {
        if self.status() == SessionStatus::Terminated {
            return SessionStatus::Terminated;
        }

        match (outcome.success, outcome.user_id, &outcome.user_name) {
            (true, Some(user_id), Some(user_name)) => {
                self.state = SessionState::LoggedIn {
                    user_id,
                    user_name: user_name.clone(),
                };
                self.login_attempts = 0;
            }
            _ => self.login_attempts = outcome.attempts,
        }

        self.status()
    }

    pub fn logout(&mut self) {
        self.state = SessionState::LoggedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_then_logout() {
        let mut session = Session::default();
        let status = session.apply(&LoginOutcome::succeeded(7, "Ana".to_string()));
        assert_eq!(status, SessionStatus::Active);
        assert_eq!(session.current_user(), Some((7, "Ana")));

        session.logout();
        assert_eq!(session.state(), &SessionState::LoggedOut);
        assert_eq!(session.login_attempts(), 0);
    }

    #[test]
    fn test_three_failures_terminate() {
        let mut session = Session::default();
        assert_eq!(session.apply(&LoginOutcome::failed(1)), SessionStatus::Active);
        assert_eq!(session.apply(&LoginOutcome::failed(2)), SessionStatus::Active);
        assert_eq!(session.remaining_attempts(), 1);
        assert_eq!(session.apply(&LoginOutcome::failed(3)), SessionStatus::Terminated);

        // A late success cannot revive a terminated session.
        assert_eq!(session.apply(&LoginOutcome::succeeded(1, "Ana".to_string())), SessionStatus::Terminated);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_success_resets_counter() {
        let mut session = Session::default();
        session.apply(&LoginOutcome::failed(2));
        session.apply(&LoginOutcome::succeeded(3, "Ben".to_string()));
        assert_eq!(session.login_attempts(), 0);
    }

    #[test]
    fn test_outcome_terminal_threshold() {
        assert!(!LoginOutcome::failed(2).is_terminal(MAX_LOGIN_ATTEMPTS));
        assert!(LoginOutcome::failed(3).is_terminal(MAX_LOGIN_ATTEMPTS));
        assert!(!LoginOutcome::succeeded(1, "Ana".to_string()).is_terminal(MAX_LOGIN_ATTEMPTS));
    }
}
