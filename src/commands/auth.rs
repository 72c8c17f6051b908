use super::prompt::{self, report};
use crate::db::db::Db;
use crate::db::users::UserProfile;
use crate::libs::auth::AuthService;
use crate::libs::messages::Message;
use crate::libs::session::{Session, SessionStatus};
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;

pub fn register(db: &Db) -> Result<()> {
    let auth = AuthService::new(db);
    msg_print!(Message::RegistrationHeader, true);

    let Some(user_id) = report(auth.next_user_id()) else {
        return Ok(());
    };
    msg_print!(Message::GeneratedUserId(user_id));

    let profile = UserProfile {
        name: prompt::text(Message::PromptName)?,
        gender: prompt::text(Message::PromptGender)?,
        year_level: prompt::text(Message::PromptYearLevel)?,
        email: prompt::text(Message::PromptEmail)?,
    };
    let password = prompt::secret(Message::PromptPassword)?;

    if let Some(user_id) = report(auth.register(&profile, &password)) {
        msg_success!(Message::RegistrationSuccessful(user_id));
    }
    Ok(())
}

/// One login attempt folded into `session`.
pub fn login(db: &Db, session: &mut Session) -> Result<SessionStatus> {
    msg_print!(Message::LoginHeader, true);
    let email = prompt::text(Message::PromptEmail)?;
    let password = prompt::secret(Message::PromptPassword)?;

    let Some(outcome) = report(AuthService::new(db).login(&email, &password, session.login_attempts())) else {
        return Ok(session.status());
    };

    let status = session.apply(&outcome);
    match (&outcome.user_id, &outcome.user_name, status) {
        (Some(user_id), Some(user_name), _) => msg_success!(Message::LoginSuccessful {
            user_name: user_name.clone(),
            user_id: *user_id,
        }),
        (_, _, SessionStatus::Terminated) => msg_error!(Message::TooManyLoginAttempts),
        _ => msg_error!(Message::InvalidCredentials(session.remaining_attempts())),
    }

    Ok(status)
}

pub fn logout(session: &mut Session) {
    session.logout();
    msg_success!(Message::LoggedOut);
}
