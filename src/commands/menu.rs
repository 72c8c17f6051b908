use super::{auth, prompt, records};
use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::{Session, SessionStatus};
use crate::{msg_bail_anyhow, msg_debug, msg_print, msg_success, msg_warning};
use anyhow::Result;
use std::path::PathBuf;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Whether the menu loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub fn cmd(db_path: Option<PathBuf>) -> Result<()> {
    let config = Config::read()?;
    let mut db = match config.open_db(db_path) {
        Ok(db) => db,
        Err(e) => msg_bail_anyhow!(Message::DbConnectionFailed(e.to_string())),
    };
    msg_success!(Message::DbConnected(db.path().display().to_string()));
    msg_print!(Message::AppBanner(format!("{} v{}", APP_METADATA_TITLE, APP_METADATA_VERSION)), true);

    let mut session = Session::new(config.max_login_attempts);
    let result = run(&db, &mut session);

    db.close()?;
    msg_success!(Message::DbClosed);
    result
}

/// Alternates between the login menu and the main menu until the user exits
/// or runs out of login attempts.
fn run(db: &Db, session: &mut Session) -> Result<()> {
    loop {
        let flow = if session.is_logged_in() {
            main_menu(db, session)?
        } else {
            login_menu(db, session)?
        };

        if flow == Flow::Exit {
            msg_print!(Message::Exiting);
            return Ok(());
        }
    }
}

fn login_menu(db: &Db, session: &mut Session) -> Result<Flow> {
    let items = [Message::MenuRegister, Message::MenuLogin, Message::MenuExit];

    match prompt::select(Message::PromptChooseOption, &items)? {
        0 => {
            auth::register(db)?;
            Ok(Flow::Continue)
        }
        1 => match auth::login(db, session)? {
            SessionStatus::Active => Ok(Flow::Continue),
            SessionStatus::Terminated => Ok(Flow::Exit),
        },
        _ => Ok(Flow::Exit),
    }
}

fn main_menu(db: &Db, session: &mut Session) -> Result<Flow> {
    let Some((user_id, user_name)) = session.current_user() else {
        msg_warning!(Message::LoggedOut);
        return Ok(Flow::Continue);
    };
    msg_debug!(format!("main menu for user {}", user_id));
    msg_print!(Message::MainMenuHeader(user_name.to_string()), true);

    let items = [
        Message::MenuAddProgram,
        Message::MenuRecordParticipation,
        Message::MenuRecordAttendance,
        Message::MenuViewRecords,
        Message::MenuUpdateRecord,
        Message::MenuDeleteRecord,
        Message::MenuLogout,
    ];

    match prompt::select(Message::PromptChooseOption, &items)? {
        0 => records::add_program(db)?,
        1 => records::record_participation(db)?,
        2 => records::record_attendance(db)?,
        3 => records::view_records(db)?,
        4 => records::update_record(db)?,
        5 => records::delete_record(db)?,
        _ => auth::logout(session),
    }

    Ok(Flow::Continue)
}
