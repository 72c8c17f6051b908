//! Program, participation and attendance record flows.
//!
//! Each operation parses all of its input before touching the database, so a
//! malformed field aborts the whole operation. Updates and deletes confirm the
//! target exists first and fail with [`AppError::NotFound`] otherwise.
//! Participation is unique per (user, program) pair only through the check in
//! [`RecordService::record_participation`]; the table has no such constraint.
//!
//! Attendance rows are inserted without checking that the user and program
//! exist. A meeting may be logged before the beneficiary is enrolled, so the
//! check is left out.

use super::error::{AppError, AppResult};
use super::input;
use crate::db::attendance::{Attendance, Attendances};
use crate::db::db::Db;
use crate::db::param::DATE_FORMAT;
use crate::db::participation::{Participation, ParticipationKey, Participations};
use crate::db::programs::{Program, Programs};
use crate::db::result_set::ResultSet;
use crate::db::users::Users;
use tracing::info;

/// Which table a read-only listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Users,
    Programs,
    Participation,
    Attendance,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [RecordKind::Users, RecordKind::Programs, RecordKind::Participation, RecordKind::Attendance];

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Users => "Users",
            RecordKind::Programs => "Programs",
            RecordKind::Participation => "Participation",
            RecordKind::Attendance => "Attendance",
        }
    }
}

/// Outcome of a delete that needs the user's confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Deleted,
    Cancelled,
}

/// Raw participation input as typed at the console.
#[derive(Debug, Clone, Default)]
pub struct ParticipationForm {
    pub user_id: String,
    pub program_id: String,
    pub meetings_attended: String,
    pub amount_received: String,
}

impl ParticipationForm {
    pub fn parse(&self) -> AppResult<Participation> {
        Ok(Participation {
            key: parse_participation_key(&self.user_id, &self.program_id)?,
            meetings_attended: input::parse_count("meetings attended", &self.meetings_attended)?,
            amount_received: input::parse_amount("amount received", &self.amount_received)?,
        })
    }
}

/// Raw attendance input as typed at the console.
#[derive(Debug, Clone, Default)]
pub struct AttendanceForm {
    pub user_id: String,
    pub program_id: String,
    pub meeting_date: String,
}

pub struct RecordService<'a> {
    db: &'a Db,
}

impl<'a> RecordService<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    fn programs(&self) -> Programs<'a> {
        Programs::new(self.db)
    }

    fn participations(&self) -> Participations<'a> {
        Participations::new(self.db)
    }

    fn attendances(&self) -> Attendances<'a> {
        Attendances::new(self.db)
    }

    /// The id the next program would get. Shown before the user types the details.
    pub fn next_program_id(&self) -> AppResult<i64> {
        self.programs().next_id()
    }

    pub fn next_attendance_id(&self) -> AppResult<i64> {
        self.attendances().next_id()
    }

    pub fn add_program(&self, name: &str, description: &str) -> AppResult<i64> {
        let name = input::require_text("program name", name)?;
        let program = Program::new(self.programs().next_id()?, name, description.trim());

        self.programs().insert(&program)?;
        info!(program_id = program.id, "program added");
        Ok(program.id)
    }

    pub fn record_participation(&self, form: &ParticipationForm) -> AppResult<ParticipationKey> {
        let participation = form.parse()?;

        if self.participations().exists(participation.key)? {
            return Err(AppError::DuplicateKey(format!("participation for {}", participation.key)));
        }

        self.participations().insert(&participation)?;
        info!(user_id = participation.key.user_id, program_id = participation.key.program_id, "participation recorded");
        Ok(participation.key)
    }

    pub fn record_attendance(&self, form: &AttendanceForm) -> AppResult<i64> {
        let user_id = input::parse_id("user id", &form.user_id)?;
        let program_id = input::parse_id("program id", &form.program_id)?;
        let meeting_date = input::parse_date("meeting date", &form.meeting_date)?;

        let attendance = Attendance {
            id: self.attendances().next_id()?,
            user_id,
            program_id,
            meeting_date: meeting_date.format(DATE_FORMAT).to_string(),
        };
        self.attendances().insert(&attendance)?;
        info!(attendance_id = attendance.id, "attendance recorded");
        Ok(attendance.id)
    }

    pub fn view(&self, kind: RecordKind) -> AppResult<ResultSet> {
        match kind {
            RecordKind::Users => Users::new(self.db).view(),
            RecordKind::Programs => self.programs().view(),
            RecordKind::Participation => self.participations().view(),
            RecordKind::Attendance => self.attendances().view(),
        }
    }

    pub fn find_program(&self, program_id: &str) -> AppResult<Program> {
        let id = input::parse_id("program id", program_id)?;
        self.programs().get(id)?.ok_or_else(|| AppError::not_found("Program", id))
    }

    pub fn find_participation(&self, user_id: &str, program_id: &str) -> AppResult<Participation> {
        let key = parse_participation_key(user_id, program_id)?;
        self.participations().get(key)?.ok_or_else(|| AppError::not_found("Participation", key))
    }

    pub fn find_attendance(&self, attendance_id: &str) -> AppResult<Attendance> {
        let id = input::parse_id("attendance id", attendance_id)?;
        self.attendances().get(id)?.ok_or_else(|| AppError::not_found("Attendance", id))
    }

    pub fn update_program(&self, program_id: &str, name: &str, description: &str) -> AppResult<()> {
        let id = input::parse_id("program id", program_id)?;
        let name = input::require_text("program name", name)?;

        if self.programs().get(id)?.is_none() {
            return Err(AppError::not_found("Program", id));
        }

        self.programs().update(&Program::new(id, name, description.trim()))?;
        info!(program_id = id, "program updated");
        Ok(())
    }

    pub fn update_participation(&self, form: &ParticipationForm) -> AppResult<()> {
        let participation = form.parse()?;

        if !self.participations().exists(participation.key)? {
            return Err(AppError::not_found("Participation", participation.key));
        }

        self.participations().update(&participation)?;
        info!(user_id = participation.key.user_id, program_id = participation.key.program_id, "participation updated");
        Ok(())
    }

    /// Deletes a program after `confirm` approves the row it is shown.
    ///
    /// `confirm` is only called when the program exists.
    pub fn delete_program<F, E>(&self, program_id: &str, confirm: F) -> Result<Deletion, E>
    where
        F: FnOnce(&Program) -> Result<bool, E>,
        E: From<AppError>,
    {
        let program = self.find_program(program_id)?;
        if !confirm(&program)? {
            return Ok(Deletion::Cancelled);
        }

        self.programs().delete(program.id)?;
        info!(program_id = program.id, "program deleted");
        Ok(Deletion::Deleted)
    }

    pub fn delete_participation<F, E>(&self, user_id: &str, program_id: &str, confirm: F) -> Result<Deletion, E>
    where
        F: FnOnce(&Participation) -> Result<bool, E>,
        E: From<AppError>,
    {
        let participation = self.find_participation(user_id, program_id)?;
        if !confirm(&participation)? {
            return Ok(Deletion::Cancelled);
        }

        self.participations().delete(participation.key)?;
        info!(user_id = participation.key.user_id, program_id = participation.key.program_id, "participation deleted");
        Ok(Deletion::Deleted)
    }

    pub fn delete_attendance<F, E>(&self, attendance_id: &str, confirm: F) -> Result<Deletion, E>
    where
        F: FnOnce(&Attendance) -> Result<bool, E>,
        E: From<AppError>,
    {
        let attendance = self.find_attendance(attendance_id)?;
        if !confirm(&attendance)? {
            return Ok(Deletion::Cancelled);
        }

        self.attendances().delete(attendance.id)?;
        info!(attendance_id = attendance.id, "attendance deleted");
        Ok(Deletion::Deleted)
    }
}

fn parse_participation_key(user_id: &str, program_id: &str) -> AppResult<ParticipationKey> {
    Ok(ParticipationKey {
        user_id: input::parse_id("user id", user_id)?,
        program_id: input::parse_id("program id", program_id)?,
    })
}
