use super::prompt::{self, report, report_any};
use crate::db::db::Db;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::records::{AttendanceForm, Deletion, ParticipationForm, RecordKind, RecordService};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;

pub fn add_program(db: &Db) -> Result<()> {
    let records = RecordService::new(db);
    msg_print!(Message::AddProgramHeader, true);

    let Some(program_id) = report(records.next_program_id()) else {
        return Ok(());
    };
    msg_print!(Message::GeneratedProgramId(program_id));

    let name = prompt::text(Message::PromptProgramName)?;
    let description = prompt::text(Message::PromptDescription)?;

    if let Some(program_id) = report(records.add_program(&name, &description)) {
        msg_success!(Message::ProgramAdded(program_id));
    }
    Ok(())
}

pub fn record_participation(db: &Db) -> Result<()> {
    msg_print!(Message::RecordParticipationHeader, true);
    let form = ParticipationForm {
        user_id: prompt::text(Message::PromptUserId)?,
        program_id: prompt::text(Message::PromptProgramId)?,
        meetings_attended: prompt::text(Message::PromptMeetingsAttended)?,
        amount_received: prompt::text(Message::PromptAmountReceived)?,
    };

    match RecordService::new(db).record_participation(&form) {
        Ok(_) => msg_success!(Message::ParticipationRecorded),
        Err(AppError::DuplicateKey(_)) => msg_error!(Message::ParticipationExists),
        Err(e) => msg_error!(Message::from(&e)),
    }
    Ok(())
}

pub fn record_attendance(db: &Db) -> Result<()> {
    let records = RecordService::new(db);
    msg_print!(Message::RecordAttendanceHeader, true);

    let Some(attendance_id) = report(records.next_attendance_id()) else {
        return Ok(());
    };
    msg_print!(Message::GeneratedAttendanceId(attendance_id));

    let form = AttendanceForm {
        user_id: prompt::text(Message::PromptUserId)?,
        program_id: prompt::text(Message::PromptProgramId)?,
        meeting_date: prompt::text(Message::PromptMeetingDate)?,
    };

    if let Some(attendance_id) = report(records.record_attendance(&form)) {
        msg_success!(Message::AttendanceRecorded(attendance_id));
    }
    Ok(())
}

pub fn view_records(db: &Db) -> Result<()> {
    let kinds: Vec<Message> = RecordKind::ALL.iter().map(|kind| Message::ViewRecordsHeader(kind.label().to_string())).collect();
    let kind = RecordKind::ALL[prompt::select(Message::PromptChooseRecord, &kinds)?];

    msg_print!(Message::ViewRecordsHeader(kind.label().to_string()), true);
    if let Some(result_set) = report(RecordService::new(db).view(kind)) {
        View::result_set(&result_set);
    }
    Ok(())
}

pub fn update_record(db: &Db) -> Result<()> {
    msg_print!(Message::UpdateRecordHeader, true);
    let kinds = [RecordKind::Programs, RecordKind::Participation];
    let labels: Vec<Message> = kinds.iter().map(|kind| Message::ViewRecordsHeader(kind.label().to_string())).collect();

    match kinds[prompt::select(Message::PromptChooseRecord, &labels)?] {
        RecordKind::Programs => update_program(db),
        _ => update_participation(db),
    }
}

fn update_program(db: &Db) -> Result<()> {
    let records = RecordService::new(db);
    let program_id = prompt::text(Message::PromptProgramId)?;
    let Some(current) = report(records.find_program(&program_id)) else {
        return Ok(());
    };

    msg_info!(Message::CurrentProgramName(current.name));
    msg_info!(Message::CurrentDescription(current.description));
    let name = prompt::text(Message::PromptNewProgramName)?;
    let description = prompt::text(Message::PromptNewDescription)?;

    if report(records.update_program(&program_id, &name, &description)).is_some() {
        msg_success!(Message::ProgramUpdated);
    }
    Ok(())
}

fn update_participation(db: &Db) -> Result<()> {
    let records = RecordService::new(db);
    let user_id = prompt::text(Message::PromptUserId)?;
    let program_id = prompt::text(Message::PromptProgramId)?;
    let Some(current) = report(records.find_participation(&user_id, &program_id)) else {
        return Ok(());
    };

    msg_info!(Message::CurrentMeetingsAttended(current.meetings_attended));
    msg_info!(Message::CurrentAmountReceived(current.amount_received));
    let form = ParticipationForm {
        user_id,
        program_id,
        meetings_attended: prompt::text(Message::PromptNewMeetingsAttended)?,
        amount_received: prompt::text(Message::PromptNewAmountReceived)?,
    };

    if report(records.update_participation(&form)).is_some() {
        msg_success!(Message::ParticipationUpdated);
    }
    Ok(())
}

pub fn delete_record(db: &Db) -> Result<()> {
    let records = RecordService::new(db);
    msg_print!(Message::DeleteRecordHeader, true);
    let kinds = [RecordKind::Programs, RecordKind::Participation, RecordKind::Attendance];
    let labels: Vec<Message> = kinds.iter().map(|kind| Message::ViewRecordsHeader(kind.label().to_string())).collect();

    let (entity, result) = match kinds[prompt::select(Message::PromptChooseRecord, &labels)?] {
        RecordKind::Programs => {
            let program_id = prompt::text(Message::PromptProgramId)?;
            let result = records.delete_program(&program_id, |program| {
                msg_info!(Message::CurrentProgramName(program.name.clone()));
                prompt::confirm(Message::ConfirmDelete("Program"))
            });
            ("Program", result)
        }
        RecordKind::Participation => {
            let user_id = prompt::text(Message::PromptUserId)?;
            let program_id = prompt::text(Message::PromptProgramId)?;
            let result = records.delete_participation(&user_id, &program_id, |participation| {
                msg_info!(Message::CurrentMeetingsAttended(participation.meetings_attended));
                msg_info!(Message::CurrentAmountReceived(participation.amount_received));
                prompt::confirm(Message::ConfirmDelete("Participation"))
            });
            ("Participation", result)
        }
        _ => {
            let attendance_id = prompt::text(Message::PromptAttendanceId)?;
            let result = records.delete_attendance(&attendance_id, |_| prompt::confirm(Message::ConfirmDelete("Attendance")));
            ("Attendance", result)
        }
    };

    match report_any(result)? {
        Some(Deletion::Deleted) => msg_success!(Message::RecordDeleted(entity)),
        Some(Deletion::Cancelled) => msg_info!(Message::DeletionCancelled),
        None => {}
    }
    Ok(())
}
