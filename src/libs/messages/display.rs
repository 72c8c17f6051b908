//! Display implementation for fourps application messages.
//!
//! All user-facing text is defined here, in one match over [`Message`]. The
//! services never format text themselves; the console layer turns their
//! results and errors into `Message` values and prints them through the
//! `msg_*` macros.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === APPLICATION MESSAGES ===
            Message::AppBanner(title) => format!("=== {} ===", title),
            Message::MainMenuHeader(name) => format!("=== MAIN MENU (Welcome, {}!) ===", name),
            Message::Exiting => "Exiting program...".to_string(),

            // === MENU ITEMS ===
            Message::MenuRegister => "Register".to_string(),
            Message::MenuLogin => "Login".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::MenuAddProgram => "Add Program".to_string(),
            Message::MenuRecordParticipation => "Record Participation".to_string(),
            Message::MenuRecordAttendance => "Record Attendance".to_string(),
            Message::MenuViewRecords => "View Records".to_string(),
            Message::MenuUpdateRecord => "Update Record".to_string(),
            Message::MenuDeleteRecord => "Delete Record".to_string(),
            Message::MenuLogout => "Logout".to_string(),
            Message::PromptChooseOption => "Choose option".to_string(),
            Message::PromptChooseRecord => "Choose record type".to_string(),

            // === SECTION HEADERS ===
            Message::RegistrationHeader => "--- NEW USER REGISTRATION ---".to_string(),
            Message::LoginHeader => "--- USER LOGIN ---".to_string(),
            Message::AddProgramHeader => "--- ADD PROGRAM ---".to_string(),
            Message::RecordParticipationHeader => "--- RECORD PARTICIPATION ---".to_string(),
            Message::RecordAttendanceHeader => "--- RECORD ATTENDANCE ---".to_string(),
            Message::ViewRecordsHeader(kind) => format!("--- {} ---", kind.to_uppercase()),
            Message::UpdateRecordHeader => "--- UPDATE RECORD ---".to_string(),
            Message::DeleteRecordHeader => "--- DELETE RECORD ---".to_string(),
            Message::ConfigHeader => "--- CONFIGURATION ---".to_string(),

            // === AUTHENTICATION MESSAGES ===
            Message::GeneratedUserId(id) => format!("Generated User ID: {}", id),
            Message::RegistrationSuccessful(id) => format!("Registration successful! Your user ID is {}.", id),
            Message::EmailAlreadyRegistered(email) => format!("Email {} is already registered. Try logging in.", email),
            Message::LoginSuccessful { user_name, user_id } => format!("Login successful! Welcome, {} (ID: {})!", user_name, user_id),
            Message::InvalidCredentials(remaining) => format!("Invalid email or password. ({} attempts left)", remaining),
            Message::TooManyLoginAttempts => "Too many failed login attempts. Exiting program...".to_string(),
            Message::LoggedOut => "Logged out successfully!".to_string(),

            // === RECORD MESSAGES ===
            Message::GeneratedProgramId(id) => format!("Generated Program ID: {}", id),
            Message::GeneratedAttendanceId(id) => format!("Generated Attendance ID: {}", id),
            Message::ProgramAdded(id) => format!("Program {} added successfully!", id),
            Message::ProgramUpdated => "Program updated successfully!".to_string(),
            Message::ParticipationRecorded => "Participation recorded!".to_string(),
            Message::ParticipationExists => "Participation record already exists. Use Update Record instead.".to_string(),
            Message::ParticipationUpdated => "Participation updated successfully!".to_string(),
            Message::AttendanceRecorded(id) => format!("Attendance {} recorded!", id),
            Message::RecordDeleted(entity) => format!("{} deleted successfully!", entity),
            Message::DeletionCancelled => "Deletion cancelled.".to_string(),
            Message::RecordNotFound(entity) => format!("{} record not found!", entity),
            Message::CurrentProgramName(name) => format!("Current Program Name: {}", name),
            Message::CurrentDescription(description) => format!("Current Description: {}", description),
            Message::CurrentMeetingsAttended(meetings) => format!("Current Meetings Attended: {}", meetings),
            Message::CurrentAmountReceived(amount) => format!("Current Amount Received: {:.2}", amount),
            Message::NoRecordsFound => "No records found.".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbConnected(path) => format!("Database connection established to {}.", path),
            Message::DbConnectionFailed(error) => format!("Database connection error: {}", error),
            Message::DbClosed => "Database connection closed.".to_string(),
            Message::DbBusy => "The database file is locked. Close other programs using it and try again.".to_string(),
            Message::DuplicateEntry(detail) => format!("A unique entry already exists. Details: {}", detail),
            Message::ForeignKeyFailed(detail) => format!("Foreign key constraint failed. Check that the referenced ID exists. Details: {}", detail),
            Message::StatementFailed(error) => format!("Database error: {}", error),

            // === INPUT MESSAGES ===
            Message::InvalidInput { field, value } => format!("Invalid {}: '{}'. Nothing was saved.", field, value),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),

            // === PROMPTS ===
            Message::PromptName => "Enter Name".to_string(),
            Message::PromptGender => "Enter Gender".to_string(),
            Message::PromptYearLevel => "Enter Year Level".to_string(),
            Message::PromptEmail => "Enter Email".to_string(),
            Message::PromptPassword => "Enter Password".to_string(),
            Message::PromptProgramName => "Enter Program Name".to_string(),
            Message::PromptDescription => "Enter Description".to_string(),
            Message::PromptNewProgramName => "Enter new Program Name".to_string(),
            Message::PromptNewDescription => "Enter new Description".to_string(),
            Message::PromptUserId => "Enter User ID".to_string(),
            Message::PromptProgramId => "Enter Program ID".to_string(),
            Message::PromptAttendanceId => "Enter Attendance ID".to_string(),
            Message::PromptMeetingsAttended => "Enter Meetings Attended".to_string(),
            Message::PromptAmountReceived => "Enter Amount Received".to_string(),
            Message::PromptNewMeetingsAttended => "Enter new Meetings Attended".to_string(),
            Message::PromptNewAmountReceived => "Enter new Amount Received".to_string(),
            Message::PromptMeetingDate => "Enter Meeting Date (YYYY-MM-DD)".to_string(),
            Message::PromptDatabaseFile => "Database file".to_string(),
            Message::PromptMaxLoginAttempts => "Failed logins allowed before exit".to_string(),
            Message::PromptEnforceForeignKeys => "Enforce foreign keys?".to_string(),
            Message::ConfirmDelete(entity) => format!("Are you sure you want to delete this {}?", entity),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::error::AppError;

    #[test]
    fn test_error_messages() {
        let message = Message::from(&AppError::DuplicateEmail("ana@example.com".to_string()));
        assert_eq!(message.to_string(), "Email ana@example.com is already registered. Try logging in.");

        let message = Message::from(&AppError::not_found("Program", 9999));
        assert_eq!(message.to_string(), "Program record not found!");

        let message = Message::from(&AppError::invalid_input("meetings attended", "ten"));
        assert_eq!(message.to_string(), "Invalid meetings attended: 'ten'. Nothing was saved.");
    }

    #[test]
    fn test_invalid_credentials_shows_remaining() {
        assert_eq!(Message::InvalidCredentials(2).to_string(), "Invalid email or password. (2 attempts left)");
    }
}
