use crate::libs::error::AppError;

#[derive(Debug, Clone)]
pub enum Message {
    // === APPLICATION MESSAGES ===
    AppBanner(String),
    MainMenuHeader(String), // user name
    Exiting,

    // === MENU ITEMS ===
    MenuRegister,
    MenuLogin,
    MenuExit,
    MenuAddProgram,
    MenuRecordParticipation,
    MenuRecordAttendance,
    MenuViewRecords,
    MenuUpdateRecord,
    MenuDeleteRecord,
    MenuLogout,
    PromptChooseOption,
    PromptChooseRecord,

    // === SECTION HEADERS ===
    RegistrationHeader,
    LoginHeader,
    AddProgramHeader,
    RecordParticipationHeader,
    RecordAttendanceHeader,
    ViewRecordsHeader(String), // record kind
    UpdateRecordHeader,
    DeleteRecordHeader,
    ConfigHeader,

    // === AUTHENTICATION MESSAGES ===
    GeneratedUserId(i64),
    RegistrationSuccessful(i64),
    EmailAlreadyRegistered(String),
    LoginSuccessful { user_name: String, user_id: i64 },
    InvalidCredentials(u32), // remaining attempts
    TooManyLoginAttempts,
    LoggedOut,

    // === RECORD MESSAGES ===
    GeneratedProgramId(i64),
    GeneratedAttendanceId(i64),
    ProgramAdded(i64),
    ProgramUpdated,
    ParticipationRecorded,
    ParticipationExists,
    ParticipationUpdated,
    AttendanceRecorded(i64),
    RecordDeleted(&'static str),
    DeletionCancelled,
    RecordNotFound(&'static str),
    CurrentProgramName(String),
    CurrentDescription(String),
    CurrentMeetingsAttended(i64),
    CurrentAmountReceived(f64),
    NoRecordsFound,

    // === DATABASE MESSAGES ===
    DbConnected(String), // path
    DbConnectionFailed(String),
    DbClosed,
    DbBusy,
    DuplicateEntry(String),
    ForeignKeyFailed(String),
    StatementFailed(String),

    // === INPUT MESSAGES ===
    InvalidInput { field: String, value: String },

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,

    // === PROMPTS ===
    PromptName,
    PromptGender,
    PromptYearLevel,
    PromptEmail,
    PromptPassword,
    PromptProgramName,
    PromptDescription,
    PromptNewProgramName,
    PromptNewDescription,
    PromptUserId,
    PromptProgramId,
    PromptAttendanceId,
    PromptMeetingsAttended,
    PromptAmountReceived,
    PromptNewMeetingsAttended,
    PromptNewAmountReceived,
    PromptMeetingDate,
    PromptDatabaseFile,
    PromptMaxLoginAttempts,
    PromptEnforceForeignKeys,
    ConfirmDelete(&'static str), // entity
}

impl From<&AppError> for Message {
    fn from(error: &AppError) -> Self {
        match error {
            AppError::DuplicateEmail(email) => Message::EmailAlreadyRegistered(email.clone()),
            AppError::DuplicateKey(detail) => Message::DuplicateEntry(detail.clone()),
            AppError::NotFound { entity, .. } => Message::RecordNotFound(*entity),
            AppError::InvalidInput { field, value } => Message::InvalidInput {
                field: field.to_string(),
                value: value.clone(),
            },
            AppError::Busy(_) => Message::DbBusy,
            AppError::ForeignKey(detail) => Message::ForeignKeyFailed(detail.clone()),
            AppError::Connection(detail) => Message::DbConnectionFailed(detail.clone()),
            other => Message::StatementFailed(other.to_string()),
        }
    }
}
