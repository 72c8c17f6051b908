use super::db::Db;
use super::result_set::{ResultSet, Row};
use crate::libs::error::AppResult;
use crate::sql_params;

pub const ATTENDANCE_TABLE: &str = "attendance";
pub const ATTENDANCE_ID: &str = "attendance_id";

const INSERT_ATTENDANCE: &str = "INSERT INTO attendance (attendance_id, user_id, program_id, meeting_date) VALUES (?1, ?2, ?3, ?4)";
const DELETE_ATTENDANCE: &str = "DELETE FROM attendance WHERE attendance_id = ?1";
const SELECT_ATTENDANCE_BY_ID: &str = "SELECT * FROM attendance WHERE attendance_id = ?1";
const SELECT_ATTENDANCES: &str = "SELECT * FROM attendance ORDER BY attendance_id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    pub id: i64,
    pub user_id: i64,
    pub program_id: i64,
    /// Stored text. New rows are written as `YYYY-MM-DD`; older files may hold
    /// other spellings, which are kept as they are.
    pub meeting_date: String,
}

impl Attendance {
    fn from_row(row: &Row) -> AppResult<Self> {
        Ok(Self {
            id: row.get_i64("attendance_id")?,
            user_id: row.get_i64("user_id")?,
            program_id: row.get_i64("program_id")?,
            meeting_date: row.get_string("meeting_date")?,
        })
    }
}

pub struct Attendances<'a> {
    db: &'a Db,
}

impl<'a> Attendances<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn next_id(&self) -> AppResult<i64> {
        self.db.next_id(ATTENDANCE_TABLE, ATTENDANCE_ID)
    }

    pub fn insert(&self, attendance: &Attendance) -> AppResult<usize> {
        self.db.execute(
            INSERT_ATTENDANCE,
            &sql_params![attendance.id, attendance.user_id, attendance.program_id, &attendance.meeting_date],
        )
    }

    pub fn delete(&self, id: i64) -> AppResult<usize> {
        self.db.execute(DELETE_ATTENDANCE, &sql_params![id])
    }

    pub fn get(&self, id: i64) -> AppResult<Option<Attendance>> {
        let result = self.db.query(SELECT_ATTENDANCE_BY_ID, &sql_params![id])?;
        result.first().map(|row| Attendance::from_row(&row)).transpose()
    }

    pub fn list(&self) -> AppResult<Vec<Attendance>> {
        self.db.query(SELECT_ATTENDANCES, &[])?.rows().map(|row| Attendance::from_row(&row)).collect()
    }

    pub fn view(&self) -> AppResult<ResultSet> {
        self.db.query(SELECT_ATTENDANCES, &[])
    }
}
