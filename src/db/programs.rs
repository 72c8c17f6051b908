use super::db::Db;
use super::result_set::{ResultSet, Row};
use crate::libs::error::AppResult;
use crate::sql_params;

pub const PROGRAM_TABLE: &str = "program";
pub const PROGRAM_ID: &str = "program_id";

const INSERT_PROGRAM: &str = "INSERT INTO program (program_id, program_name, description) VALUES (?1, ?2, ?3)";
const UPDATE_PROGRAM: &str = "UPDATE program SET program_name = ?2, description = ?3 WHERE program_id = ?1";
const DELETE_PROGRAM: &str = "DELETE FROM program WHERE program_id = ?1";
const SELECT_PROGRAM_BY_ID: &str = "SELECT * FROM program WHERE program_id = ?1";
const SELECT_PROGRAMS: &str = "SELECT * FROM program ORDER BY program_id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Program {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    fn from_row(row: &Row) -> AppResult<Self> {
        Ok(Self {
            id: row.get_i64("program_id")?,
            name: row.get_string("program_name")?,
            description: row.get_string("description")?,
        })
    }
}

pub struct Programs<'a> {
    db: &'a Db,
}

impl<'a> Programs<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn next_id(&self) -> AppResult<i64> {
        self.db.next_id(PROGRAM_TABLE, PROGRAM_ID)
    }

    pub fn insert(&self, program: &Program) -> AppResult<usize> {
        self.db.execute(INSERT_PROGRAM, &sql_params![program.id, &program.name, &program.description])
    }

    pub fn update(&self, program: &Program) -> AppResult<usize> {
        self.db.execute(UPDATE_PROGRAM, &sql_params![program.id, &program.name, &program.description])
    }

    pub fn delete(&self, id: i64) -> AppResult<usize> {
        self.db.execute(DELETE_PROGRAM, &sql_params![id])
    }

    pub fn get(&self, id: i64) -> AppResult<Option<Program>> {
        let result = self.db.query(SELECT_PROGRAM_BY_ID, &sql_params![id])?;
        result.first().map(|row| Program::from_row(&row)).transpose()
    }

    pub fn list(&self) -> AppResult<Vec<Program>> {
        self.db.query(SELECT_PROGRAMS, &[])?.rows().map(|row| Program::from_row(&row)).collect()
    }

    pub fn view(&self) -> AppResult<ResultSet> {
        self.db.query(SELECT_PROGRAMS, &[])
    }
}
