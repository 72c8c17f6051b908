use super::db::Db;
use super::result_set::{ResultSet, Row};
use crate::libs::error::AppResult;
use crate::sql_params;

const INSERT_PARTICIPATION: &str =
    "INSERT INTO participation (user_id, program_id, meetings_attended, amount_received) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_PARTICIPATION: &str =
    "UPDATE participation SET meetings_attended = ?3, amount_received = ?4 WHERE user_id = ?1 AND program_id = ?2";
const DELETE_PARTICIPATION: &str = "DELETE FROM participation WHERE user_id = ?1 AND program_id = ?2";
const SELECT_PARTICIPATION_BY_KEY: &str = "SELECT * FROM participation WHERE user_id = ?1 AND program_id = ?2";
const SELECT_PARTICIPATIONS: &str = "SELECT * FROM participation ORDER BY user_id, program_id";

/// Composite key of a participation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipationKey {
    pub user_id: i64,
    pub program_id: i64,
}

impl std::fmt::Display for ParticipationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user {} / program {}", self.user_id, self.program_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participation {
    pub key: ParticipationKey,
    pub meetings_attended: i64,
    pub amount_received: f64,
}

impl Participation {
    fn from_row(row: &Row) -> AppResult<Self> {
        Ok(Self {
            key: ParticipationKey {
                user_id: row.get_i64("user_id")?,
                program_id: row.get_i64("program_id")?,
            },
            meetings_attended: row.get_i64("meetings_attended")?,
            amount_received: row.get_f64("amount_received")?,
        })
    }
}

pub struct Participations<'a> {
    db: &'a Db,
}

impl<'a> Participations<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn insert(&self, participation: &Participation) -> AppResult<usize> {
        let Participation {
            key,
            meetings_attended,
            amount_received,
        } = participation;
        self.db.execute(
            INSERT_PARTICIPATION,
            &sql_params![key.user_id, key.program_id, *meetings_attended, *amount_received],
        )
    }

    pub fn update(&self, participation: &Participation) -> AppResult<usize> {
        let Participation {
            key,
            meetings_attended,
            amount_received,
        } = participation;
        self.db.execute(
            UPDATE_PARTICIPATION,
            &sql_params![key.user_id, key.program_id, *meetings_attended, *amount_received],
        )
    }

    pub fn delete(&self, key: ParticipationKey) -> AppResult<usize> {
        self.db.execute(DELETE_PARTICIPATION, &sql_params![key.user_id, key.program_id])
    }

    pub fn get(&self, key: ParticipationKey) -> AppResult<Option<Participation>> {
        let result = self.db.query(SELECT_PARTICIPATION_BY_KEY, &sql_params![key.user_id, key.program_id])?;
        result.first().map(|row| Participation::from_row(&row)).transpose()
    }

    pub fn exists(&self, key: ParticipationKey) -> AppResult<bool> {
        self.db.exists(SELECT_PARTICIPATION_BY_KEY, &sql_params![key.user_id, key.program_id])
    }

    pub fn list(&self) -> AppResult<Vec<Participation>> {
        self.db
            .query(SELECT_PARTICIPATIONS, &[])?
            .rows()
            .map(|row| Participation::from_row(&row))
            .collect()
    }

    pub fn view(&self) -> AppResult<ResultSet> {
        self.db.query(SELECT_PARTICIPATIONS, &[])
    }
}
