use super::db::Db;
use super::result_set::{ResultSet, Row};
use crate::libs::error::AppResult;
use crate::sql_params;

pub const USER_TABLE: &str = "user";
pub const USER_ID: &str = "user_id";

const INSERT_USER: &str = "INSERT INTO user (user_id, name, gender, year_level, email, password) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_USER_BY_EMAIL: &str = "SELECT user_id, name, gender, year_level, email FROM user WHERE email = ?1";
const SELECT_USER_BY_CREDENTIALS: &str = "SELECT user_id, name FROM user WHERE email = ?1 AND password = ?2";
const SELECT_USERS: &str = "SELECT user_id, name, gender, year_level, email FROM user ORDER BY user_id";
const COUNT_USERS: &str = "SELECT COUNT(*) AS total FROM user";

/// Registration details apart from the password.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub name: String,
    pub gender: String,
    pub year_level: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub profile: UserProfile,
}

impl User {
    fn from_row(row: &Row) -> AppResult<Self> {
        Ok(Self {
            id: row.get_i64("user_id")?,
            profile: UserProfile {
                name: row.get_string("name")?,
                gender: row.get_string("gender")?,
                year_level: row.get_string("year_level")?,
                email: row.get_string("email")?,
            },
        })
    }
}

pub struct Users<'a> {
    db: &'a Db,
}

impl<'a> Users<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn next_id(&self) -> AppResult<i64> {
        self.db.next_id(USER_TABLE, USER_ID)
    }

    pub fn insert(&self, id: i64, profile: &UserProfile, password_digest: &str) -> AppResult<usize> {
        self.db.execute(
            INSERT_USER,
            &sql_params![id, &profile.name, &profile.gender, &profile.year_level, &profile.email, password_digest],
        )
    }

    pub fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = self.db.query(SELECT_USER_BY_EMAIL, &sql_params![email])?;
        result.first().map(|row| User::from_row(&row)).transpose()
    }

    /// `(user_id, name)` of the row matching both email and digest.
    pub fn find_by_credentials(&self, email: &str, password_digest: &str) -> AppResult<Option<(i64, String)>> {
        let result = self.db.query(SELECT_USER_BY_CREDENTIALS, &sql_params![email, password_digest])?;
        result
            .first()
            .map(|row| Ok((row.get_i64("user_id")?, row.get_string("name")?)))
            .transpose()
    }

    pub fn list(&self) -> AppResult<Vec<User>> {
        self.db.query(SELECT_USERS, &[])?.rows().map(|row| User::from_row(&row)).collect()
    }

    pub fn count(&self) -> AppResult<i64> {
        let result = self.db.query(COUNT_USERS, &[])?;
        match result.first() {
            Some(row) => row.get_i64("total"),
            None => Ok(0),
        }
    }

    /// Listing for display; the password digest is not selected.
    pub fn view(&self) -> AppResult<ResultSet> {
        self.db.query(SELECT_USERS, &[])
    }
}
