use rusqlite::Connection;

const SCHEMA_USER: &str = "CREATE TABLE IF NOT EXISTS user (
    user_id INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    gender TEXT,
    year_level TEXT,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)";
const SCHEMA_PROGRAM: &str = "CREATE TABLE IF NOT EXISTS program (
    program_id INTEGER NOT NULL PRIMARY KEY,
    program_name TEXT NOT NULL,
    description TEXT
)";
// No uniqueness on (user_id, program_id); the record service pre-checks it.
const SCHEMA_PARTICIPATION: &str = "CREATE TABLE IF NOT EXISTS participation (
    user_id INTEGER NOT NULL REFERENCES user(user_id),
    program_id INTEGER NOT NULL REFERENCES program(program_id),
    meetings_attended INTEGER NOT NULL DEFAULT 0,
    amount_received REAL NOT NULL DEFAULT 0
)";
const SCHEMA_ATTENDANCE: &str = "CREATE TABLE IF NOT EXISTS attendance (
    attendance_id INTEGER NOT NULL PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES user(user_id),
    program_id INTEGER NOT NULL REFERENCES program(program_id),
    meeting_date TEXT NOT NULL
)";

/// Creates the four application tables when they are missing.
pub fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    for schema in [SCHEMA_USER, SCHEMA_PROGRAM, SCHEMA_PARTICIPATION, SCHEMA_ATTENDANCE] {
        conn.execute(schema, [])?;
    }
    Ok(())
}
