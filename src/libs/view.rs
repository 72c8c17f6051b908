use super::messages::Message;
use crate::db::result_set::{display_value, ResultSet};
use crate::msg_info;
use prettytable::{Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints any query result as a table headed by its column labels.
    pub fn result_set(result: &ResultSet) {
        if result.is_empty() {
            msg_info!(Message::NoRecordsFound);
            return;
        }
        Self::table(result).printstd();
    }

    pub fn table(result: &ResultSet) -> Table {
        let mut table = Table::new();

        table.set_titles(Row::new(
            result.columns().iter().map(|column| Cell::new(&column.to_uppercase())).collect(),
        ));
        for row in result.rows() {
            table.add_row(Row::new(row.values().iter().map(|value| Cell::new(&display_value(value))).collect()));
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::types::Value;

    #[test]
    fn test_table_has_one_line_per_row() {
        let result = ResultSet::new(
            vec!["program_id".to_string(), "program_name".to_string()],
            vec![
                vec![Value::Integer(1), Value::Text("Scholarship".to_string())],
                vec![Value::Integer(2), Value::Text("Livelihood".to_string())],
            ],
        );

        let table = View::table(&result);
        assert_eq!(table.len(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("PROGRAM_NAME"));
        assert!(rendered.contains("Livelihood"));
    }
}
