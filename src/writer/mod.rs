//! Table serializer.
//!
//! Writes the header and records back out in the delimited format: values
//! in header-column order, `\n` terminators on every line, no quoting or
//! escaping.

use std::fs;
use std::path::Path;

use crate::error::CsvResult;
use crate::models::Table;

/// Serialize `table` to `path`.
///
/// The whole output is assembled in memory and written with a single call,
/// so a failed write does not leave a half-serialized file behind.
pub fn write_csv(table: &Table, path: &Path, delimiter: char) -> CsvResult<()> {
    fs::write(path, to_csv_string(table, delimiter))?;
    Ok(())
}

/// Render `table` in the delimited format.
pub fn to_csv_string(table: &Table, delimiter: char) -> String {
    let delim = delimiter.to_string();

    let mut out = String::new();
    out.push_str(&table.headers().join(&delim));
    out.push('\n');

    for record in table.records() {
        let row: Vec<&str> = table
            .headers()
            .iter()
            .map(|header| record.get(header).unwrap_or(""))
            .collect();
        out.push_str(&row.join(&delim));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CsvError;
    use crate::parser::parse_table;
    use std::fs;

    #[test]
    fn test_render_header_order() {
        let mut table = Table::new(vec!["b".into(), "a".into()]).unwrap();
        let mut record = crate::models::Record::new();
        // Insertion order differs from header order.
        record.set("a", "2".into());
        record.set("b", "1".into());
        table.push_record(record);

        assert_eq!(to_csv_string(&table, ','), "b,a\n1,2\n");
    }

    #[test]
    fn test_round_trip_reproduces_fields() {
        let content = "Name,Email,Billing\nDeniz Dugru,deniz.dugru@gmail.com,100.50\nTest User,test_user@example.com,N/A\n";
        let table = parse_table(content, ',').unwrap();

        assert_eq!(to_csv_string(&table, ','), content);
    }

    #[test]
    fn test_round_trip_normalizes_crlf() {
        let table = parse_table("a,b\r\n1,2\r\n", ',').unwrap();
        assert_eq!(to_csv_string(&table, ','), "a,b\n1,2\n");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = parse_table("a;b\n1;2\n", ';').unwrap();

        write_csv(&table, &path, ';').unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a;b\n1;2\n");
    }

    #[test]
    fn test_write_to_missing_directory_is_io_error() {
        let table = parse_table("a\n1\n", ',').unwrap();
        let result = write_csv(&table, Path::new("/nonexistent/dir/out.csv"), ',');
        assert!(matches!(result, Err(CsvError::Io(_))));
    }
}
