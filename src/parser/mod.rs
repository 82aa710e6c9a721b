//! Table loader with encoding and delimiter auto-detection.
//!
//! Lines are split on a single-character delimiter; quoting and embedded
//! delimiters are not supported. Field values are stored verbatim so that
//! loading a file and writing it back reproduces the original fields.

use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::{Record, Table};

/// Result of loading with metadata.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The loaded table.
    pub table: Table,
    /// Detected encoding.
    pub encoding: String,
    /// Detected or explicitly passed delimiter.
    pub delimiter: char,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// Unknown encodings fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.to_string()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [';', ',', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse decoded content into a [`Table`].
///
/// Line 1 is the header. Every following non-blank line is split on the
/// delimiter and zipped positionally with the header: a line with fewer
/// fields than the header fails with [`CsvError::MalformedRow`], extra
/// fields are silently dropped.
///
/// # Example
/// ```ignore
/// use csvmask::parse_table;
///
/// let table = parse_table("Name,Email\nAlice,alice@example.com", ',').unwrap();
/// assert_eq!(table.row_count(), 1);
/// assert_eq!(table.records()[0].get("Name"), Some("Alice"));
/// ```
pub fn parse_table(content: &str, delimiter: char) -> CsvResult<Table> {
    let mut lines = content.lines().enumerate();

    let (_, header_line) = lines.next().ok_or(CsvError::EmptyFile)?;
    let headers: Vec<String> = header_line.split(delimiter).map(String::from).collect();
    let mut table = Table::new(headers)?;
    let expected = table.headers().len();

    for (line_idx, line) in lines {
        let line_num = line_idx + 1;

        if line.trim().is_empty() {
            continue;
        }

        let values: Vec<&str> = line.split(delimiter).collect();
        if values.len() < expected {
            return Err(CsvError::MalformedRow {
                line: line_num,
                expected,
                found: values.len(),
            });
        }

        let mut record = Record::new();
        for (i, header) in table.headers().iter().enumerate() {
            record.set(header, values[i].to_string());
        }
        table.push_record(record);
    }

    Ok(table)
}

/// Load a delimited file into a [`Table`] with an explicit delimiter.
pub fn load_csv<P: AsRef<Path>>(path: P, delimiter: char) -> CsvResult<Table> {
    Ok(load_csv_auto(path, Some(delimiter))?.table)
}

/// Load a delimited file, detecting encoding and (optionally) delimiter.
///
/// Pass `None` to pick the delimiter by counting candidates in the header
/// line; the default is `,` when nothing stands out.
pub fn load_csv_auto<P: AsRef<Path>>(path: P, delimiter: Option<char>) -> CsvResult<LoadResult> {
    let bytes = std::fs::read(path.as_ref())?;
    let encoding = detect_encoding(&bytes);
    let content = decode_content(&bytes, &encoding);
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
    let table = parse_table(&content, delimiter)?;

    Ok(LoadResult {
        table,
        encoding,
        delimiter,
    })
}
