//! Masking pass over a loaded table.
//!
//! One pass resolves the strategy, runs the statistics over the name and
//! billing columns, then rewrites the records in place: names and emails
//! through the strategy, numeric billing values with the column average.

use crate::error::{MaskError, MaskResult};
use crate::models::Table;
use crate::stats::{compute_stats, ColumnStats};

use super::strategy::{MaskConfig, MaskStrategy};

/// Column holding the record's display name; required on every record.
pub const NAME_COLUMN: &str = "Name";

/// Column masked together with the name, when present.
pub const EMAIL_COLUMN: &str = "Email";

/// Numeric column replaced by the column average, when present.
pub const BILLING_COLUMN: &str = "Billing";

/// Statistics gathered by one masking pass.
#[derive(Debug, Clone, Copy)]
pub struct MaskReport {
    /// Name-length statistics (display only).
    pub name: ColumnStats,
    /// Billing statistics; the average is substituted into the output.
    pub billing: ColumnStats,
}

/// Applies a masking strategy and the billing substitution in place.
#[derive(Debug, Clone, Default)]
pub struct MaskEngine {
    config: MaskConfig,
}

impl MaskEngine {
    /// Create an engine with an explicit configuration.
    pub fn new(config: MaskConfig) -> Self {
        Self { config }
    }

    /// Mask `table` in place using the strategy registered under `mode`.
    ///
    /// The strategy is resolved and the `Name` column checked on every
    /// record before any value is rewritten, so a failure leaves the table
    /// untouched. Both statistics lines print before masking starts.
    pub fn mask(&self, table: &mut Table, mode: &str) -> MaskResult<MaskReport> {
        let strategy = MaskStrategy::from_mode(mode)
            .ok_or_else(|| MaskError::UnknownMode(mode.to_string()))?;

        let name_lengths = name_lengths(table)?;
        let billing_values = billing_values(table);

        let name = compute_stats(NAME_COLUMN, &name_lengths);
        let billing = compute_stats(BILLING_COLUMN, &billing_values);
        let average = format!("{:.1}", billing.average);

        let headers: Vec<String> = table.headers().to_vec();
        for record in table.records_mut() {
            for column in &headers {
                let Some(value) = record.get(column) else {
                    continue;
                };

                if column == NAME_COLUMN || column == EMAIL_COLUMN {
                    let masked = strategy.apply(value, &self.config);
                    record.set(column, masked);
                } else if column == BILLING_COLUMN && is_numeric_value(value) {
                    record.set(column, average.clone());
                }
            }
        }

        Ok(MaskReport { name, billing })
    }
}

/// Mask with the default configuration.
pub fn mask(table: &mut Table, mode: &str) -> MaskResult<MaskReport> {
    MaskEngine::default().mask(table, mode)
}

/// Per-record character count of the `Name` value with spaces removed.
fn name_lengths(table: &Table) -> MaskResult<Vec<f64>> {
    table
        .records()
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let value = record
                .get(NAME_COLUMN)
                .ok_or_else(|| MaskError::MissingColumn {
                    row,
                    column: NAME_COLUMN.to_string(),
                })?;
            Ok(value.chars().filter(|c| *c != ' ').count() as f64)
        })
        .collect()
}

/// Billing values that pass the numeric predicate and parse as floats.
///
/// A value can pass the predicate and still fail to parse (several dots);
/// it is left out of the sample but still receives the substitution.
fn billing_values(table: &Table) -> Vec<f64> {
    table
        .records()
        .iter()
        .filter_map(|record| record.get(BILLING_COLUMN))
        .filter(|value| is_numeric_value(value))
        .filter_map(|value| value.parse::<f64>().ok())
        .collect()
}

/// Loose numeric detection: all decimal digits once every `.` is removed.
///
/// `"100.50"` and `"12.5.6"` qualify, `"N/A"` and `""` do not. Substitution
/// decisions depend on this exact check, so it stays in sync with the
/// statistics sample above.
pub fn is_numeric_value(value: &str) -> bool {
    let stripped: String = value.chars().filter(|c| *c != '.').collect();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Record, Table};

    fn record(pairs: &[(&str, &str)]) -> Record {
        let mut record = Record::new();
        for (column, value) in pairs {
            record.set(column, value.to_string());
        }
        record
    }

    fn customer_table() -> Table {
        let mut table = Table::new(vec!["Name".into(), "Email".into(), "Billing".into()]).unwrap();
        table.push_record(record(&[
            ("Name", "Deniz Dugru"),
            ("Email", "deniz.dugru@gmail.com"),
            ("Billing", "100.50"),
        ]));
        table.push_record(record(&[
            ("Name", "Test User"),
            ("Email", "test_user@example.com"),
            ("Billing", "200.75"),
        ]));
        table
    }

    #[test]
    fn test_mask_customer_table() {
        let mut table = customer_table();
        let report = mask(&mut table, "character_matching").unwrap();

        assert_eq!(report.billing.average, 150.6);
        assert_eq!(report.name.max, 10.0);
        assert_eq!(report.name.min, 8.0);

        let first = &table.records()[0];
        assert_eq!(first.get("Name"), Some("XXXXX XXXXX"));
        assert_eq!(first.get("Email"), Some("XXXXX.XXXXX@XXXXX.XXX"));
        assert_eq!(first.get("Billing"), Some("150.6"));

        let second = &table.records()[1];
        assert_eq!(second.get("Name"), Some("XXXX XXXX"));
        assert_eq!(second.get("Email"), Some("XXXX_XXXX@XXXXXXX.XXX"));
        assert_eq!(second.get("Billing"), Some("150.6"));
    }

    #[test]
    fn test_non_numeric_billing_left_unchanged() {
        let mut table = Table::new(vec!["Name".into(), "Billing".into()]).unwrap();
        table.push_record(record(&[("Name", "Alice"), ("Billing", "N/A")]));
        table.push_record(record(&[("Name", "Bob"), ("Billing", "100.50")]));

        mask(&mut table, "character_matching").unwrap();

        assert_eq!(table.records()[0].get("Billing"), Some("N/A"));
        assert_eq!(table.records()[1].get("Billing"), Some("100.5"));
    }

    #[test]
    fn test_unknown_mode_leaves_table_unmodified() {
        let mut table = customer_table();
        let before = table.clone();

        let result = mask(&mut table, "rot13");

        assert!(matches!(result, Err(MaskError::UnknownMode(mode)) if mode == "rot13"));
        assert_eq!(table, before);
    }

    #[test]
    fn test_missing_name_fails_before_mutation() {
        let mut table = Table::new(vec!["Name".into(), "Email".into()]).unwrap();
        table.push_record(record(&[("Name", "Alice"), ("Email", "a@b.c")]));
        // Build a record without the Name column.
        table.push_record(record(&[("Email", "b@c.d")]));
        let before = table.clone();

        let result = mask(&mut table, "character_matching");

        assert!(matches!(
            result,
            Err(MaskError::MissingColumn { row: 1, ref column }) if column == "Name"
        ));
        assert_eq!(table, before);
    }

    #[test]
    fn test_table_without_email_or_billing() {
        let mut table = Table::new(vec!["Name".into(), "City".into()]).unwrap();
        table.push_record(record(&[("Name", "Alice"), ("City", "Paris")]));

        mask(&mut table, "character_matching").unwrap();

        assert_eq!(table.records()[0].get("Name"), Some("XXXXX"));
        assert_eq!(table.records()[0].get("City"), Some("Paris"));
    }

    #[test]
    fn test_numeric_predicate() {
        assert!(is_numeric_value("100.50"));
        assert!(is_numeric_value("12.5.6"));
        assert!(is_numeric_value("42"));
        assert!(!is_numeric_value("N/A"));
        assert!(!is_numeric_value(""));
        assert!(!is_numeric_value("..."));
        assert!(!is_numeric_value("-5.0"));
    }

    #[test]
    fn test_multi_dot_billing_still_substituted() {
        let mut table = Table::new(vec!["Name".into(), "Billing".into()]).unwrap();
        table.push_record(record(&[("Name", "Alice"), ("Billing", "100.50")]));
        table.push_record(record(&[("Name", "Bob"), ("Billing", "12.5.6")]));

        let report = mask(&mut table, "character_matching").unwrap();

        // Only the parseable value enters the sample...
        assert_eq!(report.billing.average, 100.5);
        // ...but both predicate-passing values are replaced.
        assert_eq!(table.records()[0].get("Billing"), Some("100.5"));
        assert_eq!(table.records()[1].get("Billing"), Some("100.5"));
    }
}
