//! Numeric typing of text columns and rank sentinel handling.

use crate::table::{Column, ColumnData, Table};

/// Non-numeric ranks the leaderboard uses for competitors without a placement.
pub const RANK_SENTINELS: &[&str] = &["CUT", "WD", "DNF"];

/// `Some(None)` for a blank value, `None` if the value is not a finite number.
fn parse_number(value: &str) -> Option<Option<f64>> {
    let value = value.trim();
    if value.is_empty() {
        return Some(None);
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite()).map(Some)
}

fn coerce_column(column: Column) -> Column {
    let ColumnData::Text(values) = &column.data else {
        return column;
    };
    if values.iter().all(Option::is_none) {
        return column;
    }
    let parsed: Option<Vec<Option<f64>>> = values
        .iter()
        .map(|v| match v {
            Some(s) => parse_number(s),
            None => Some(None),
        })
        .collect();
    match parsed {
        Some(numbers) => Column {
            name: column.name,
            data: ColumnData::Numeric(numbers),
        },
        None => column,
    }
}

/// Converts every text column whose non-null values all parse as numbers.
///
/// Conversion is all-or-nothing per column; a single unparseable value keeps
/// the whole column as text. Blank strings become nulls. Columns with no
/// values at all stay text.
pub fn coerce(table: Table) -> Table {
    table.map_columns(coerce_column)
}

/// Moves rank sentinels into a `rankReason` column and zeroes the rank.
///
/// The `rankReason` column is always present afterwards, null for rows with
/// an ordinary placement.
pub fn normalize_ranks(mut table: Table) -> Table {
    let len = table.len();
    let rank_values = table
        .column("rank")
        .filter(|c| !c.data.is_numeric())
        .map(|c| c.data.display_values());
    let Some(rank_values) = rank_values else {
        table.put_column("rankReason", ColumnData::Text(vec![None; len]));
        return table;
    };

    let (ranks, reasons): (Vec<Option<String>>, Vec<Option<String>>) = rank_values
        .into_iter()
        .map(|rank| match rank {
            Some(r) if RANK_SENTINELS.contains(&r.as_str()) => (Some("0".to_string()), Some(r)),
            other => (other, None),
        })
        .unzip();

    table.put_column("rank", ColumnData::Text(ranks));
    table.put_column("rankReason", ColumnData::Text(reasons));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Cell, Record};

    fn single_column(name: &str, values: &[&str]) -> Table {
        Table::from_records(
            values
                .iter()
                .map(|v| Record::new().with_text(name, Some(v)))
                .collect(),
        )
    }

    #[test]
    fn all_numeric_text_is_converted() {
        let table = coerce(single_column("age", &["1", "2", "3"]));
        assert_eq!(
            table.column("age").unwrap().data,
            ColumnData::Numeric(vec![Some(1.0), Some(2.0), Some(3.0)])
        );
    }

    #[test]
    fn one_bad_value_keeps_text() {
        let before = single_column("age", &["1", "2", "x"]);
        let after = coerce(before.clone());
        assert_eq!(after, before);
    }

    #[test]
    fn nulls_do_not_block_conversion() {
        let table = Table::from_records(vec![
            Record::new().with_text("points", Some("100")),
            Record::new().with_text("points", None),
        ]);
        let table = coerce(table);
        assert_eq!(
            table.column("points").unwrap().data,
            ColumnData::Numeric(vec![Some(100.0), None])
        );
    }

    #[test]
    fn blank_strings_become_null() {
        let table = coerce(single_column("lane", &["7", "", "  "]));
        assert_eq!(
            table.column("lane").unwrap().data,
            ColumnData::Numeric(vec![Some(7.0), None, None])
        );
    }

    #[test]
    fn blank_rank_does_not_block_numeric_rank() {
        let table = coerce(normalize_ranks(single_column("rank", &["1", "CUT", ""])));
        assert_eq!(
            table.column("rank").unwrap().data,
            ColumnData::Numeric(vec![Some(1.0), Some(0.0), None])
        );
        assert_eq!(
            table.column("rankReason").unwrap().data,
            ColumnData::Text(vec![None, Some("CUT".into()), None])
        );
    }

    #[test]
    fn all_null_column_stays_text() {
        let table = Table::from_records(vec![Record::new().with_text("video", None)]);
        let table = coerce(table);
        assert_eq!(
            table.column("video").unwrap().data,
            ColumnData::Text(vec![None])
        );
    }

    #[test]
    fn non_finite_text_is_not_numeric() {
        let table = coerce(single_column("score", &["1", "NaN"]));
        assert!(!table.column("score").unwrap().data.is_numeric());
        let table = coerce(single_column("score", &["inf"]));
        assert!(!table.column("score").unwrap().data.is_numeric());
    }

    #[test]
    fn coerce_is_idempotent() {
        let table = Table::from_records(vec![
            Record::new()
                .with_text("rank", Some("1"))
                .with_text("scoreDisplay", Some("280 lb"))
                .with_number("year", Some(2022.0)),
            Record::new()
                .with_text("rank", Some("2"))
                .with_text("scoreDisplay", Some("31:50.00"))
                .with_number("year", Some(2022.0)),
        ]);
        let once = coerce(table);
        let twice = coerce(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn sentinel_rank_moves_to_reason() {
        let table = normalize_ranks(single_column("rank", &["1", "CUT", "WD", "DNF"]));
        assert_eq!(
            table.column("rank").unwrap().data,
            ColumnData::Text(vec![
                Some("1".into()),
                Some("0".into()),
                Some("0".into()),
                Some("0".into())
            ])
        );
        assert_eq!(
            table.column("rankReason").unwrap().data,
            ColumnData::Text(vec![
                None,
                Some("CUT".into()),
                Some("WD".into()),
                Some("DNF".into())
            ])
        );
    }

    #[test]
    fn normalized_rank_coerces_to_numeric() {
        let table = coerce(normalize_ranks(single_column("rank", &["3", "CUT"])));
        assert_eq!(
            table.column("rank").unwrap().data,
            ColumnData::Numeric(vec![Some(3.0), Some(0.0)])
        );
        assert_eq!(table.row(1)[1], Cell::Text(Some("CUT".into())));
    }

    #[test]
    fn rank_reason_present_without_sentinels() {
        let table = normalize_ranks(single_column("rank", &["1", "2"]));
        assert_eq!(
            table.column("rankReason").unwrap().data,
            ColumnData::Text(vec![None, None])
        );
    }

    #[test]
    fn normalize_ranks_on_empty_table() {
        let table = normalize_ranks(Table::default());
        assert_eq!(table.column_names(), vec!["rankReason"]);
        assert!(table.is_empty());
    }
}
