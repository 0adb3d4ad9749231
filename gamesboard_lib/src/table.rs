//! Column-oriented in-memory tables built from flattened leaderboard records.

use std::fmt;

/// A single value in a record or table row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(Option<String>),
    Number(Option<f64>),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Text(None) | Cell::Number(None))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(Some(s)) => write!(f, "{}", s),
            Cell::Number(Some(n)) => write!(f, "{}", n),
            Cell::Text(None) | Cell::Number(None) => Ok(()),
        }
    }
}

/// One flattened row: named cells in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    cells: Vec<(String, Cell)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: &str, value: Option<&str>) -> Self {
        self.set(name, Cell::Text(value.map(str::to_string)));
        self
    }

    pub fn with_number(mut self, name: &str, value: Option<f64>) -> Self {
        self.set(name, Cell::Number(value));
        self
    }

    /// Replaces the cell named `name`, or appends it as the last column.
    pub fn set(&mut self, name: &str, cell: Cell) {
        match self.cells.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = cell,
            None => self.cells.push((name.to_string(), cell)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.cells.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    pub fn cells(&self) -> &[(String, Cell)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Typed storage for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Text(Vec<Option<String>>),
    Numeric(Vec<Option<f64>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Text(v) => v.len(),
            ColumnData::Numeric(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnData::Numeric(_))
    }

    pub fn cell(&self, row: usize) -> Cell {
        match self {
            ColumnData::Text(v) => Cell::Text(v.get(row).cloned().flatten()),
            ColumnData::Numeric(v) => Cell::Number(v.get(row).copied().flatten()),
        }
    }

    /// Values rendered as text; numbers use their display form.
    pub fn display_values(&self) -> Vec<Option<String>> {
        match self {
            ColumnData::Text(v) => v.clone(),
            ColumnData::Numeric(v) => v.iter().map(|n| n.map(|n| n.to_string())).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// A rectangular table: every column holds exactly `len` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    len: usize,
}

impl Table {
    /// Builds a table from records. Columns appear in first-seen order; a
    /// record without a column gets a null there. A column is numeric only
    /// if every non-null cell in it is a number.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut names: Vec<String> = Vec::new();
        for record in &records {
            for (name, _) in record.cells() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.clone());
                }
            }
        }

        let columns = names
            .into_iter()
            .map(|name| {
                let cells: Vec<Option<&Cell>> = records.iter().map(|r| r.get(&name)).collect();
                let numeric = cells
                    .iter()
                    .flatten()
                    .filter(|c| !c.is_null())
                    .all(|c| matches!(c, Cell::Number(_)));
                let data = if numeric {
                    ColumnData::Numeric(
                        cells
                            .iter()
                            .map(|c| match c {
                                Some(Cell::Number(n)) => *n,
                                _ => None,
                            })
                            .collect(),
                    )
                } else {
                    ColumnData::Text(
                        cells
                            .iter()
                            .map(|c| match c {
                                Some(Cell::Text(s)) => s.clone(),
                                Some(Cell::Number(n)) => n.map(|n| n.to_string()),
                                None => None,
                            })
                            .collect(),
                    )
                };
                Column { name, data }
            })
            .collect();

        Self {
            columns,
            len: records.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Replaces or appends a column whose length the caller derived from this table.
    pub(crate) fn put_column(&mut self, name: &str, data: ColumnData) {
        debug_assert_eq!(data.len(), self.len, "column {} has the wrong length", name);
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.data = data,
            None => self.columns.push(Column {
                name: name.to_string(),
                data,
            }),
        }
    }

    /// Applies `f` to every column, keeping order and row count.
    pub(crate) fn map_columns<F>(self, f: F) -> Self
    where
        F: FnMut(Column) -> Column,
    {
        let len = self.len;
        Self {
            columns: self.columns.into_iter().map(f).collect(),
            len,
        }
    }

    /// Row `idx` as cells in column order.
    pub fn row(&self, idx: usize) -> Vec<Cell> {
        self.columns.iter().map(|c| c.data.cell(idx)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..self.len).map(move |idx| self.row(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new()
                .with_text("competitorId", Some("1"))
                .with_number("heightInCm", Some(177.8)),
            Record::new()
                .with_text("competitorId", Some("2"))
                .with_text("affiliateName", Some("CrossFit Mayhem")),
        ]
    }

    #[test]
    fn columns_in_first_seen_order() {
        let table = Table::from_records(sample());
        assert_eq!(
            table.column_names(),
            vec!["competitorId", "heightInCm", "affiliateName"]
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_cells_are_null() {
        let table = Table::from_records(sample());
        assert_eq!(
            table.column("heightInCm").unwrap().data,
            ColumnData::Numeric(vec![Some(177.8), None])
        );
        assert_eq!(
            table.column("affiliateName").unwrap().data,
            ColumnData::Text(vec![None, Some("CrossFit Mayhem".into())])
        );
    }

    #[test]
    fn mixed_cells_become_text() {
        let records = vec![
            Record::new().with_number("rank", Some(1.0)),
            Record::new().with_text("rank", Some("CUT")),
        ];
        let table = Table::from_records(records);
        assert_eq!(
            table.column("rank").unwrap().data,
            ColumnData::Text(vec![Some("1".into()), Some("CUT".into())])
        );
    }

    #[test]
    fn empty_records_make_empty_table() {
        let table = Table::from_records(Vec::new());
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[test]
    fn null_text_does_not_block_numeric_column() {
        let records = vec![
            Record::new().with_number("heightInCm", Some(177.8)),
            Record::new().with_text("heightInCm", None),
        ];
        let table = Table::from_records(records);
        assert_eq!(
            table.column("heightInCm").unwrap().data,
            ColumnData::Numeric(vec![Some(177.8), None])
        );
    }

    #[test]
    fn rows_render_cells() {
        let table = Table::from_records(sample());
        let rows: Vec<Vec<String>> = table
            .rows()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        assert_eq!(rows[0], vec!["1", "177.8", ""]);
        assert_eq!(rows[1], vec!["2", "", "CrossFit Mayhem"]);
    }
}
