// ============================================================
// GENERIC TABLE
// ============================================================
// In-memory ordered tabular container with typed columns and an
// optional primary key. Join and group operations work by column
// name; column order only matters for display and serialization.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::domain::error::{AppError, Result};

/// Declared type of a column. Missing values default to the empty
/// string or zero accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Int(i64),
}

impl Value {
    pub fn default_for(ty: ColumnType) -> Value {
        match ty {
            ColumnType::Text => Value::Text(String::new()),
            ColumnType::Integer => Value::Int(0),
        }
    }

    /// Integer view of the value; text cells parse leniently to 0.
    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(n) => *n,
            Value::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }

    /// Lowercased rendering used for multi-key sorting.
    pub fn sort_key(&self) -> String {
        self.to_string().to_lowercase()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
}

/// A named-field record; the table fills in defaults for declared
/// columns the record does not carry.
pub type Record = HashMap<String, Value>;

#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Record>,
    primary_key: Option<Vec<String>>,
    seen_keys: HashSet<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a column. Re-declaring an existing name is a no-op, so
    /// schema unions (joins) stay simple.
    pub fn add_column(&mut self, name: &str, ty: ColumnType) {
        if !self.has_column(name) {
            self.columns.push(Column {
                name: name.to_string(),
                ty,
            });
        }
    }

    /// Declare the primary key over existing columns. Existing rows are
    /// re-validated; a duplicate among them fails the declaration.
    pub fn set_primary_key(&mut self, columns: &[&str]) -> Result<()> {
        for name in columns {
            if !self.has_column(name) {
                return Err(AppError::Config(format!(
                    "Unknown primary key column '{}'",
                    name
                )));
            }
        }
        let key_columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let mut seen = HashSet::new();
        for row in &self.rows {
            let key = Self::key_of(row, &key_columns);
            if !seen.insert(key.clone()) {
                return Err(AppError::DuplicateKey(format!(
                    "Primary key ({}) duplicated for value ({})",
                    key_columns.join(", "),
                    key.join(", ")
                )));
            }
        }
        self.primary_key = Some(key_columns);
        self.seen_keys = seen;
        Ok(())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Append a named-field record. Fields without a declared column
    /// are dropped; declared columns the record misses get defaults.
    pub fn append_row(&mut self, mut record: Record) -> Result<()> {
        let mut row = Record::with_capacity(self.columns.len());
        for col in &self.columns {
            let value = record
                .remove(&col.name)
                .unwrap_or_else(|| Value::default_for(col.ty));
            row.insert(col.name.clone(), value);
        }
        if let Some(pk) = &self.primary_key {
            let key = Self::key_of(&row, pk);
            if !self.seen_keys.insert(key.clone()) {
                return Err(AppError::DuplicateKey(format!(
                    "Primary key ({}) duplicated for value ({})",
                    pk.join(", "),
                    key.join(", ")
                )));
            }
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append positional values in declared column order, the way the
    /// upstream payloads arrive. Extra values are dropped, missing ones
    /// default.
    pub fn append_values(&mut self, values: Vec<Value>) -> Result<()> {
        let record: Record = self
            .columns
            .iter()
            .zip(values)
            .map(|(col, value)| (col.name.clone(), value))
            .collect();
        self.append_row(record)
    }

    /// Rename a column, carrying the row values over. Unknown names are
    /// ignored.
    pub fn rename_column(&mut self, from: &str, to: &str) {
        let Some(index) = self.column_index(from) else {
            return;
        };
        self.columns[index].name = to.to_string();
        for row in &mut self.rows {
            if let Some(value) = row.remove(from) {
                row.insert(to.to_string(), value);
            }
        }
        if let Some(pk) = &mut self.primary_key {
            for name in pk.iter_mut() {
                if name == from {
                    *name = to.to_string();
                }
            }
        }
    }

    /// Inner join: one output row per row pair satisfying the
    /// predicate, carrying the union of both schemas. On a column name
    /// collision this table's value wins. Either side empty means an
    /// empty result. The result has no primary key.
    pub fn join<F>(&self, other: &Table, predicate: F) -> Table
    where
        F: Fn(&Record, &Record) -> bool,
    {
        let mut result = Table::new();
        for col in &self.columns {
            result.add_column(&col.name, col.ty);
        }
        for col in &other.columns {
            result.add_column(&col.name, col.ty);
        }
        for row1 in &self.rows {
            for row2 in other.rows.iter().filter(|row2| predicate(row1, row2)) {
                let mut merged = row1.clone();
                for col in &other.columns {
                    if self.has_column(&col.name) {
                        continue;
                    }
                    let value = row2
                        .get(&col.name)
                        .cloned()
                        .unwrap_or_else(|| Value::default_for(col.ty));
                    merged.insert(col.name.clone(), value);
                }
                result.rows.push(merged);
            }
        }
        result
    }

    /// Group rows by `key_column` and sum the integer `sum_column`,
    /// one output row per distinct key in first-seen order. Output
    /// schema is `{key_column: Text, sum_column: Integer}`.
    pub fn group_by(&self, key_column: &str, sum_column: &str) -> Table {
        let mut order: Vec<String> = Vec::new();
        let mut sums: HashMap<String, i64> = HashMap::new();
        for row in &self.rows {
            let key = row
                .get(key_column)
                .map(|v| v.to_string())
                .unwrap_or_default();
            let amount = row.get(sum_column).map(|v| v.as_int()).unwrap_or(0);
            match sums.get_mut(&key) {
                Some(total) => *total += amount,
                None => {
                    order.push(key.clone());
                    sums.insert(key, amount);
                }
            }
        }
        let mut grouped = Table::new();
        grouped.add_column(key_column, ColumnType::Text);
        grouped.add_column(sum_column, ColumnType::Integer);
        for key in order {
            let total = sums[&key];
            let mut record = Record::new();
            record.insert(key_column.to_string(), Value::Text(key));
            record.insert(sum_column.to_string(), Value::Int(total));
            // no primary key declared yet, cannot fail
            let _ = grouped.append_row(record);
        }
        grouped
    }

    /// Keep only the named columns, positioned in the given relative
    /// order. Names absent from the table are ignored. Dropping a
    /// primary key column clears the key.
    pub fn reorder_columns(&mut self, names: &[&str]) {
        let mut reordered = Vec::with_capacity(names.len());
        for name in names {
            if let Some(index) = self.column_index(name) {
                reordered.push(self.columns[index].clone());
            }
        }
        self.columns = reordered;
        if let Some(pk) = &self.primary_key {
            if !pk.iter().all(|name| self.has_column(name)) {
                self.primary_key = None;
                self.seen_keys.clear();
            }
        }
    }

    /// Stable multi-key ascending sort, comparing lowercased rendered
    /// values, first name being the primary sort key. Unknown names are
    /// ignored.
    pub fn sort_by(&mut self, names: &[&str]) {
        let keys: Vec<String> = names
            .iter()
            .filter(|name| self.has_column(name))
            .map(|name| name.to_string())
            .collect();
        if keys.is_empty() {
            return;
        }
        self.rows.sort_by_cached_key(|row| {
            keys.iter()
                .map(|name| row.get(name).map(|v| v.sort_key()).unwrap_or_default())
                .collect::<Vec<_>>()
        });
    }

    /// Flat rendered rows in declared column order, for serialization.
    pub fn to_records(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|col| row.get(&col.name).map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    fn key_of(row: &Record, key_columns: &[String]) -> Vec<String> {
        key_columns
            .iter()
            .map(|name| row.get(name).map(|v| v.to_string()).unwrap_or_default())
            .collect()
    }
}
