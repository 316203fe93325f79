use indexmap::IndexMap;

/// An insertion-ordered table of keys to values.
pub type Table = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Text(String),
    Table(Table),
}

impl Value {
    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Value::Text(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        if let Value::Table(t) = self {
            Some(t)
        } else {
            None
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::Table(_) => "table",
        }
    }

    /// Nesting depth: 0 for scalars, 1 + deepest child for tables.
    pub fn depth(&self) -> usize {
        match self {
            Value::Table(t) => 1 + table_depth(t),
            _ => 0,
        }
    }
}

/// Deepest table nesting below `table` (0 when it holds only scalars).
pub fn table_depth(table: &Table) -> usize {
    table.values().map(Value::depth).max().unwrap_or(0)
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
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

impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Value::Table(t)
    }
}
