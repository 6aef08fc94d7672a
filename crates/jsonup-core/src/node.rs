// Classification of tree nodes. The tree itself is a `serde_json::Value`
// built with `preserve_order`, so objects iterate in insertion order.
use serde_json::Value;

/// Scalar kinds that may be edited at a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    String,
    Integer,
    Float,
    Boolean,
}

impl LeafKind {
    /// Returns `None` for null, arrays and objects.
    pub fn of(v: &Value) -> Option<LeafKind> {
        match v {
            Value::String(_) => Some(LeafKind::String),
            Value::Number(n) if n.is_f64() => Some(LeafKind::Float),
            Value::Number(_) => Some(LeafKind::Integer),
            Value::Bool(_) => Some(LeafKind::Boolean),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LeafKind::String => "string",
            LeafKind::Integer => "integer",
            LeafKind::Float => "float",
            LeafKind::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for LeafKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        other => LeafKind::of(other).map(LeafKind::name).unwrap_or("unknown"),
    }
}

pub(crate) fn child_label(parent: &str, key: &str) -> String {
    if parent.is_empty() { key.to_string() } else { format!("{parent}.{key}") }
}

pub(crate) fn element_label(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}
