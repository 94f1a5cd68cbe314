use serde_json::Value;
use std::fmt::Write as _;
use thiserror::Error;

/// Every failure the validator can report. The `Display` output is the
/// exact line printed to the user.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Error: File not found at {path}")]
    FileNotFound { path: String },

    #[error("Error: Could not read {path}. {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: Invalid JSON format. {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("Error: Root element must be a list")]
    InvalidRootType,

    #[error("Error: Vehicle at index {index} missing keys: {}", key_list(.keys))]
    MissingFields {
        index: usize,
        keys: Vec<&'static str>,
    },

    #[error("Error: 'specs' must be a list for vehicle ID {}", display_id(.id.as_ref()))]
    InvalidSpecsType { id: Option<Value> },

    #[error("Error: Invalid spec format in vehicle ID {}", display_id(.id.as_ref()))]
    InvalidSpecEntry { id: Option<Value> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Unreadable,
    MalformedInput,
    InvalidRootType,
    MissingFields,
    InvalidSpecsType,
    InvalidSpecEntry,
}

impl ErrorKind {
    /// Schema-shape failures, as opposed to I/O-level ones.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidRootType
                | ErrorKind::MissingFields
                | ErrorKind::InvalidSpecsType
                | ErrorKind::InvalidSpecEntry
        )
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::FileNotFound { .. } => ErrorKind::FileNotFound,
            ValidationError::Unreadable { .. } => ErrorKind::Unreadable,
            ValidationError::MalformedInput(_) => ErrorKind::MalformedInput,
            ValidationError::InvalidRootType => ErrorKind::InvalidRootType,
            ValidationError::MissingFields { .. } => ErrorKind::MissingFields,
            ValidationError::InvalidSpecsType { .. } => ErrorKind::InvalidSpecsType,
            ValidationError::InvalidSpecEntry { .. } => ErrorKind::InvalidSpecEntry,
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// `['make', 'model']`
fn key_list(keys: &[&str]) -> String {
    let quoted: Vec<String> = keys.iter().map(|k| format!("'{}'", k)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Renders a record id for messages:
/// `None` for an absent or null id, strings unquoted.
pub fn display_id(id: Option<&Value>) -> String {
    match id {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            let mut out = String::new();
            write_repr(&mut out, other);
            out
        }
    }
}

fn write_repr(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::String(s) => {
            let _ = write!(out, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"));
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "'{}': ", k);
                write_repr(out, v);
            }
            out.push('}');
        }
    }
}
