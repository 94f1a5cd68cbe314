use crate::utils::error::{Result, ValidationError};
use crate::utils::validation::{has_all_keys, missing_keys, Validate};
use serde_json::Value;

pub const DEFAULT_DATA_PATH: &str = "assets/data/vehicles.json";

/// Keys every vehicle record must carry, in reporting order.
pub const REQUIRED_KEYS: [&str; 10] = [
    "id", "make", "model", "price", "year", "mileage", "image", "tags", "type", "specs",
];

pub const SPEC_ENTRY_KEYS: [&str; 2] = ["label", "value"];

/// The parsed file: an ordered list of vehicle records.
#[derive(Debug, Clone)]
pub struct Document {
    records: Vec<Value>,
}

impl Document {
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(records) => Ok(Self { records }),
            _ => Err(ValidationError::InvalidRootType),
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, data)| Record { index, data })
    }
}

impl Validate for Document {
    /// Records are checked in order; the lowest failing index wins.
    fn validate(&self) -> Result<()> {
        for record in self.records() {
            record.validate()?;
        }
        Ok(())
    }
}

/// One vehicle, borrowed from its document.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    index: usize,
    data: &'a Value,
}

impl<'a> Record<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> Option<&'a Value> {
        self.data.get("id")
    }

    pub fn missing_keys(&self) -> Vec<&'static str> {
        missing_keys(self.data, &REQUIRED_KEYS)
    }

    /// `None` when `specs` is absent or not a list.
    pub fn specs(&self) -> Option<impl Iterator<Item = SpecEntry<'a>>> {
        self.data
            .get("specs")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(|data| SpecEntry { data }))
    }
}

impl Validate for Record<'_> {
    fn validate(&self) -> Result<()> {
        let missing = self.missing_keys();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields {
                index: self.index,
                keys: missing,
            });
        }

        let specs = self.specs().ok_or_else(|| ValidationError::InvalidSpecsType {
            id: self.id().cloned(),
        })?;

        for entry in specs {
            if !entry.is_well_formed() {
                return Err(ValidationError::InvalidSpecEntry {
                    id: self.id().cloned(),
                });
            }
        }

        Ok(())
    }
}

/// A `{label, value}` pair inside a record's `specs`.
#[derive(Debug, Clone, Copy)]
pub struct SpecEntry<'a> {
    data: &'a Value,
}

impl SpecEntry<'_> {
    pub fn is_well_formed(&self) -> bool {
        has_all_keys(self.data, &SPEC_ENTRY_KEYS)
    }
}
