//! Feature column schema
//!
//! The regression model was trained against an ordered column list: three
//! fixed numeric slots (area, bathrooms, bedrooms) followed by one one-hot
//! indicator per known location. Column order must match the training-time
//! order exactly; a reordered schema silently corrupts predictions, so the
//! schema is an explicit, validated object rather than bare positional
//! indexing.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Index of the area slot in every feature vector.
pub const AREA_SLOT: usize = 0;
/// Index of the bathroom-count slot.
pub const BATH_SLOT: usize = 1;
/// Index of the bedroom-count slot.
pub const BHK_SLOT: usize = 2;
/// Number of fixed numeric slots before the one-hot location region.
pub const FIXED_SLOTS: usize = 3;

/// Ordered feature columns for a trained pricing model
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<String>,
    location_index: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Build a schema from an ordered column list.
    ///
    /// The first three columns are the fixed numeric slots; everything after
    /// them is treated as a one-hot location indicator.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        if columns.len() <= FIXED_SLOTS {
            return Err(Error::InvalidSchema(format!(
                "need at least {} columns (3 numeric slots plus one location), got {}",
                FIXED_SLOTS + 1,
                columns.len()
            )));
        }

        let mut location_index = HashMap::new();
        for (i, name) in columns.iter().enumerate().skip(FIXED_SLOTS) {
            if location_index.insert(name.clone(), i).is_some() {
                return Err(Error::InvalidSchema(format!(
                    "duplicate location column: {}",
                    name
                )));
            }
        }

        Ok(Self {
            columns,
            location_index,
        })
    }

    /// Load a schema from a JSON file with a `data_columns` key.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|e| Error::io(path.as_ref(), e))?;
        let value: serde_json::Value = serde_json::from_str(&content)?;

        let raw = value
            .get("data_columns")
            .and_then(|v| v.as_array())
            .ok_or(Error::MissingDataColumns)?;

        let columns = raw
            .iter()
            .map(|v| {
                v.as_str().map(str::to_owned).ok_or_else(|| {
                    Error::InvalidSchema("data_columns entries must be strings".into())
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(columns)
    }

    /// Total number of feature columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All column names in training order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Location names, in one-hot slot order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.columns[FIXED_SLOTS..].iter().map(String::as_str)
    }

    /// Slot index for a location, if it was in the training vocabulary.
    pub fn location_slot(&self, location: &str) -> Option<usize> {
        self.location_index.get(location).copied()
    }
}
