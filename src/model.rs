//! Pre-trained regression model artifacts
//!
//! The model is produced by an external training pipeline and consumed here
//! read-only. The artifact is a JSON file holding the fitted coefficients and
//! intercept; the column schema lives in a separate `columns.json`. Both are
//! loaded once at startup and shared immutably afterwards.

use crate::error::{Error, Result};
use crate::schema::FeatureSchema;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Anything that can turn a feature vector into a price.
///
/// The pricing engine is generic over this trait so tests can substitute a
/// stub model for the fitted artifact.
pub trait Regressor {
    fn predict(&self, features: &Array1<f64>) -> Result<f64>;
}

/// Serialized form of a fitted linear model
#[derive(Debug, Serialize, Deserialize)]
struct LinearModelFile {
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Fitted linear regression model: prediction is dot(x, w) + b
#[derive(Debug, Clone)]
pub struct LinearModel {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: Array1<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Load fitted weights from a JSON artifact.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|e| Error::io(path.as_ref(), e))?;
        let file: LinearModelFile = serde_json::from_str(&content)?;

        Ok(Self::new(Array1::from_vec(file.coefficients), file.intercept))
    }

    /// Number of features the model was trained on.
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }
}

impl Regressor for LinearModel {
    fn predict(&self, features: &Array1<f64>) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(Error::DimensionMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }

        Ok(self.coefficients.dot(features) + self.intercept)
    }
}

/// A loaded model plus the column schema it was trained against.
///
/// Loaded exactly once at process start; treat as immutable afterwards
/// (shareable by reference across request threads).
#[derive(Debug, Clone)]
pub struct ModelHandle {
    model: LinearModel,
    schema: FeatureSchema,
}

impl ModelHandle {
    /// Load the model artifact and column schema, cross-checking that the
    /// coefficient count matches the column count. A failure here is fatal:
    /// there is no serving without a consistent model.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(model_path: P, columns_path: Q) -> Result<Self> {
        let model = LinearModel::from_json_file(model_path)?;
        let schema = FeatureSchema::from_json_file(columns_path)?;

        if model.n_features() != schema.len() {
            return Err(Error::CoefficientMismatch {
                expected: schema.len(),
                got: model.n_features(),
            });
        }

        tracing::info!(
            columns = schema.len(),
            locations = schema.locations().count(),
            "loaded pricing model"
        );

        Ok(Self { model, schema })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Delegate prediction to the wrapped model.
    pub fn predict(&self, features: &Array1<f64>) -> Result<f64> {
        self.model.predict(features)
    }

    /// Split the handle into the model and its schema.
    pub fn into_parts(self) -> (LinearModel, FeatureSchema) {
        (self.model, self.schema)
    }
}
