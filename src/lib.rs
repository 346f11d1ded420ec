//! # PropertyPulse Core
//!
//! This library provides the pricing logic behind the PropertyPulse real
//! estate dashboard: it loads a pre-trained regression model together with
//! its ordered feature-column schema and derives property price predictions,
//! compound-growth ROI projections, and synthetic per-location environmental
//! metrics.
//!
//! ## Modules
//!
//! - `schema` - Validated feature-column schema (fixed slots + one-hot locations)
//! - `model` - Model artifact loading and the `Regressor` trait
//! - `engine` - Feature vectors, price prediction, ROI projection, comparisons
//! - `environment` - Seeded synthetic environmental profiles (demo data)
//! - `format` - Currency formatting
//! - `error` - Error types
//!
//! The environmental figures are deterministic pseudo-random stand-ins, not
//! measurements; see [`environment`] for the caveats.

pub mod engine;
pub mod environment;
pub mod error;
pub mod format;
pub mod model;
pub mod schema;

pub use engine::{
    build_feature_vector, project_value, LocationBaseline, PricePrediction, PricingEngine,
    ProjectedValue, ProjectionConfig, PropertyQuery,
};
pub use environment::{EnvironmentSource, EnvironmentalProfile, SyntheticEnvironment};
pub use error::{Error, Result};
pub use format::{format_inr, format_inr_compact, format_inr_text};
pub use model::{LinearModel, ModelHandle, Regressor};
pub use schema::FeatureSchema;
