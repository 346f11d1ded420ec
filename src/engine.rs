//! Pricing engine
//!
//! Builds the feature vector for a property query, runs the regression
//! model, and derives the downstream numbers the dashboard renders: price
//! per square foot, compound-growth ROI projections, and per-location
//! baseline prices for the comparison chart.

use crate::error::{Error, Result};
use crate::model::Regressor;
use crate::schema::{FeatureSchema, AREA_SLOT, BATH_SLOT, BHK_SLOT};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Annual appreciation rate used when no override is given (7%).
pub const DEFAULT_GROWTH_RATE: f64 = 0.07;

/// Projection horizons used when no override is given, in years.
pub const DEFAULT_HORIZONS: [u32; 3] = [5, 10, 15];

/// Baseline query used for per-location comparisons: 1000 sqft, 2 bath, 2 bhk.
pub const BASELINE_AREA: f64 = 1000.0;
pub const BASELINE_BATHROOMS: u32 = 2;
pub const BASELINE_BEDROOMS: u32 = 2;

/// A validated property pricing request
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyQuery {
    area: f64,
    bathrooms: u32,
    bedrooms: u32,
    location: String,
}

impl PropertyQuery {
    /// Validate and construct a query. Area must be positive and finite;
    /// room counts must be at least 1. Location membership is checked later
    /// against the schema, which is the only component that knows the
    /// trained vocabulary.
    pub fn new(area: f64, bathrooms: u32, bedrooms: u32, location: impl Into<String>) -> Result<Self> {
        if !area.is_finite() || area <= 0.0 {
            return Err(Error::InvalidQuery(format!(
                "area must be a positive number, got {}",
                area
            )));
        }
        if bathrooms == 0 {
            return Err(Error::InvalidQuery("bathrooms must be at least 1".into()));
        }
        if bedrooms == 0 {
            return Err(Error::InvalidQuery("bedrooms must be at least 1".into()));
        }

        Ok(Self {
            area,
            bathrooms,
            bedrooms,
            location: location.into(),
        })
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Predicted price for a single query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePrediction {
    pub total_price: f64,
    pub price_per_sqft: f64,
}

/// Projected value at one horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedValue {
    pub years_ahead: u32,
    pub projected_price: f64,
    pub percent_gain: f64,
}

/// Growth assumptions for ROI projections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Assumed annual appreciation rate (0.07 = 7%)
    pub annual_growth_rate: f64,
    /// Horizons to project, in years
    pub horizons: Vec<u32>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            annual_growth_rate: DEFAULT_GROWTH_RATE,
            horizons: DEFAULT_HORIZONS.to_vec(),
        }
    }
}

/// Baseline price per square foot for one location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationBaseline {
    pub location: String,
    pub price_per_sqft: f64,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Build the model input for a query.
///
/// Slot 0 is area, slot 1 bathrooms, slot 2 bedrooms; the location's one-hot
/// slot is set to 1. The positional contract must match the training-time
/// column order exactly. Unknown locations cannot be represented and are
/// rejected before any vector is returned.
pub fn build_feature_vector(schema: &FeatureSchema, query: &PropertyQuery) -> Result<Array1<f64>> {
    let slot = schema
        .location_slot(&query.location)
        .ok_or_else(|| Error::UnknownLocation(query.location.clone()))?;

    let mut x = Array1::<f64>::zeros(schema.len());
    x[AREA_SLOT] = query.area;
    x[BATH_SLOT] = query.bathrooms as f64;
    x[BHK_SLOT] = query.bedrooms as f64;
    x[slot] = 1.0;

    Ok(x)
}

/// Compound-growth projection of a predicted price.
///
/// For each horizon h: `price * (1 + rate)^h`, rounded to 2 decimal places.
/// The rate and horizons are explicit parameters, not hidden constants.
pub fn project_value(total_price: f64, config: &ProjectionConfig) -> Vec<ProjectedValue> {
    config
        .horizons
        .iter()
        .map(|&years| {
            let projected = round2(total_price * (1.0 + config.annual_growth_rate).powi(years as i32));
            let percent_gain = (projected / total_price - 1.0) * 100.0;
            ProjectedValue {
                years_ahead: years,
                projected_price: projected,
                percent_gain,
            }
        })
        .collect()
}

/// Stateless pricing computations over a loaded model.
///
/// Generic over [`Regressor`] so tests can run against a stub instead of a
/// fitted artifact. Every method is a pure single-shot computation; the
/// engine holds no mutable state.
#[derive(Debug)]
pub struct PricingEngine<M: Regressor> {
    model: M,
    schema: FeatureSchema,
}

impl<M: Regressor> PricingEngine<M> {
    pub fn new(model: M, schema: FeatureSchema) -> Self {
        Self { model, schema }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Predict the total price and price per square foot for a query.
    pub fn predict_price(&self, query: &PropertyQuery) -> Result<PricePrediction> {
        let x = build_feature_vector(&self.schema, query)?;
        let total_price = self.model.predict(&x)?;
        // area > 0 is guaranteed by PropertyQuery::new
        let price_per_sqft = total_price / query.area;

        tracing::debug!(
            location = query.location(),
            total_price,
            price_per_sqft,
            "predicted price"
        );

        Ok(PricePrediction {
            total_price,
            price_per_sqft,
        })
    }

    /// Price per square foot for a location under the baseline query
    /// (1000 sqft, 2 bath, 2 bhk), used for market comparisons.
    pub fn baseline_price_per_sqft(&self, location: &str) -> Result<f64> {
        let query = PropertyQuery::new(BASELINE_AREA, BASELINE_BATHROOMS, BASELINE_BEDROOMS, location)?;
        Ok(self.predict_price(&query)?.price_per_sqft)
    }

    /// Baseline price per square foot for each requested location.
    ///
    /// Locations outside the trained vocabulary are skipped with a warning
    /// rather than failing the whole comparison.
    pub fn compare_locations(&self, locations: &[&str]) -> Vec<LocationBaseline> {
        locations
            .iter()
            .filter_map(|&location| match self.baseline_price_per_sqft(location) {
                Ok(price_per_sqft) => Some(LocationBaseline {
                    location: location.to_string(),
                    price_per_sqft,
                }),
                Err(e) => {
                    tracing::warn!(location, error = %e, "skipping location in comparison");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearModel;
    use crate::schema::FIXED_SLOTS;

    fn sample_schema() -> FeatureSchema {
        FeatureSchema::new(vec![
            "total_sqft".to_string(),
            "bath".to_string(),
            "bhk".to_string(),
            "loc_a".to_string(),
            "loc_b".to_string(),
        ])
        .unwrap()
    }

    /// Stub model that always returns a fixed price.
    struct ConstantModel(f64);

    impl Regressor for ConstantModel {
        fn predict(&self, _features: &Array1<f64>) -> Result<f64> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_feature_vector_layout() {
        let schema = sample_schema();
        let query = PropertyQuery::new(1000.0, 2, 3, "loc_b").unwrap();

        let x = build_feature_vector(&schema, &query).unwrap();
        assert_eq!(x.to_vec(), vec![1000.0, 2.0, 3.0, 0.0, 1.0]);
    }

    #[test]
    fn test_one_hot_region_sums_to_one() {
        let schema = sample_schema();
        for location in ["loc_a", "loc_b"] {
            let query = PropertyQuery::new(850.5, 1, 2, location).unwrap();
            let x = build_feature_vector(&schema, &query).unwrap();

            let one_hot_sum: f64 = x.iter().skip(FIXED_SLOTS).sum();
            assert!((one_hot_sum - 1.0).abs() < f64::EPSILON);
            assert_eq!(x[AREA_SLOT], 850.5);
            assert_eq!(x[BATH_SLOT], 1.0);
            assert_eq!(x[BHK_SLOT], 2.0);
        }
    }

    #[test]
    fn test_unknown_location_rejected() {
        let schema = sample_schema();
        let query = PropertyQuery::new(1000.0, 2, 2, "atlantis").unwrap();

        let result = build_feature_vector(&schema, &query);
        assert!(matches!(result, Err(Error::UnknownLocation(ref l)) if l == "atlantis"));
    }

    #[test]
    fn test_query_validation() {
        assert!(matches!(
            PropertyQuery::new(0.0, 2, 2, "loc_a"),
            Err(Error::InvalidQuery(_))
        ));
        assert!(matches!(
            PropertyQuery::new(-10.0, 2, 2, "loc_a"),
            Err(Error::InvalidQuery(_))
        ));
        assert!(matches!(
            PropertyQuery::new(f64::NAN, 2, 2, "loc_a"),
            Err(Error::InvalidQuery(_))
        ));
        assert!(matches!(
            PropertyQuery::new(1000.0, 0, 2, "loc_a"),
            Err(Error::InvalidQuery(_))
        ));
        assert!(matches!(
            PropertyQuery::new(1000.0, 2, 0, "loc_a"),
            Err(Error::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_predict_price_is_deterministic() {
        // price = 3000*sqft + 200k*bath + 300k*bhk + loc offsets
        let model = LinearModel::new(
            Array1::from_vec(vec![3000.0, 200_000.0, 300_000.0, -100_000.0, 250_000.0]),
            50_000.0,
        );
        let engine = PricingEngine::new(model, sample_schema());
        let query = PropertyQuery::new(1000.0, 2, 3, "loc_b").unwrap();

        let first = engine.predict_price(&query).unwrap();
        let second = engine.predict_price(&query).unwrap();
        assert_eq!(first, second);

        let expected = 3000.0 * 1000.0 + 200_000.0 * 2.0 + 300_000.0 * 3.0 + 250_000.0 + 50_000.0;
        assert!((first.total_price - expected).abs() < 1e-9);
        assert!((first.price_per_sqft - expected / 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_value_reference_rates() {
        let projections = project_value(1_000_000.0, &ProjectionConfig::default());
        assert_eq!(projections.len(), 3);

        for (proj, &years) in projections.iter().zip(DEFAULT_HORIZONS.iter()) {
            assert_eq!(proj.years_ahead, years);
            let expected = round2(1_000_000.0 * 1.07f64.powi(years as i32));
            assert!((proj.projected_price - expected).abs() < 1e-6);

            let expected_gain = (expected / 1_000_000.0 - 1.0) * 100.0;
            assert!((proj.percent_gain - expected_gain).abs() < 1e-6);
        }

        // spot-check the 5-year value: 1.07^5 = 1.4025517307...
        assert!((projections[0].projected_price - 1_402_551.73).abs() < 1e-6);
    }

    #[test]
    fn test_project_value_custom_config() {
        let config = ProjectionConfig {
            annual_growth_rate: 0.10,
            horizons: vec![1, 2],
        };
        let projections = project_value(100.0, &config);

        assert!((projections[0].projected_price - 110.0).abs() < 1e-9);
        assert!((projections[1].projected_price - 121.0).abs() < 1e-9);
        assert!((projections[1].percent_gain - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_locations_skips_unknown() {
        let engine = PricingEngine::new(ConstantModel(5_000_000.0), sample_schema());
        let baselines = engine.compare_locations(&["loc_a", "nowhere", "loc_b"]);

        assert_eq!(baselines.len(), 2);
        assert_eq!(baselines[0].location, "loc_a");
        assert_eq!(baselines[1].location, "loc_b");
        for b in &baselines {
            assert!((b.price_per_sqft - 5_000_000.0 / BASELINE_AREA).abs() < 1e-9);
        }
    }
}
