//! Domain types for the fixed attrition model.
//!
//! Array lengths carry the feature-order invariant: four scaled features,
//! five coefficients, all index-aligned to `Feature::ALL`.

/// Number of continuous features that go through the scaler.
pub const SCALED_FEATURES: usize = 4;
/// Scaled features plus the unscaled overtime flag.
pub const MODEL_FEATURES: usize = SCALED_FEATURES + 1;

/// Model inputs in the order used by every parameter table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Feature {
    MonthlyIncome,
    Age,
    JobSatisfaction,
    YearsAtCompany,
    OverTime,
}

impl Feature {
    pub const ALL: [Feature; MODEL_FEATURES] = [
        Feature::MonthlyIncome,
        Feature::Age,
        Feature::JobSatisfaction,
        Feature::YearsAtCompany,
        Feature::OverTime,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_scaled(&self) -> bool {
        !matches!(self, Feature::OverTime)
    }
}

/// Per-feature standardisation constants (z-score).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScalingParams {
    pub mean: [f64; SCALED_FEATURES],
    pub scale: [f64; SCALED_FEATURES],
}

/// Logistic regression weights over `Feature::ALL`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModelParams {
    pub coefficients: [f64; MODEL_FEATURES],
    pub intercept: f64,
}

impl ModelParams {
    pub fn coefficient(&self, feature: Feature) -> f64 {
        self.coefficients[feature.index()]
    }
}

/// Versioned, immutable model artefact: scaler plus weights.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LogisticModel {
    pub id: &'static str,
    pub version: &'static str,
    pub scaler: ScalingParams,
    pub params: ModelParams,
    pub threshold: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_indices_follow_table_order() {
        for (idx, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), idx);
        }
        assert_eq!(
            Feature::ALL.iter().filter(|f| f.is_scaled()).count(),
            SCALED_FEATURES
        );
    }
}
