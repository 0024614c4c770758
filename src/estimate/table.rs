//! The fixed cost table: (size, risk) to estimated days.

use thiserror::Error;

use crate::domain::{RiskCategory, SizeCategory};

/// Estimated days, rows by size (XS..XL), columns by risk (LOW..SEVERE).
///
/// Every row and every column is non-decreasing.
const COST_DAYS: [[f64; 4]; 5] = [
    [0.5, 1.0, 1.5, 4.0],
    [2.0, 3.0, 4.5, 12.0],
    [4.0, 5.0, 7.5, 20.0],
    [7.5, 10.0, 15.0, 40.0],
    [15.0, 20.0, 30.0, 80.0],
];

/// A label whose key is not one of the fixed category codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("invalid size key '{key}' (from label '{label}')")]
    InvalidSizeKey { key: String, label: String },
    #[error("invalid risk key '{key}' (from label '{label}')")]
    InvalidRiskKey { key: String, label: String },
}

impl LookupError {
    /// Attach the raw board labels the keys were derived from.
    pub fn with_labels(self, size_label: &str, risk_label: &str) -> Self {
        match self {
            LookupError::InvalidSizeKey { key, .. } => LookupError::InvalidSizeKey {
                key,
                label: size_label.to_string(),
            },
            LookupError::InvalidRiskKey { key, .. } => LookupError::InvalidRiskKey {
                key,
                label: risk_label.to_string(),
            },
        }
    }
}

/// Estimated days for a category pair. Total over the Cartesian product.
pub fn estimate_days(size: SizeCategory, risk: RiskCategory) -> f64 {
    COST_DAYS[size_index(size)][risk_index(risk)]
}

/// Look up normalized keys. The size key is validated before the risk key.
pub fn lookup(size_key: &str, risk_key: &str) -> Result<f64, LookupError> {
    let size: SizeCategory = size_key.parse().map_err(|_| LookupError::InvalidSizeKey {
        key: size_key.to_string(),
        label: size_key.to_string(),
    })?;
    let risk: RiskCategory = risk_key.parse().map_err(|_| LookupError::InvalidRiskKey {
        key: risk_key.to_string(),
        label: risk_key.to_string(),
    })?;
    Ok(estimate_days(size, risk))
}

fn size_index(size: SizeCategory) -> usize {
    match size {
        SizeCategory::Xs => 0,
        SizeCategory::S => 1,
        SizeCategory::M => 2,
        SizeCategory::L => 3,
        SizeCategory::Xl => 4,
    }
}

fn risk_index(risk: RiskCategory) -> usize {
    match risk {
        RiskCategory::Low => 0,
        RiskCategory::Mid => 1,
        RiskCategory::High => 2,
        RiskCategory::Severe => 3,
    }
}
