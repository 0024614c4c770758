//! Raw board labels to a day estimate.

use super::normalize::{normalize_risk, normalize_size};
use super::table::{LookupError, lookup};

/// Normalize both labels and look them up in the cost table.
///
/// Errors keep their kind and carry the raw label that failed.
pub fn resolve(size_label: &str, risk_label: &str) -> Result<f64, LookupError> {
    let size_key = normalize_size(size_label);
    let risk_key = normalize_risk(risk_label);
    lookup(&size_key, &risk_key).map_err(|e| e.with_labels(size_label, risk_label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskCategory, SizeCategory};
    use crate::estimate::table::estimate_days;

    #[test]
    fn resolves_decorated_labels() {
        assert_eq!(resolve("M (Medium)", "High: some risk"), Ok(7.5));
        assert_eq!(resolve("L", "SEVERE:x"), Ok(40.0));
        assert_eq!(resolve("XS(tiny)", "LOW:none"), Ok(0.5));
    }

    #[test]
    fn every_canonical_pair_hits_the_table() {
        for size in SizeCategory::ALL {
            for risk in RiskCategory::ALL {
                let size_label = format!("{} (whatever)", size.code().to_lowercase());
                let risk_label = format!("{}: because", risk.code());
                assert_eq!(resolve(&size_label, &risk_label), Ok(estimate_days(size, risk)));
            }
        }
    }

    #[test]
    fn bad_size_wins_regardless_of_risk() {
        for risk in ["LOW", "garbage", ""] {
            assert_eq!(
                resolve("Huge (very)", risk),
                Err(LookupError::InvalidSizeKey {
                    key: "HUGE".into(),
                    label: "Huge (very)".into()
                })
            );
        }
    }

    #[test]
    fn bad_risk_reported_with_raw_label() {
        assert_eq!(
            resolve("S", "Medium: unclear"),
            Err(LookupError::InvalidRiskKey {
                key: "MEDIUM".into(),
                label: "Medium: unclear".into()
            })
        );
    }

    #[test]
    fn error_message_names_the_label() {
        let err = resolve("S", "Medium: unclear").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid risk key 'MEDIUM' (from label 'Medium: unclear')"
        );
    }
}
