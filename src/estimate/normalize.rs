//! Extract table keys from free-form board labels.
//!
//! Board options carry a short code followed by a human-readable suffix,
//! e.g. `M (Medium)` or `High: needs a spike first`.

/// Separates the size code from its description.
pub const SIZE_DELIMITER: char = '(';
/// Separates the risk code from its description.
pub const RISK_DELIMITER: char = ':';

/// Key portion of `raw`: text before the first `delimiter`, trimmed and uppercased.
pub fn normalize_label(raw: &str, delimiter: char) -> String {
    let head = match raw.split_once(delimiter) {
        Some((head, _)) => head,
        None => raw,
    };
    head.trim().to_uppercase()
}

pub fn normalize_size(raw: &str) -> String {
    normalize_label(raw, SIZE_DELIMITER)
}

pub fn normalize_risk(raw: &str) -> String {
    normalize_label(raw, RISK_DELIMITER)
}
