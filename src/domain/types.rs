//! Shared domain types.
//!
//! Categories are closed enums so a malformed key can never index the cost
//! table; board items are plain snapshots owned by the caller.

use std::fmt;
use std::str::FromStr;

/// Placeholder shown for items whose content has no title.
pub const UNTITLED: &str = "(no title)";

/// Size of a tracked item, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeCategory {
    Xs,
    S,
    M,
    L,
    Xl,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 5] = [
        SizeCategory::Xs,
        SizeCategory::S,
        SizeCategory::M,
        SizeCategory::L,
        SizeCategory::Xl,
    ];

    /// Canonical uppercase code as it appears before the `(` on the board.
    pub fn code(self) -> &'static str {
        match self {
            SizeCategory::Xs => "XS",
            SizeCategory::S => "S",
            SizeCategory::M => "M",
            SizeCategory::L => "L",
            SizeCategory::Xl => "XL",
        }
    }
}

impl FromStr for SizeCategory {
    type Err = ();

    /// Parses an already-normalized code. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeCategory::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or(())
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Delivery risk of a tracked item, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskCategory {
    Low,
    Mid,
    High,
    Severe,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::Low,
        RiskCategory::Mid,
        RiskCategory::High,
        RiskCategory::Severe,
    ];

    /// Canonical uppercase code as it appears before the `:` on the board.
    pub fn code(self) -> &'static str {
        match self {
            RiskCategory::Low => "LOW",
            RiskCategory::Mid => "MID",
            RiskCategory::High => "HIGH",
            RiskCategory::Severe => "SEVERE",
        }
    }
}

impl FromStr for RiskCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskCategory::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or(())
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Value held by one field of a board item.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Selected option of a single-select field.
    Label(String),
    Number(f64),
}

impl FieldValue {
    pub fn as_label(&self) -> Option<&str> {
        match self {
            FieldValue::Label(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Label(_) => None,
        }
    }
}

/// Snapshot of one item on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItem {
    pub id: String,
    pub title: Option<String>,
    /// Field name to value, in the order the API returned them.
    pub fields: Vec<(String, FieldValue)>,
}

impl ProjectItem {
    pub fn new(id: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.map(str::to_string),
            fields: Vec::new(),
        }
    }

    /// Builder helper, mostly for tests and fakes.
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    /// Title, or the placeholder when it is absent or empty.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED)
    }

    /// Case-insensitive field lookup; the first match wins.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| same_field_name(n, name))
            .map(|(_, v)| v)
    }

    /// Selected option of a single-select field. An empty label counts as unset.
    pub fn label(&self, name: &str) -> Option<&str> {
        self.field(name)
            .and_then(FieldValue::as_label)
            .filter(|l| !l.is_empty())
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(FieldValue::as_number)
    }

    /// Replace (or add) a numeric field, keeping the original field name casing.
    pub fn set_number(&mut self, name: &str, value: f64) {
        match self
            .fields
            .iter_mut()
            .find(|(n, _)| same_field_name(n, name))
        {
            Some((_, v)) => *v = FieldValue::Number(value),
            None => self.fields.push((name.to_string(), FieldValue::Number(value))),
        }
    }
}

/// Field names compare case-insensitively, Unicode-aware.
pub fn same_field_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Remote identifiers resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIds {
    pub project_id: String,
    /// Id of the numeric field that receives the estimate.
    pub field_id: String,
}
