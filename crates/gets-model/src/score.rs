//! Readiness scoring types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Per-category scores on a 0–100 scale.
///
/// A category that was not computed is `None` and is left out of the
/// weighted overall score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posture: Option<u8>,
}

/// Readiness band derived from a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Readiness {
    #[serde(rename = "NEEDS ATTENTION")]
    NeedsAttention,
    #[serde(rename = "LOW READINESS")]
    Low,
    #[serde(rename = "MEDIUM READINESS")]
    Medium,
    #[serde(rename = "HIGH READINESS")]
    High,
}

impl Readiness {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Readiness::High,
            70..=89 => Readiness::Medium,
            50..=69 => Readiness::Low,
            _ => Readiness::NeedsAttention,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Readiness::High => "HIGH READINESS",
            Readiness::Medium => "MEDIUM READINESS",
            Readiness::Low => "LOW READINESS",
            Readiness::NeedsAttention => "NEEDS ATTENTION",
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Integration posture answers supplied alongside an upload.
///
/// Each answer is tri-state: `Some(true)`, `Some(false)`, or unknown. Any
/// non-boolean JSON value is read as unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub webhooks: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub sandbox_env: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub retries: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub error_handling: Option<bool>,
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_bands() {
        assert_eq!(Readiness::from_score(100), Readiness::High);
        assert_eq!(Readiness::from_score(90), Readiness::High);
        assert_eq!(Readiness::from_score(89), Readiness::Medium);
        assert_eq!(Readiness::from_score(70), Readiness::Medium);
        assert_eq!(Readiness::from_score(69), Readiness::Low);
        assert_eq!(Readiness::from_score(50), Readiness::Low);
        assert_eq!(Readiness::from_score(49), Readiness::NeedsAttention);
        assert_eq!(Readiness::from_score(0), Readiness::NeedsAttention);
    }

    #[test]
    fn questionnaire_treats_non_booleans_as_unknown() {
        let q: Questionnaire =
            serde_json::from_str(r#"{"webhooks": true, "sandbox_env": "yes", "retries": null}"#)
                .unwrap();
        assert_eq!(q.webhooks, Some(true));
        assert_eq!(q.sandbox_env, None);
        assert_eq!(q.retries, None);
        assert_eq!(q.error_handling, None);
    }

    #[test]
    fn readiness_serializes_as_label() {
        let json = serde_json::to_string(&Readiness::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM READINESS\"");
    }
}
