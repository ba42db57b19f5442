use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type of a standard field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Date,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Date => "date",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(FieldType::String),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            other => Err(format!("unknown field type: {other}")),
        }
    }
}

/// Namespace of a standard field, derived from its path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// `invoice.*`
    Invoice,
    /// `seller.*`
    Seller,
    /// `buyer.*`
    Buyer,
    /// `lines[].*`
    Lines,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Invoice,
        Category::Seller,
        Category::Buyer,
        Category::Lines,
    ];

    pub fn from_path(path: &str) -> Option<Category> {
        if path.starts_with("invoice.") {
            Some(Category::Invoice)
        } else if path.starts_with("seller.") {
            Some(Category::Seller)
        } else if path.starts_with("buyer.") {
            Some(Category::Buyer)
        } else if path.starts_with("lines[") {
            Some(Category::Lines)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Invoice => "invoice",
            Category::Seller => "seller",
            Category::Buyer => "buyer",
            Category::Lines => "lines",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field of the standard e-invoicing schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardField {
    /// Dotted/bracketed identifier, e.g. `invoice.total_incl_vat` or `lines[].qty`.
    pub path: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    /// Allowed values, when the field is an enumeration.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
    /// Regex the value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Display format hint (e.g. `YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl StandardField {
    pub fn category(&self) -> Option<Category> {
        Category::from_path(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_path_prefix() {
        assert_eq!(Category::from_path("invoice.id"), Some(Category::Invoice));
        assert_eq!(Category::from_path("lines[].qty"), Some(Category::Lines));
        assert_eq!(Category::from_path("buyer.trn"), Some(Category::Buyer));
        assert_eq!(Category::from_path("payment.terms"), None);
    }

    #[test]
    fn field_type_parses_case_insensitively() {
        assert_eq!("Number".parse::<FieldType>(), Ok(FieldType::Number));
        assert!("decimal".parse::<FieldType>().is_err());
    }
}
