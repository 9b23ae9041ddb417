//! Column definitions for the target sheet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of column type tags the backend accepts.
///
/// Case-sensitive wire values; the order here is the order selectors and
/// menus present them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    #[serde(rename = "TEXT_NUMBER")]
    TextNumber,
    #[serde(rename = "DATE")]
    Date,
    #[serde(rename = "DATETIME")]
    DateTime,
    #[serde(rename = "CONTACT_LIST")]
    ContactList,
    #[serde(rename = "CHECKBOX")]
    Checkbox,
    #[serde(rename = "PICKLIST")]
    Picklist,
    #[serde(rename = "DURATION")]
    Duration,
    #[serde(rename = "ABSTRACT_DATETIME")]
    AbstractDateTime,
}

impl ColumnType {
    /// All type tags, in presentation order.
    pub const ALL: [ColumnType; 8] = [
        ColumnType::TextNumber,
        ColumnType::Date,
        ColumnType::DateTime,
        ColumnType::ContactList,
        ColumnType::Checkbox,
        ColumnType::Picklist,
        ColumnType::Duration,
        ColumnType::AbstractDateTime,
    ];

    /// The wire tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::TextNumber => "TEXT_NUMBER",
            ColumnType::Date => "DATE",
            ColumnType::DateTime => "DATETIME",
            ColumnType::ContactList => "CONTACT_LIST",
            ColumnType::Checkbox => "CHECKBOX",
            ColumnType::Picklist => "PICKLIST",
            ColumnType::Duration => "DURATION",
            ColumnType::AbstractDateTime => "ABSTRACT_DATETIME",
        }
    }

    /// Parse a wire tag.
    pub fn parse(s: &str) -> Option<ColumnType> {
        ColumnType::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl Default for ColumnType {
    /// Newly added blank columns default to the first tag.
    fn default() -> Self {
        ColumnType::TextNumber
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column of the target sheet: a title plus a type tag.
///
/// Columns have no identity beyond their position in the ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(title: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            title: title.into(),
            column_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tags_round_trip() {
        for tag in ColumnType::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.as_str()));
            let back: ColumnType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, tag);
        }
    }

    #[test]
    fn test_tag_order_and_default() {
        assert_eq!(ColumnType::ALL.len(), 8);
        assert_eq!(ColumnType::ALL[0], ColumnType::default());
        assert_eq!(ColumnType::ALL[0].as_str(), "TEXT_NUMBER");
        assert_eq!(ColumnType::ALL[7].as_str(), "ABSTRACT_DATETIME");
    }

    #[test]
    fn test_parse() {
        assert_eq!(ColumnType::parse("DATE"), Some(ColumnType::Date));
        assert_eq!(ColumnType::parse("date"), None);
        assert_eq!(ColumnType::parse("TEXT"), None);
    }

    #[test]
    fn test_column_wire_shape() {
        let col = Column::new("Status", ColumnType::Picklist);
        let json = serde_json::to_value(&col).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Status", "type": "PICKLIST"})
        );
    }
}
