//! Component records and their validation rules.
//!
//! A [`Component`] is a single electronic-part inventory record. Its mutable
//! part, [`ComponentFields`], is what clients supply on create and on
//! full-replacement update; the identifier is always assigned by the store.

use std::fmt;

use thiserror::Error;

/// Maximum length of the `name` field, in characters.
pub const NAME_MAX_LEN: usize = 100;
/// Maximum length of the `type` field, in characters.
pub const TYPE_MAX_LEN: usize = 100;
/// Maximum length of the `version` field, in characters.
pub const VERSION_MAX_LEN: usize = 50;
/// Maximum length of the `datasheet_url` field, in characters.
pub const DATASHEET_URL_MAX_LEN: usize = 200;

/// The client-supplied fields of a component.
///
/// Update has full-replacement semantics, so the same type describes both a
/// new component and the replacement for an existing one.
///
/// # Examples
///
/// ```
/// use inventory::ComponentFields;
///
/// let fields = ComponentFields {
///     name: "Arduino Uno".into(),
///     component_type: "Microcontroller".into(),
///     version: Some("R3".into()),
///     description: "ATmega328P based microcontroller board".into(),
///     amount: 5,
///     datasheet_url: "https://example.com/arduino-uno.pdf".into(),
/// };
/// assert!(fields.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFields {
    /// Human-readable part name.
    pub name: String,
    /// Part category, e.g. "Microcontroller". Serialized as `type`.
    pub component_type: String,
    /// Optional hardware revision.
    pub version: Option<String>,
    /// Free-form description.
    pub description: String,
    /// Number of units in stock.
    pub amount: i64,
    /// Link to the part's datasheet.
    pub datasheet_url: String,
}

impl ComponentFields {
    /// Returns every rule these fields violate, in field order.
    #[must_use]
    pub fn violations(&self) -> Vec<FieldViolation> {
        let checks = [
            check_text("name", &self.name, NAME_MAX_LEN, true),
            check_text("type", &self.component_type, TYPE_MAX_LEN, true),
            self.version
                .as_deref()
                .and_then(|v| check_text("version", v, VERSION_MAX_LEN, false)),
            check_text("description", &self.description, usize::MAX, true),
            check_text(
                "datasheet_url",
                &self.datasheet_url,
                DATASHEET_URL_MAX_LEN,
                false,
            ),
        ];
        checks.into_iter().flatten().collect()
    }

    /// Checks the fields against the component rules.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check(self.violations())
    }
}

/// A stored component: its fields plus the store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: i64,
    fields: ComponentFields,
}

impl Component {
    /// Pairs stored fields with their identifier.
    #[must_use]
    pub const fn new(id: i64, fields: ComponentFields) -> Self {
        Self { id, fields }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the component's fields.
    #[must_use]
    pub const fn fields(&self) -> &ComponentFields {
        &self.fields
    }

    /// Consumes the component and returns its fields.
    #[must_use]
    pub fn into_fields(self) -> ComponentFields {
        self.fields
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({})",
            self.id, self.fields.name, self.fields.component_type
        )
    }
}

/// A single broken rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire name of the offending field.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl FieldViolation {
    /// A required field that was absent or null.
    #[must_use]
    pub fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: "is required".to_string(),
        }
    }

    /// A required text field that was empty or only whitespace.
    #[must_use]
    pub fn blank(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: "cannot be empty".to_string(),
        }
    }

    /// A text field longer than its column allows.
    #[must_use]
    pub fn too_long(field: &str, max_len: usize) -> Self {
        Self {
            field: field.to_string(),
            message: format!("cannot exceed {max_len} characters"),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

/// All the ways a component payload failed validation.
///
/// Always holds at least one violation when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_violations(.violations))]
pub struct ValidationError {
    /// The individual violations, in field order.
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Wraps a list of violations.
    #[must_use]
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Turns a possibly-empty violation list into a result.
    ///
    /// # Errors
    ///
    /// Returns an error when `violations` is non-empty.
    pub fn check(violations: Vec<FieldViolation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self::new(violations))
        }
    }

    /// Names of the fields that were reported missing.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|v| v.message == "is required")
            .map(|v| v.field.as_str())
            .collect()
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks a text value against a length limit and, optionally, a
/// non-blank requirement.
pub(crate) fn check_text(
    field: &str,
    value: &str,
    max_len: usize,
    require_content: bool,
) -> Option<FieldViolation> {
    if require_content && value.trim().is_empty() {
        return Some(FieldViolation::blank(field));
    }
    if value.chars().count() > max_len {
        return Some(FieldViolation::too_long(field, max_len));
    }
    None
}

#[cfg(test)]
mod proptests;


#[cfg(test)]
mod tests {
    use super::fixtures::{arduino_uno, resistor};
    use super::*;

    #[test]
    fn test_valid_fields() {
        assert!(arduino_uno().validate().is_ok());
        assert!(resistor().validate().is_ok());
    }

    #[test]
    fn test_blank_required_text() {
        let mut fields = arduino_uno();
        fields.name = "   ".to_string();
        fields.description = String::new();

        let err = fields.validate().unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert_eq!(err.violations[0], FieldViolation::blank("name"));
        assert_eq!(err.violations[1], FieldViolation::blank("description"));
    }

    #[test]
    fn test_length_limits() {
        let mut fields = arduino_uno();
        fields.name = "x".repeat(NAME_MAX_LEN);
        fields.version = Some("v".repeat(VERSION_MAX_LEN));
        assert!(fields.validate().is_ok());

        fields.name = "x".repeat(NAME_MAX_LEN + 1);
        fields.version = Some("v".repeat(VERSION_MAX_LEN + 1));
        fields.datasheet_url = "u".repeat(DATASHEET_URL_MAX_LEN + 1);
        let err = fields.validate().unwrap_err();
        let names: Vec<_> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(names, vec!["name", "version", "datasheet_url"]);
    }

    #[test]
    fn test_length_counts_characters() {
        let mut fields = arduino_uno();
        // 100 two-byte characters is 200 bytes but still within the limit.
        fields.name = "é".repeat(NAME_MAX_LEN);
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_empty_datasheet_url_allowed() {
        let mut fields = arduino_uno();
        fields.datasheet_url = String::new();
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_validation_error_display_lists_all() {
        let err = ValidationError::new(vec![
            FieldViolation::missing("type"),
            FieldViolation::missing("amount"),
        ]);
        assert_eq!(err.to_string(), "'type' is required, 'amount' is required");
        assert_eq!(err.missing_fields(), vec!["type", "amount"]);
    }

    #[test]
    fn test_component_accessors() {
        let component = Component::new(3, arduino_uno());
        assert_eq!(component.id(), 3);
        assert_eq!(component.fields().amount, 5);
        assert_eq!(format!("{component}"), "#3 Arduino Uno (Microcontroller)");
        assert_eq!(component.into_fields(), arduino_uno());
    }
}
