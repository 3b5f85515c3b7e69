//! JSON wire representations of components.
//!
//! Request and response shapes are kept apart from the domain record so the
//! storage schema and the JSON contract can change independently.

use serde::{Deserialize, Serialize};

use crate::component::{
    check_text, Component, ComponentFields, FieldViolation, ValidationError,
    DATASHEET_URL_MAX_LEN, NAME_MAX_LEN, TYPE_MAX_LEN, VERSION_MAX_LEN,
};

/// Body of a create or full-replacement update request.
///
/// Every field is optional at the decoding stage so that missing and null
/// fields can all be reported together by [`ComponentBody::into_fields`].
/// Unknown keys, including a client-supplied `id`, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentBody {
    /// Part name.
    pub name: Option<String>,
    /// Part category.
    #[serde(rename = "type")]
    pub component_type: Option<String>,
    /// Optional hardware revision.
    pub version: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Units in stock.
    pub amount: Option<i64>,
    /// Datasheet link.
    pub datasheet_url: Option<String>,
}

impl ComponentBody {
    /// Checks every required field up front and builds the domain fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming every missing field and every
    /// present field that breaks a rule.
    pub fn into_fields(self) -> Result<ComponentFields, ValidationError> {
        let mut violations = Vec::new();

        let name = required_text(&mut violations, "name", self.name, NAME_MAX_LEN, true);
        let component_type = required_text(
            &mut violations,
            "type",
            self.component_type,
            TYPE_MAX_LEN,
            true,
        );
        if let Some(violation) = self
            .version
            .as_deref()
            .and_then(|v| check_text("version", v, VERSION_MAX_LEN, false))
        {
            violations.push(violation);
        }
        let description = required_text(
            &mut violations,
            "description",
            self.description,
            usize::MAX,
            true,
        );
        if self.amount.is_none() {
            violations.push(FieldViolation::missing("amount"));
        }
        let datasheet_url = required_text(
            &mut violations,
            "datasheet_url",
            self.datasheet_url,
            DATASHEET_URL_MAX_LEN,
            false,
        );

        match (name, component_type, description, self.amount, datasheet_url) {
            (Some(name), Some(component_type), Some(description), Some(amount), Some(datasheet_url))
                if violations.is_empty() =>
            {
                Ok(ComponentFields {
                    name,
                    component_type,
                    version: self.version,
                    description,
                    amount,
                    datasheet_url,
                })
            }
            _ => Err(ValidationError::new(violations)),
        }
    }
}

fn required_text(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: Option<String>,
    max_len: usize,
    require_content: bool,
) -> Option<String> {
    match value {
        None => {
            violations.push(FieldViolation::missing(field));
            None
        }
        Some(value) => {
            if let Some(violation) = check_text(field, &value, max_len, require_content) {
                violations.push(violation);
            }
            Some(value)
        }
    }
}

/// A component as returned to clients: a flat record of all seven fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentView {
    /// Store-assigned identifier.
    pub id: i64,
    /// Part name.
    pub name: String,
    /// Part category.
    #[serde(rename = "type")]
    pub component_type: String,
    /// Hardware revision, `null` when unset.
    pub version: Option<String>,
    /// Free-form description.
    pub description: String,
    /// Units in stock.
    pub amount: i64,
    /// Datasheet link.
    pub datasheet_url: String,
}

impl From<&Component> for ComponentView {
    fn from(component: &Component) -> Self {
        let fields = component.fields();
        Self {
            id: component.id(),
            name: fields.name.clone(),
            component_type: fields.component_type.clone(),
            version: fields.version.clone(),
            description: fields.description.clone(),
            amount: fields.amount,
            datasheet_url: fields.datasheet_url.clone(),
        }
    }
}

impl From<Component> for ComponentView {
    fn from(component: Component) -> Self {
        let id = component.id();
        let fields = component.into_fields();
        Self {
            id,
            name: fields.name,
            component_type: fields.component_type,
            version: fields.version,
            description: fields.description,
            amount: fields.amount,
            datasheet_url: fields.datasheet_url,
        }
    }
}

/// One entry of the `fields` list in a validation error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolationView {
    /// Offending field.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl From<&FieldViolation> for FieldViolationView {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            field: violation.field.clone(),
            message: violation.message.clone(),
        }
    }
}
