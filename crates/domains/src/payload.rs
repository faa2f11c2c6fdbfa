//! Shape checking for untyped entity payloads.
//!
//! Construction is two-phase: `Fields::require` confirms every required key is
//! present, then the typed accessors check each value's type. Callers must read
//! fields only after `require` succeeded so missing keys always win over type
//! errors.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{EntityName, ValidationError};

pub(crate) struct Fields<'a> {
    entity: EntityName,
    object: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    /// Fails with `NOT_CONTAIN_NEEDED_PROPERTY` on the first absent or null key.
    /// A payload that is not an object has none of its keys.
    pub(crate) fn require(
        entity: EntityName,
        payload: &'a Value,
        required: &[&'static str],
    ) -> Result<Self, ValidationError> {
        let object = payload.as_object();
        for &field in required {
            let present = object
                .and_then(|map| map.get(field))
                .is_some_and(|value| !value.is_null());
            if !present {
                return Err(ValidationError::MissingProperty { entity, field });
            }
        }
        Ok(Self { entity, object })
    }

    fn get(&self, field: &'static str) -> Result<&'a Value, ValidationError> {
        self.object
            .and_then(|map| map.get(field))
            .ok_or(ValidationError::MissingProperty {
                entity: self.entity,
                field,
            })
    }

    fn mismatch(&self, field: &'static str) -> ValidationError {
        ValidationError::DataTypeMismatch {
            entity: self.entity,
            field,
        }
    }

    pub(crate) fn string(&self, field: &'static str) -> Result<String, ValidationError> {
        self.get(field)?
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.mismatch(field))
    }

    pub(crate) fn boolean(&self, field: &'static str) -> Result<bool, ValidationError> {
        self.get(field)?.as_bool().ok_or_else(|| self.mismatch(field))
    }

    /// An RFC 3339 string. Anything else is a type violation.
    pub(crate) fn timestamp(&self, field: &'static str) -> Result<DateTime<Utc>, ValidationError> {
        self.get(field)?
            .as_str()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
            .ok_or_else(|| self.mismatch(field))
    }
}
