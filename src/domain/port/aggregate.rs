//! Port record.
//!
//! A port is an immutable value object. Storing a port with an id that is
//! already present replaces the previous value wholesale; nothing mutates a
//! port after construction.

use crate::domain::foundation::ValidationError;

/// A maritime port.
///
/// # Invariants
///
/// - `id` is non-empty and unique within the catalog
/// - `code` is non-empty
/// - `coordinates` holds latitude then longitude (count is not enforced)
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    id: String,
    name: String,
    city: String,
    country: String,
    alias: Vec<String>,
    regions: Vec<String>,
    coordinates: Vec<f64>,
    province: String,
    timezone: String,
    unlocs: Vec<String>,
    code: String,
}

impl Port {
    /// Create a new port.
    ///
    /// # Errors
    ///
    /// - `EmptyField { field: "id" }` if `id` is empty
    /// - `EmptyField { field: "code" }` if `code` is empty
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        name: String,
        city: String,
        country: String,
        alias: Vec<String>,
        regions: Vec<String>,
        coordinates: Vec<f64>,
        province: String,
        timezone: String,
        unlocs: Vec<String>,
        code: String,
    ) -> Result<Self, ValidationError> {
        if id.is_empty() {
            return Err(ValidationError::empty_field("id"));
        }
        if code.is_empty() {
            return Err(ValidationError::empty_field("code"));
        }

        Ok(Self {
            id,
            name,
            city,
            country,
            alias,
            regions,
            coordinates,
            province,
            timezone,
            unlocs,
            code,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn alias(&self) -> &[String] {
        &self.alias
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Latitude then longitude.
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn unlocs(&self) -> &[String] {
        &self.unlocs
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn build(id: &str, code: &str) -> Result<Port, ValidationError> {
        Port::new(
            id.to_string(),
            "port-name".to_string(),
            "London".to_string(),
            "United Kingdom".to_string(),
            vec!["alias".to_string()],
            vec!["region".to_string()],
            vec![90.0, 90.0],
            "province".to_string(),
            "UTC".to_string(),
            vec!["abc".to_string()],
            code.to_string(),
        )
    }

    #[test]
    fn creates_port_when_id_and_code_present() {
        let port = build("some-id", "some-code").unwrap();

        assert_eq!(port.id(), "some-id");
        assert_eq!(port.code(), "some-code");
        assert_eq!(port.name(), "port-name");
        assert_eq!(port.city(), "London");
        assert_eq!(port.country(), "United Kingdom");
        assert_eq!(port.alias(), ["alias".to_string()]);
        assert_eq!(port.regions(), ["region".to_string()]);
        assert_eq!(port.coordinates(), [90.0, 90.0]);
        assert_eq!(port.province(), "province");
        assert_eq!(port.timezone(), "UTC");
        assert_eq!(port.unlocs(), ["abc".to_string()]);
    }

    #[test]
    fn rejects_missing_id() {
        let err = build("", "some-code").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("id"));
    }

    #[test]
    fn rejects_missing_code() {
        let err = build("some-id", "").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("code"));
    }

    #[test]
    fn reports_id_before_code() {
        let err = build("", "").unwrap_err();
        assert_eq!(err.field(), "id");
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let port = Port::new(
            "AEAJM".to_string(),
            String::new(),
            String::new(),
            String::new(),
            vec![],
            vec![],
            vec![],
            String::new(),
            String::new(),
            vec![],
            "52000".to_string(),
        );
        assert!(port.is_ok());
    }

    proptest! {
        #[test]
        fn construction_succeeds_iff_id_and_code_non_empty(
            id in "[A-Z0-9]{0,6}",
            code in "[0-9]{0,5}",
        ) {
            let result = build(&id, &code);
            prop_assert_eq!(result.is_ok(), !id.is_empty() && !code.is_empty());
        }
    }
}
