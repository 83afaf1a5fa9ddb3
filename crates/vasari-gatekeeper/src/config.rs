//! Gatekeeper configuration

/// Configuration for validation rules
///
/// Required fields, the `tags` shape and bundle structure are always
/// checked; the flags below switch the remaining checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Check `type` and `severity` against their enumerations
    pub check_enumerations: bool,

    /// Detect an `id` repeated inside one bundle
    pub check_duplicates: bool,

    /// Detect an `id` already used by an earlier bundle
    pub check_cross_bundle_duplicates: bool,

    /// Check each entry's `domain` against its bundle's, and that the bundle
    /// domain is a known one
    pub check_domain_consistency: bool,

    /// Check the shape of optional fields when present
    pub check_optional_fields: bool,

    /// Check that the bundle version is `MAJOR.MINOR.PATCH`
    pub check_version: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_enumerations: true,
            check_duplicates: true,
            check_cross_bundle_duplicates: true,
            check_domain_consistency: true,
            check_optional_fields: true,
            check_version: true,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (structural checks only)
    pub fn permissive() -> Self {
        Self {
            check_enumerations: true,
            check_duplicates: false,
            check_cross_bundle_duplicates: false,
            check_domain_consistency: false,
            check_optional_fields: true,
            check_version: false,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.check_cross_bundle_duplicates && !self.check_duplicates {
            return Err(
                "check_cross_bundle_duplicates requires check_duplicates".to_string(),
            );
        }
        Ok(())
    }
}
