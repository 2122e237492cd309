use std::fmt::{Display, Formatter};

use parkwatch_core::{AppResult, NonEmptyString};

/// Caller-supplied facility identifier, forwarded to the upstream API as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FacilityId(NonEmptyString);

impl FacilityId {
    /// Creates a facility identifier.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        NonEmptyString::new(value).map(Self)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for FacilityId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Path below the upstream base URL, kept as individual segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// `/facilities`
    #[must_use]
    pub fn facilities() -> Self {
        Self {
            segments: vec!["facilities".to_owned()],
        }
    }

    /// `/facilities/{id}/occupation`
    #[must_use]
    pub fn facility_occupation(facility_id: &FacilityId) -> Self {
        Self::facility_resource(facility_id, "occupation")
    }

    /// `/facilities/{id}/capacity`
    #[must_use]
    pub fn facility_capacity(facility_id: &FacilityId) -> Self {
        Self::facility_resource(facility_id, "capacity")
    }

    fn facility_resource(facility_id: &FacilityId, resource: &str) -> Self {
        Self {
            segments: vec![
                "facilities".to_owned(),
                facility_id.as_str().to_owned(),
                resource.to_owned(),
            ],
        }
    }

    /// Returns the unencoded path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Display for ResourcePath {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(formatter, "/{segment}")?;
        }
        Ok(())
    }
}
