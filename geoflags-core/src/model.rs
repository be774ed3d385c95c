use serde_json::{Map, Value};

/// Envelope keys added by the remote API; never part of the returned flags.
pub const RESERVED_KEYS: [&str; 2] = ["kind", "etag"];

/// Quality flags keyed by name. Values are untyped since the remote schema is not fixed.
pub type Flags = Map<String, Value>;

/// A single occurrence to check. No range or format validation is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub binomial: String,
}

impl Query {
    pub fn new(
        latitude: f64,
        longitude: f64,
        country: impl Into<String>,
        binomial: impl Into<String>,
    ) -> Self {
        Self { latitude, longitude, country: country.into(), binomial: binomial.into() }
    }

    /// A puma sighting in southern Argentina.
    pub fn example() -> Self {
        Self::new(-50.2667, -72.0, "Argentina", "Puma concolor")
    }

    /// Textual path segments in request order: latitude, longitude, country, binomial.
    pub fn path_segments(&self) -> [String; 4] {
        [
            self.latitude.to_string(),
            self.longitude.to_string(),
            self.country.clone(),
            self.binomial.clone(),
        ]
    }
}
