use chrono_tz::Tz;
use serde::Deserialize;

use crate::{DEFAULT_ZONE, ParseError};

/// Settings for [`AccountsDates`](crate::AccountsDates).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatesConfig {
    /// IANA zone used to read the calendar date of a timestamp.
    #[serde(default = "default_zone")]
    pub zone: String,
}

fn default_zone() -> String {
    DEFAULT_ZONE.to_string()
}

impl Default for DatesConfig {
    fn default() -> Self {
        Self {
            zone: default_zone(),
        }
    }
}

impl DatesConfig {
    /// Resolves `zone` to a time zone.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownTimeZone` if the name is not an IANA zone.
    pub fn time_zone(&self) -> Result<Tz, ParseError> {
        self.zone
            .parse::<Tz>()
            .map_err(|_| ParseError::UnknownTimeZone(self.zone.clone()))
    }
}
