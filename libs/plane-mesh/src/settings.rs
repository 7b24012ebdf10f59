//! Host-facing plane settings.
//!
//! Hosts usually expose resolution and size as tunable fields. This module
//! gives those fields a serde shape so they can be loaded from any format,
//! with missing fields falling back to the shared `config` defaults.

use crate::error::MeshResult;
use crate::primitives::validate_plane_parameters;
use config::constants::{DEFAULT_RESOLUTION, DEFAULT_SIZE};
use serde::{Deserialize, Serialize};

/// Resolution and size of a generated plane.
///
/// # Examples
/// ```
/// use plane_mesh::PlaneSettings;
/// let settings = PlaneSettings::new(16, 4.0).unwrap();
/// assert_eq!(settings.resolution, 16);
/// assert!(PlaneSettings::new(0, 4.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneSettings {
    /// Grid subdivisions along each axis.
    pub resolution: u32,
    /// World-space edge length of the square plane.
    pub size: f64,
}

impl PlaneSettings {
    /// Builds settings, rejecting values the generator would refuse.
    pub fn new(resolution: u32, size: f64) -> MeshResult<Self> {
        let settings = Self { resolution, size };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the settings without generating anything.
    pub fn validate(&self) -> MeshResult<()> {
        validate_plane_parameters(self.resolution, self.size).map(|_| ())
    }
}

impl Default for PlaneSettings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            size: DEFAULT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;

    #[test]
    fn default_matches_constants() {
        let settings = PlaneSettings::default();
        assert_eq!(settings.resolution, DEFAULT_RESOLUTION);
        assert_eq!(settings.size, DEFAULT_SIZE);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn new_validates_input() {
        assert!(matches!(
            PlaneSettings::new(0, 1.0),
            Err(MeshError::InvalidParameter { name: "resolution", .. })
        ));
        assert!(matches!(
            PlaneSettings::new(4, -2.0),
            Err(MeshError::InvalidParameter { name: "size", .. })
        ));
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let settings: PlaneSettings = serde_json::from_str(r#"{ "resolution": 32 }"#).unwrap();
        assert_eq!(settings.resolution, 32);
        assert_eq!(settings.size, DEFAULT_SIZE);

        let settings: PlaneSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, PlaneSettings::default());
    }

    #[test]
    fn deserialize_does_not_validate() {
        let settings: PlaneSettings =
            serde_json::from_str(r#"{ "resolution": 0, "size": 1.5 }"#).unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn serialize_round_trip() {
        let settings = PlaneSettings::new(12, 2.5).unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        let back: PlaneSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
