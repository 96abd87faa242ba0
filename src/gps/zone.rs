use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{point::GpsPoint, GpsError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneShape {
    Circle,
    Polygon,
    Rectangle,
}

/// A map area that can be checked for containing a coordinate.
///
/// A zone with `eject` set excludes the points it contains when a whole
/// zone list is matched, see [`ZoneList::locate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapZone {
    pub shape: ZoneShape,
    #[serde(default)]
    pub eject: bool,
    /// Radius in meters, used by circle zones only.
    #[serde(default, skip_serializing_if = "radius_is_zero")]
    pub radius: f64,
    pub coord: Vec<GpsPoint>,
}

fn radius_is_zero(radius: &f64) -> bool {
    *radius == 0.0
}

impl MapZone {
    pub fn validate(&self) -> Result<(), GpsError> {
        let count = self.coord.len();
        match self.shape {
            ZoneShape::Circle if count != 1 => Err(GpsError::CircleCoords { count }),
            ZoneShape::Polygon if count < 3 => Err(GpsError::PolygonCoords { count }),
            ZoneShape::Rectangle if count != 4 => Err(GpsError::RectangleCoords { count }),
            _ => Ok(()),
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> Result<bool, GpsError> {
        match self.shape {
            ZoneShape::Circle => {
                let center = self
                    .coord
                    .first()
                    .ok_or(GpsError::CircleCoords { count: 0 })?;
                let distance = center.distance_between(&GpsPoint::new(lat, lon));
                Ok(distance <= self.radius)
            }
            shape => Err(GpsError::ContainsNotImplemented { shape }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ZoneReadError {
    #[error("Could not read zone file: {error}")]
    FileRead { error: io::Error },

    #[error("Could not parse zone JSON: {error}")]
    JsonParse { error: serde_json::Error },

    #[error("Zone failed validation: {error}")]
    Validation { error: GpsError },
}

/// An ordered list of zones matched together.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneList {
    #[serde(rename = "paths")]
    pub zones: Vec<MapZone>,
}

impl ZoneList {
    pub fn new(zones: Vec<MapZone>) -> Self {
        Self { zones }
    }

    pub fn validate(&self) -> Result<(), GpsError> {
        for zone in &self.zones {
            zone.validate()?;
        }
        Ok(())
    }

    /// Checks if the given coordinate falls inside the zone list.
    ///
    /// Zones are matched in order. Every zone containing the coordinate
    /// sets the result, a regular zone to included, an eject zone to
    /// excluded. The last matching zone wins.
    pub fn locate(&self, lat: f64, lon: f64) -> Result<bool, GpsError> {
        let mut inside = false;
        for zone in &self.zones {
            if zone.contains(lat, lon)? {
                trace!(shape = ?zone.shape, eject = zone.eject, "zone matched");
                inside = !zone.eject;
            }
        }
        Ok(inside)
    }

    #[tracing::instrument]
    pub fn from_file(path: &Path) -> Result<Self, ZoneReadError> {
        let json = fs::read_to_string(path).map_err(|error| ZoneReadError::FileRead { error })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ZoneReadError> {
        let list: ZoneList =
            serde_json::from_str(json).map_err(|error| ZoneReadError::JsonParse { error })?;
        list.validate()
            .map_err(|error| ZoneReadError::Validation { error })?;
        Ok(list)
    }
}
