pub mod gps;

pub use gps::distance::{haversine_distance, EARTH_RADIUS_M};
pub use gps::point::GpsPoint;
pub use gps::zone::{MapZone, ZoneList, ZoneReadError, ZoneShape};
pub use gps::GpsError;
