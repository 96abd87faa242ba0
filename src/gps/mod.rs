use self::zone::ZoneShape;

pub mod distance;
pub mod point;
pub mod zone;

#[derive(Debug, PartialEq, Clone, thiserror::Error)]
pub enum GpsError {
    #[error("Circle must contain exactly one coordinate point, got {count}")]
    CircleCoords { count: usize },

    #[error("Polygon must contain at least three coordinate points, got {count}")]
    PolygonCoords { count: usize },

    #[error("Rectangle must contain exactly four coordinate points, got {count}")]
    RectangleCoords { count: usize },

    #[error("Containment not implemented for shape {shape:?}")]
    ContainsNotImplemented { shape: ZoneShape },
}
