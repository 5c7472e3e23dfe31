use thiserror::Error;

/// Errors raised while loading blueprint data or stage configuration.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to parse blueprint data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("point of interest has an empty id")]
    EmptyPoiId,

    #[error("point of interest {id:?} has a non-finite position")]
    NonFinitePosition { id: String },

    #[error("invalid zoom limits: min {min}, max {max}")]
    InvalidZoomLimits { min: f64, max: f64 },

    #[error("invalid stage config: {0}")]
    InvalidConfig(&'static str),
}
