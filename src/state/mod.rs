pub mod camera;
pub mod drag;
pub mod keys;
pub mod minimap;
pub mod selection;
pub mod stage;

pub use camera::{Point, Size, ZoomLimits};
pub use minimap::{MinimapProjection, MinimapRect, WorldBounds};
pub use selection::{Selection, SelectionAction};
pub use stage::{PointerMove, Stage};
