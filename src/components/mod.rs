pub mod app;
pub mod blueprint_map;
pub mod map_hud;
pub mod minimap;
pub mod nav_link;
pub mod poi_marker;
pub mod poi_modal;
pub mod poi_panel;
