//! Core data models for the blueprint map.
//! Points of interest, district presets and the bundled data file that carries them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::StageConfig;
use crate::error::MapError;
use crate::state::{Point, WorldBounds};

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

const BUNDLED_DATA: &str = include_str!("../assets/blueprint.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiKind {
    Shop,
    Venue,
    Ngo,
}

impl PoiKind {
    pub fn label(&self) -> &'static str {
        match self {
            PoiKind::Shop => "Shop",
            PoiKind::Venue => "Venue",
            PoiKind::Ngo => "NGO",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PoiKind::Shop => "#58a6ff",
            PoiKind::Venue => "#d2a8ff",
            PoiKind::Ngo => "#3fb950",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoiLinks {
    /// The client's live site.
    pub site: String,
    /// Portfolio case study route.
    pub case: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: String,
    pub kind: PoiKind,
    /// World coordinates, fixed for the session.
    pub position: Point,
    pub title: String,
    pub short_label: String,
    pub tagline: String,
    pub links: PoiLinks,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub address: String,
    /// Logo asset path.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub badges: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraTarget {
    pub position: Point,
    pub zoom: f64,
}

/// Named camera preset with its own page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    pub label: String,
    pub target: CameraTarget,
    pub page_href: String,
}

/// Ordered, read-only POI list with O(1) lookup by id.
///
/// Insertion order is render and tab order. Duplicate ids resolve to the last
/// entry; validating uniqueness is the data file's job.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoiRegistry {
    pois: Vec<Poi>,
    index: HashMap<String, usize>,
}

impl PoiRegistry {
    pub fn new(pois: Vec<Poi>) -> Self {
        let index = pois
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self { pois, index }
    }

    pub fn get(&self, id: &str) -> Option<&Poi> {
        self.index.get(id).map(|&i| &self.pois[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Poi> {
        self.pois.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    /// POI bounding box grown by `padding`, or the fallback box when empty.
    pub fn world_bounds(&self, padding: f64) -> WorldBounds {
        WorldBounds::around(self.pois.iter().map(|p| p.position), padding)
    }
}

/// Everything the map needs from its data file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlueprintData {
    #[serde(default)]
    pub stage: StageConfig,
    #[serde(default)]
    pub pois: Vec<Poi>,
    #[serde(default)]
    pub districts: Vec<District>,
}

impl BlueprintData {
    pub fn from_json(raw: &str) -> Result<Self, MapError> {
        let data: BlueprintData = serde_json::from_str(raw)?;
        data.validate()?;
        Ok(data)
    }

    /// The data file compiled into the binary.
    pub fn bundled() -> Result<Self, MapError> {
        Self::from_json(BUNDLED_DATA)
    }

    pub fn validate(&self) -> Result<(), MapError> {
        self.stage.validate()?;
        for poi in &self.pois {
            if poi.id.trim().is_empty() {
                return Err(MapError::EmptyPoiId);
            }
            if !(poi.position.x.is_finite() && poi.position.y.is_finite()) {
                return Err(MapError::NonFinitePosition { id: poi.id.clone() });
            }
        }
        Ok(())
    }

    pub fn registry(&self) -> PoiRegistry {
        PoiRegistry::new(self.pois.clone())
    }
}

/// How a link should be followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// A route of this site; same tab.
    Internal,
    /// Another origin; new tab without opener.
    External,
}

impl LinkTarget {
    pub fn classify(href: &str) -> LinkTarget {
        let h = href.trim().to_ascii_lowercase();
        if h.starts_with("http://")
            || h.starts_with("https://")
            || h.starts_with("//")
            || h.starts_with("mailto:")
            || h.starts_with("tel:")
        {
            LinkTarget::External
        } else {
            LinkTarget::Internal
        }
    }
}
