//! Radical part catalog.
//!
//! The parts the conveyor spawns and the assembly surface places. Loaded
//! from embedded JSON so deployments can swap the set without code changes.

use serde::{Deserialize, Serialize};

use crate::lane::Lane;

const DEFAULT_PARTS_DATA: &str = include_str!("../data/parts.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub label: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PartCatalog {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl PartCatalog {
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_PARTS_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn by_label(&self, label: char) -> Option<&Part> {
        self.parts.iter().find(|p| p.label == label)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<char> {
        self.parts.iter().map(|p| p.label).collect()
    }
}

/// Per-lane symbol pools. Every lane must end up non-empty; the session
/// validates this before it will start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanePools {
    #[serde(default)]
    pub top: Vec<char>,
    #[serde(default)]
    pub right: Vec<char>,
    #[serde(default)]
    pub bottom: Vec<char>,
    #[serde(default)]
    pub left: Vec<char>,
}

impl LanePools {
    /// Distribute a catalog round-robin across the four lanes.
    #[must_use]
    pub fn from_catalog(catalog: &PartCatalog) -> Self {
        let mut pools = Self {
            top: Vec::new(),
            right: Vec::new(),
            bottom: Vec::new(),
            left: Vec::new(),
        };
        for (i, part) in catalog.parts.iter().enumerate() {
            match Lane::ALL[i % Lane::ALL.len()] {
                Lane::Top => pools.top.push(part.label),
                Lane::Right => pools.right.push(part.label),
                Lane::Bottom => pools.bottom.push(part.label),
                Lane::Left => pools.left.push(part.label),
            }
        }
        pools
    }

    #[must_use]
    pub fn pool(&self, lane: Lane) -> &[char] {
        match lane {
            Lane::Top => &self.top,
            Lane::Right => &self.right,
            Lane::Bottom => &self.bottom,
            Lane::Left => &self.left,
        }
    }
}

impl Default for LanePools {
    fn default() -> Self {
        Self::from_catalog(&PartCatalog::load_from_static())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_catalog_has_the_ten_radicals() {
        let catalog = PartCatalog::load_from_static();
        assert_eq!(catalog.parts.len(), 10);
        assert_eq!(catalog.by_id("person").map(|p| p.label), Some('亻'));
        assert_eq!(catalog.by_label('木').map(|p| p.id.as_str()), Some("tree"));
        assert!(catalog.by_id("dragon").is_none());
    }

    #[test]
    fn default_pools_leave_no_lane_empty() {
        let pools = LanePools::default();
        for lane in Lane::ALL {
            assert!(!pools.pool(lane).is_empty(), "{lane} pool is empty");
        }
    }

    #[test]
    fn round_robin_covers_every_label_exactly_once() {
        let catalog = PartCatalog::load_from_static();
        let pools = LanePools::from_catalog(&catalog);
        let mut all: Vec<char> = Lane::ALL
            .iter()
            .flat_map(|l| pools.pool(*l).to_vec())
            .collect();
        all.sort_unstable();
        let mut labels = catalog.labels();
        labels.sort_unstable();
        assert_eq!(all, labels);
    }
}
