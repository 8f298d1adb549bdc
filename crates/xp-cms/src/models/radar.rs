//! Technology radar records.

use std::fmt;

use serde::Deserialize;

use super::{ListItem, Tag};

/// Radar quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum RadarQuadrant {
    #[serde(rename = "Technieken")]
    Techniques,
    #[serde(rename = "Tools")]
    Tools,
    #[serde(rename = "Platformen")]
    Platforms,
    #[serde(rename = "Talen & Frameworks")]
    LanguagesAndFrameworks,
}

impl RadarQuadrant {
    /// All quadrants in display order.
    pub const ALL: [Self; 4] = [
        Self::Techniques,
        Self::Tools,
        Self::Platforms,
        Self::LanguagesAndFrameworks,
    ];

    /// Label as used by the CMS.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Techniques => "Technieken",
            Self::Tools => "Tools",
            Self::Platforms => "Platformen",
            Self::LanguagesAndFrameworks => "Talen & Frameworks",
        }
    }

    /// Zero-based position in [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Techniques => 0,
            Self::Tools => 1,
            Self::Platforms => 2,
            Self::LanguagesAndFrameworks => 3,
        }
    }
}

impl fmt::Display for RadarQuadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Radar ring, ordered from the center outwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum RadarRing {
    Adopt,
    Trial,
    Assess,
    Hold,
}

impl RadarRing {
    /// All rings from center to edge.
    pub const ALL: [Self; 4] = [Self::Adopt, Self::Trial, Self::Assess, Self::Hold];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Adopt => "Adopt",
            Self::Trial => "Trial",
            Self::Assess => "Assess",
            Self::Hold => "Hold",
        }
    }
}

impl fmt::Display for RadarRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Technology assessed on the radar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RadarItem {
    pub slug: String,
    pub quadrant: RadarQuadrant,
    pub ring: RadarRing,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pros: Vec<ListItem>,
    #[serde(default)]
    pub cons: Vec<ListItem>,
    #[serde(default)]
    pub conclusion: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_quadrant_labels() {
        let item: RadarItem = serde_json::from_value(json!({
            "slug": "rust",
            "quadrant": "Talen & Frameworks",
            "ring": "Trial",
            "title": "Rust"
        }))
        .unwrap();
        assert_eq!(item.quadrant, RadarQuadrant::LanguagesAndFrameworks);
        assert_eq!(item.ring, RadarRing::Trial);
        assert_eq!(item.quadrant.to_string(), "Talen & Frameworks");
    }

    #[test]
    fn test_unknown_ring_rejected() {
        let result: Result<RadarItem, _> = serde_json::from_value(json!({
            "slug": "x",
            "quadrant": "Tools",
            "ring": "Maybe",
            "title": "X"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_ring_order() {
        assert!(RadarRing::Adopt < RadarRing::Hold);
        assert_eq!(RadarQuadrant::Platforms.index(), 2);
    }
}
