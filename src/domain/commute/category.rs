//! Commute categories and the commentary shown for a winning category.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Category of a commuting alternative.
///
/// Attached to each alternative at ingestion time and used only for
/// presentation; the ranking engine never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommuteCategory {
    PublicTransit,
    Walking,
    Car,
    RideShare,
    Shuttle,
    Micromobility,
    #[default]
    Other,
}

/// Standard alternative names of the commuting survey, lowercased.
static KNOWN_LABELS: Lazy<HashMap<&'static str, CommuteCategory>> = Lazy::new(|| {
    HashMap::from([
        ("public transport", CommuteCategory::PublicTransit),
        ("bus", CommuteCategory::PublicTransit),
        ("walking", CommuteCategory::Walking),
        ("private car", CommuteCategory::Car),
        ("car", CommuteCategory::Car),
        ("ride-sharing", CommuteCategory::RideShare),
        ("ride sharing", CommuteCategory::RideShare),
        ("university shuttle", CommuteCategory::Shuttle),
        ("shuttle", CommuteCategory::Shuttle),
        ("bicycle/e-scooter", CommuteCategory::Micromobility),
        ("bicycle", CommuteCategory::Micromobility),
        ("e-scooter", CommuteCategory::Micromobility),
    ])
});

impl CommuteCategory {
    /// All categories in display order.
    pub const ALL: [CommuteCategory; 7] = [
        CommuteCategory::PublicTransit,
        CommuteCategory::Walking,
        CommuteCategory::Car,
        CommuteCategory::RideShare,
        CommuteCategory::Shuttle,
        CommuteCategory::Micromobility,
        CommuteCategory::Other,
    ];

    /// Stable tag used in workbooks and serialized output.
    pub fn tag(&self) -> &'static str {
        match self {
            CommuteCategory::PublicTransit => "public_transit",
            CommuteCategory::Walking => "walking",
            CommuteCategory::Car => "car",
            CommuteCategory::RideShare => "ride_share",
            CommuteCategory::Shuttle => "shuttle",
            CommuteCategory::Micromobility => "micromobility",
            CommuteCategory::Other => "other",
        }
    }

    /// Parses a stable tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag.trim())
    }

    /// Looks up one of the standard alternative names exactly (ignoring case
    /// and surrounding whitespace). Unknown names map to `Other`.
    pub fn from_known_label(label: &str) -> Self {
        KNOWN_LABELS
            .get(label.trim().to_lowercase().as_str())
            .copied()
            .unwrap_or_default()
    }

    /// One-line commentary for this category coming out on top.
    pub fn commentary(&self) -> &'static str {
        match self {
            CommuteCategory::PublicTransit => {
                "Bus on top: smooth and cheap, a chill ride while prices sleep!"
            }
            CommuteCategory::Walking => {
                "Walkin' wins: no fare to pay, but better leave by light of day!"
            }
            CommuteCategory::Car => {
                "Car takes gold, but let's be real: that fuel receipt? A painful deal!"
            }
            CommuteCategory::RideShare => "Sharing is caring, and apparently winning too!",
            CommuteCategory::Shuttle => "The shuttle wins: comfy, free, and always near!",
            CommuteCategory::Micromobility => {
                "Biking's boss: you're lean, you're fast, just hope that morning coffee lasts!"
            }
            CommuteCategory::Other => "Interesting result! Looks like there's a new favorite.",
        }
    }
}

impl fmt::Display for CommuteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for CommuteCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| {
            ValidationError::invalid_format("category", format!("unknown tag '{}'", s.trim()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for category in CommuteCategory::ALL {
            assert_eq!(CommuteCategory::from_tag(category.tag()), Some(category));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let result: Result<CommuteCategory, _> = "boat".parse();
        assert_eq!(
            result,
            Err(ValidationError::invalid_format("category", "unknown tag 'boat'"))
        );
    }

    #[test]
    fn known_labels_map_to_categories() {
        assert_eq!(
            CommuteCategory::from_known_label("Public Transport"),
            CommuteCategory::PublicTransit
        );
        assert_eq!(CommuteCategory::from_known_label(" walking "), CommuteCategory::Walking);
        assert_eq!(CommuteCategory::from_known_label("Private Car"), CommuteCategory::Car);
        assert_eq!(CommuteCategory::from_known_label("Ride-Sharing"), CommuteCategory::RideShare);
        assert_eq!(
            CommuteCategory::from_known_label("University Shuttle"),
            CommuteCategory::Shuttle
        );
        assert_eq!(
            CommuteCategory::from_known_label("Bicycle/E-scooter"),
            CommuteCategory::Micromobility
        );
    }

    #[test]
    fn labels_are_not_substring_matched() {
        assert_eq!(CommuteCategory::from_known_label("Carpool"), CommuteCategory::Other);
        assert_eq!(CommuteCategory::from_known_label("Bus rapid transit"), CommuteCategory::Other);
    }

    #[test]
    fn every_category_has_commentary() {
        for category in CommuteCategory::ALL {
            assert!(!category.commentary().is_empty());
        }
    }

    #[test]
    fn serializes_as_tag() {
        let json = serde_json::to_string(&CommuteCategory::RideShare).unwrap();
        assert_eq!(json, "\"ride_share\"");
    }
}
