//! Display metadata for closed status/category enums.
//!
//! Each enum that renders as a coloured badge implements [`Badge`] with a
//! constant table mapping every variant to its label and [`Tone`]. The admin
//! console reads these through `GET /api/v1/meta/filters` instead of keeping
//! its own string-keyed colour maps.

use serde::Serialize;

use crate::filter::FILTER_ALL;

/// Badge colour family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Blue,
    Green,
    Gray,
    Yellow,
    Pink,
    Purple,
    Orange,
    Red,
}

/// One row of a badge lookup table.
#[derive(Debug, Clone, Copy)]
pub struct BadgeEntry<K: 'static> {
    pub key: K,
    pub label: &'static str,
    pub tone: Tone,
}

/// A closed enum with a wire value, a human label and a badge tone.
pub trait Badge: Copy + PartialEq + 'static {
    /// Lookup table; must list every variant exactly once.
    const TABLE: &'static [BadgeEntry<Self>];

    /// Wire value, identical to the serde representation.
    fn as_str(self) -> &'static str;

    fn label(self) -> &'static str {
        self.entry().map_or(self.as_str(), |e| e.label)
    }

    fn tone(self) -> Tone {
        self.entry().map_or(Tone::Gray, |e| e.tone)
    }

    fn entry(self) -> Option<&'static BadgeEntry<Self>> {
        Self::TABLE.iter().find(|e| e.key == self)
    }
}

/// A selectable filter value as shown in the admin list dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    pub tone: Option<Tone>,
}

impl FilterOption {
    /// The leading "all" option with a context-specific label.
    pub fn all(label: &'static str) -> Self {
        Self {
            value: FILTER_ALL,
            label,
            tone: None,
        }
    }

    /// One option per variant of `K`, in table order.
    pub fn from_badge<K: Badge>() -> Vec<Self> {
        K::TABLE
            .iter()
            .map(|e| FilterOption {
                value: e.key.as_str(),
                label: e.label,
                tone: Some(e.tone),
            })
            .collect()
    }
}
