//! Visitor information cards (hours, contact, directions) on the temple
//! info section.
//!
//! A card's body is a small key/value map. Each [`InfoCardType`] carries a
//! [`CardTemplate`] naming the keys a new card of that type starts with.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::default_true;
use crate::badge::{Badge, BadgeEntry, Tone};
use crate::collection::{Activatable, NewRecord, Ordered, Patch, Record};
use crate::filter::Searchable;
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoCardType {
    Hours,
    Contact,
    Location,
    #[default]
    Other,
}

impl Badge for InfoCardType {
    const TABLE: &'static [BadgeEntry<Self>] = &[
        BadgeEntry { key: InfoCardType::Hours, label: "Temple Hours", tone: Tone::Blue },
        BadgeEntry { key: InfoCardType::Contact, label: "Contact Information", tone: Tone::Blue },
        BadgeEntry { key: InfoCardType::Location, label: "Location & Directions", tone: Tone::Blue },
        BadgeEntry { key: InfoCardType::Other, label: "Custom Information", tone: Tone::Blue },
    ];

    fn as_str(self) -> &'static str {
        match self {
            InfoCardType::Hours => "hours",
            InfoCardType::Contact => "contact",
            InfoCardType::Location => "location",
            InfoCardType::Other => "other",
        }
    }
}

/// Starting title, icon and content keys for a new card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardTemplate {
    pub card_type: InfoCardType,
    pub card_title: &'static str,
    pub icon: InfoIcon,
    pub fields: &'static [&'static str],
}

impl InfoCardType {
    pub const TEMPLATES: &'static [CardTemplate] = &[
        CardTemplate {
            card_type: InfoCardType::Hours,
            card_title: "Temple Hours",
            icon: InfoIcon::Calendar,
            fields: &["daily", "special_events", "festivals"],
        },
        CardTemplate {
            card_type: InfoCardType::Contact,
            card_title: "Contact Us",
            icon: InfoIcon::Phone,
            fields: &["phone", "email", "address"],
        },
        CardTemplate {
            card_type: InfoCardType::Location,
            card_title: "Find Us",
            icon: InfoIcon::MapPin,
            fields: &["address", "city", "parking"],
        },
        CardTemplate {
            card_type: InfoCardType::Other,
            card_title: "Custom Info",
            icon: InfoIcon::Calendar,
            fields: &["info1", "info2", "info3"],
        },
    ];

    pub fn template(self) -> &'static CardTemplate {
        match self {
            InfoCardType::Hours => &Self::TEMPLATES[0],
            InfoCardType::Contact => &Self::TEMPLATES[1],
            InfoCardType::Location => &Self::TEMPLATES[2],
            InfoCardType::Other => &Self::TEMPLATES[3],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfoIcon {
    #[default]
    Calendar,
    Phone,
    MapPin,
    Clock,
}

impl InfoIcon {
    pub const ALL: &'static [InfoIcon] = &[
        InfoIcon::Calendar,
        InfoIcon::Phone,
        InfoIcon::MapPin,
        InfoIcon::Clock,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoCard {
    pub id: DbId,
    pub card_type: InfoCardType,
    pub card_title: String,
    pub icon: InfoIcon,
    pub content: BTreeMap<String, String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInfoCard {
    #[serde(default)]
    pub card_type: InfoCardType,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub card_title: String,
    /// Defaults to the card type's template icon.
    pub icon: Option<InfoIcon>,
    /// Defaults to the template's keys with empty values.
    #[serde(default)]
    pub content: BTreeMap<String, String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInfoCard {
    pub card_type: Option<InfoCardType>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub card_title: Option<String>,
    pub icon: Option<InfoIcon>,
    /// Replaces the whole content map when present.
    pub content: Option<BTreeMap<String, String>>,
    pub is_active: Option<bool>,
}

/// Trim keys and drop entries whose key is blank.
fn clean_content(content: BTreeMap<String, String>) -> BTreeMap<String, String> {
    content
        .into_iter()
        .filter_map(|(key, value)| {
            let key = key.trim();
            (!key.is_empty()).then(|| (key.to_string(), value))
        })
        .collect()
}

impl Record for InfoCard {
    const ENTITY: &'static str = "info_card";

    fn id(&self) -> DbId {
        self.id
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    fn display_order(&self) -> Option<i32> {
        Some(self.display_order)
    }

    fn set_display_order(&mut self, order: i32) {
        self.display_order = order;
    }
}

impl Ordered for InfoCard {}

impl Activatable for InfoCard {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Searchable for InfoCard {
    fn search_fields(&self) -> Vec<&str> {
        std::iter::once(self.card_title.as_str())
            .chain(self.content.values().map(String::as_str))
            .collect()
    }

    fn filter_keys(&self) -> Vec<&str> {
        vec![
            self.card_type.as_str(),
            if self.is_active { "active" } else { "inactive" },
        ]
    }
}

impl NewRecord for CreateInfoCard {
    type Record = InfoCard;

    fn into_record(self, id: DbId, position: i32, now: Timestamp) -> InfoCard {
        let template = self.card_type.template();
        let mut content = clean_content(self.content);
        if content.is_empty() {
            content = template
                .fields
                .iter()
                .map(|field| (field.to_string(), String::new()))
                .collect();
        }

        InfoCard {
            id,
            card_type: self.card_type,
            card_title: self.card_title,
            icon: self.icon.unwrap_or(template.icon),
            content,
            display_order: position,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Patch for UpdateInfoCard {
    type Record = InfoCard;

    fn apply_to(self, record: &mut InfoCard) {
        if let Some(card_type) = self.card_type {
            record.card_type = card_type;
        }
        if let Some(card_title) = self.card_title {
            record.card_title = card_title;
        }
        if let Some(icon) = self.icon {
            record.icon = icon;
        }
        if let Some(content) = self.content {
            record.content = clean_content(content);
        }
        if let Some(is_active) = self.is_active {
            record.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::tests::assert_table_complete;
    use crate::collection::{Collection, Direction, MoveOutcome};
    use crate::filter::ListFilter;

    fn new_card(card_type: InfoCardType, title: &str) -> CreateInfoCard {
        CreateInfoCard {
            card_type,
            card_title: title.into(),
            icon: None,
            content: BTreeMap::new(),
            is_active: true,
        }
    }

    // -----------------------------------------------------------------------
    // Types and templates
    // -----------------------------------------------------------------------

    #[test]
    fn card_type_table_is_complete() {
        assert_table_complete(&[
            InfoCardType::Hours,
            InfoCardType::Contact,
            InfoCardType::Location,
            InfoCardType::Other,
        ]);
    }

    #[test]
    fn every_type_finds_its_own_template() {
        for template in InfoCardType::TEMPLATES {
            assert_eq!(template.card_type.template(), template);
        }
    }

    #[test]
    fn icon_uses_component_names_on_the_wire() {
        assert_eq!(serde_json::to_value(InfoIcon::MapPin).unwrap(), "MapPin");
        assert!(serde_json::from_value::<InfoIcon>(serde_json::json!("Globe")).is_err());
    }

    #[test]
    fn unknown_card_type_is_rejected() {
        let body = serde_json::json!({"card_type": "parking", "card_title": "Lot"});
        assert!(serde_json::from_value::<CreateInfoCard>(body).is_err());
    }

    // -----------------------------------------------------------------------
    // Create and update
    // -----------------------------------------------------------------------

    #[test]
    fn empty_content_starts_from_the_template() {
        let mut cards = Collection::new();
        let card = cards.create(new_card(InfoCardType::Contact, "Contact Us")).unwrap();
        assert_eq!(card.icon, InfoIcon::Phone);
        let keys: Vec<&str> = card.content.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["address", "email", "phone"]);
        assert!(card.content.values().all(String::is_empty));
    }

    #[test]
    fn explicit_icon_and_content_are_kept() {
        let mut cards = Collection::new();
        let mut input = new_card(InfoCardType::Hours, "Temple Hours");
        input.icon = Some(InfoIcon::Clock);
        input.content.insert(" daily ".into(), "5:00 AM - 9:00 PM".into());
        input.content.insert("  ".into(), "dropped".into());

        let card = cards.create(input).unwrap();
        assert_eq!(card.icon, InfoIcon::Clock);
        assert_eq!(card.content.len(), 1);
        assert_eq!(card.content["daily"], "5:00 AM - 9:00 PM");
    }

    #[test]
    fn content_is_replaced_wholesale_on_update() {
        let mut cards = Collection::new();
        cards.create(new_card(InfoCardType::Location, "Find Us")).unwrap();

        let patch = UpdateInfoCard {
            content: Some(BTreeMap::from([("parking".into(), "Free".into())])),
            ..Default::default()
        };
        let card = cards.update(1, patch).unwrap().unwrap();
        assert_eq!(card.content, BTreeMap::from([("parking".into(), "Free".into())]));
        assert_eq!(card.card_title, "Find Us");
    }

    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    #[test]
    fn search_covers_content_values_and_filter_covers_type() {
        let mut cards = Collection::new();
        let mut hours = new_card(InfoCardType::Hours, "Temple Hours");
        hours.content.insert("festivals".into(), "Open All Day".into());
        cards.create(hours).unwrap();
        cards.create(new_card(InfoCardType::Contact, "Contact Us")).unwrap();

        assert_eq!(cards.filter(&ListFilter::new("open all", "all")).len(), 1);
        assert_eq!(cards.filter(&ListFilter::new("", "contact")).len(), 1);
        assert_eq!(cards.filter(&ListFilter::new("", "active")).len(), 2);
        assert!(cards.filter(&ListFilter::new("temple", "contact")).is_empty());
    }

    #[test]
    fn cards_move_up_and_toggle() {
        let mut cards = Collection::new();
        cards.create(new_card(InfoCardType::Hours, "Temple Hours")).unwrap();
        cards.create(new_card(InfoCardType::Contact, "Contact Us")).unwrap();

        assert_eq!(cards.reorder(2, Direction::Up), MoveOutcome::Moved { from: 1, to: 0 });
        assert_eq!(cards.list()[0].card_title, "Contact Us");
        assert_eq!(cards.get(2).unwrap().display_order, 1);

        let card = cards.toggle_active(1).unwrap();
        assert!(!card.is_active);
        assert_eq!(cards.active_count(), 1);
    }
}
