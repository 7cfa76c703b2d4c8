//! Service cards on the public services page.
//!
//! Cards are admin-ordered and individually hideable. The icon is a closed
//! [`CardIcon`] enum rather than a free-form component name.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::default_true;
use crate::collection::{Activatable, NewRecord, Ordered, Patch, Record};
use crate::filter::Searchable;
use crate::types::{DbId, Timestamp};
use crate::validation::clean_list;

/// Icons a service card can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardIcon {
    #[default]
    Calendar,
    Users,
    BookOpen,
    Settings,
}

impl CardIcon {
    pub const ALL: &'static [CardIcon] = &[
        CardIcon::Calendar,
        CardIcon::Users,
        CardIcon::BookOpen,
        CardIcon::Settings,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCard {
    pub id: DbId,
    pub card_title: String,
    pub card_subtitle: String,
    pub description: String,
    pub image_url: String,
    pub icon: CardIcon,
    pub features: Vec<String>,
    pub button_text: String,
    pub button_link: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServiceCard {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub card_title: String,
    #[serde(default)]
    pub card_subtitle: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub icon: CardIcon,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub button_text: String,
    #[serde(default)]
    pub button_link: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateServiceCard {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub card_title: Option<String>,
    pub card_subtitle: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub icon: Option<CardIcon>,
    /// Replaces the whole feature list when present.
    pub features: Option<Vec<String>>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub is_active: Option<bool>,
}

impl Record for ServiceCard {
    const ENTITY: &'static str = "service_card";

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

impl Ordered for ServiceCard {}

impl Activatable for ServiceCard {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Searchable for ServiceCard {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.card_title.as_str(),
            self.card_subtitle.as_str(),
            self.description.as_str(),
        ]
    }

    fn filter_keys(&self) -> Vec<&str> {
        vec![if self.is_active { "active" } else { "inactive" }]
    }
}

impl NewRecord for CreateServiceCard {
    type Record = ServiceCard;

    fn into_record(self, id: DbId, position: i32, now: Timestamp) -> ServiceCard {
        ServiceCard {
            id,
            card_title: self.card_title,
            card_subtitle: self.card_subtitle,
            description: self.description,
            image_url: self.image_url,
            icon: self.icon,
            features: clean_list(self.features),
            button_text: self.button_text,
            button_link: self.button_link,
            display_order: position,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Patch for UpdateServiceCard {
    type Record = ServiceCard;

    fn apply_to(self, record: &mut ServiceCard) {
        if let Some(card_title) = self.card_title {
            record.card_title = card_title;
        }
        if let Some(card_subtitle) = self.card_subtitle {
            record.card_subtitle = card_subtitle;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(image_url) = self.image_url {
            record.image_url = image_url;
        }
        if let Some(icon) = self.icon {
            record.icon = icon;
        }
        if let Some(features) = self.features {
            record.features = clean_list(features);
        }
        if let Some(button_text) = self.button_text {
            record.button_text = button_text;
        }
        if let Some(button_link) = self.button_link {
            record.button_link = button_link;
        }
        if let Some(is_active) = self.is_active {
            record.is_active = is_active;
        }
    }
}
