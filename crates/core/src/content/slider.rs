//! Homepage image slider entries.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_true, non_empty};
use crate::collection::{Activatable, NewRecord, Ordered, Patch, Record};
use crate::filter::Searchable;
use crate::types::{DbId, Timestamp};

/// One image in the homepage slider, rendered in `display_order`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderImage {
    pub id: DbId,
    pub image_url: String,
    pub alt_text: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding an image to the slider.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSliderImage {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub image_url: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub alt_text: String,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// DTO for editing a slider image. An empty `title`/`description` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSliderImage {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub image_url: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub alt_text: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl Record for SliderImage {
    const ENTITY: &'static str = "slider_image";

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

impl Ordered for SliderImage {}

impl Activatable for SliderImage {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Searchable for SliderImage {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.alt_text.as_str()];
        fields.extend(self.title.as_deref());
        fields.extend(self.description.as_deref());
        fields
    }

    fn filter_keys(&self) -> Vec<&str> {
        vec![if self.is_active { "active" } else { "inactive" }]
    }
}

impl NewRecord for CreateSliderImage {
    type Record = SliderImage;

    fn into_record(self, id: DbId, position: i32, now: Timestamp) -> SliderImage {
        SliderImage {
            id,
            image_url: self.image_url,
            alt_text: self.alt_text,
            title: non_empty(self.title),
            description: non_empty(self.description),
            display_order: position,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Patch for UpdateSliderImage {
    type Record = SliderImage;

    fn apply_to(self, record: &mut SliderImage) {
        if let Some(image_url) = self.image_url {
            record.image_url = image_url;
        }
        if let Some(alt_text) = self.alt_text {
            record.alt_text = alt_text;
        }
        if self.title.is_some() {
            record.title = non_empty(self.title);
        }
        if self.description.is_some() {
            record.description = non_empty(self.description);
        }
        if let Some(is_active) = self.is_active {
            record.is_active = is_active;
        }
    }
}
