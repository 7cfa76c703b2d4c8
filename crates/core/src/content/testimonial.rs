//! Devotee testimonials shown on the homepage carousel.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::default_true;
use crate::collection::{Activatable, NewRecord, Ordered, Patch, Record};
use crate::filter::Searchable;
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub role: String,
    /// Short excerpt shown on the card.
    pub text: String,
    /// Full text shown when the card is expanded.
    pub full_text: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestimonial {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub text: String,
    /// Defaults to `text` when omitted or empty.
    pub full_text: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTestimonial {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    pub role: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub text: Option<String>,
    pub full_text: Option<String>,
    pub is_active: Option<bool>,
}

impl Record for Testimonial {
    const ENTITY: &'static str = "testimonial";

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

impl Ordered for Testimonial {}

impl Activatable for Testimonial {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Searchable for Testimonial {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.role.as_str(),
            self.text.as_str(),
            self.full_text.as_str(),
        ]
    }

    fn filter_keys(&self) -> Vec<&str> {
        vec![if self.is_active { "active" } else { "inactive" }]
    }
}

impl NewRecord for CreateTestimonial {
    type Record = Testimonial;

    fn into_record(self, id: DbId, position: i32, now: Timestamp) -> Testimonial {
        let full_text = super::non_empty(self.full_text).unwrap_or_else(|| self.text.clone());
        Testimonial {
            id,
            name: self.name,
            role: self.role,
            text: self.text,
            full_text,
            display_order: position,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Patch for UpdateTestimonial {
    type Record = Testimonial;

    fn apply_to(self, record: &mut Testimonial) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(role) = self.role {
            record.role = role;
        }
        if let Some(text) = self.text {
            record.text = text;
        }
        if let Some(full_text) = self.full_text {
            record.full_text = full_text;
        }
        if let Some(is_active) = self.is_active {
            record.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;
    use crate::filter::ListFilter;

    #[test]
    fn full_text_defaults_to_excerpt() {
        let mut c = Collection::new();
        let t = c
            .create(CreateTestimonial {
                name: "Priya Sharma".into(),
                role: "Temple Member for 5 years".into(),
                text: "The peaceful atmosphere...".into(),
                full_text: None,
                is_active: true,
            })
            .unwrap();
        assert_eq!(t.full_text, "The peaceful atmosphere...");
        assert_eq!(t.display_order, 1);
    }

    #[test]
    fn search_covers_role_and_full_text() {
        let mut c = Collection::new();
        c.create(CreateTestimonial {
            name: "Raj Patel".into(),
            role: "Parent & Community Volunteer".into(),
            text: "I bring my children here".into(),
            full_text: Some("I bring my children here. The youth programs are excellent.".into()),
            is_active: true,
        })
        .unwrap();

        assert_eq!(c.filter(&ListFilter::new("volunteer", "all")).len(), 1);
        assert_eq!(c.filter(&ListFilter::new("YOUTH", "all")).len(), 1);
        assert!(c.filter(&ListFilter::new("festival", "all")).is_empty());
    }

    #[test]
    fn search_finds_words_only_in_the_excerpt() {
        let mut c = Collection::new();
        c.create(CreateTestimonial {
            name: "Anita Desai".into(),
            role: "Senior Community Member".into(),
            text: "Short excerpt about kirtan".into(),
            full_text: Some("A long story about the youth programs".into()),
            is_active: true,
        })
        .unwrap();
        assert_eq!(c.filter(&ListFilter::new("kirtan", "all")).len(), 1);

        let patch = UpdateTestimonial {
            text: Some("Evening bhajans every Friday".into()),
            ..Default::default()
        };
        c.update(1, patch).unwrap();
        assert_eq!(c.filter(&ListFilter::new("bhajans", "all")).len(), 1);
    }
}
