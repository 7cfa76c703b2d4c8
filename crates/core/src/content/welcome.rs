//! The hero block at the top of the home page: title, a Sanskrit verse with
//! its translation, a background image and two call-to-action buttons.
//!
//! A singleton, saved as a whole. [`SUGGESTED_VERSES`] are the quick picks
//! the editor offers next to the verse fields.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::default_true;
use crate::types::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WelcomeSection {
    pub section_title: String,
    pub sanskrit_verse: String,
    pub sanskrit_translation: String,
    pub description: String,
    pub background_image_url: String,
    pub primary_button_text: String,
    pub primary_button_link: String,
    pub secondary_button_text: String,
    pub secondary_button_link: String,
    pub is_active: bool,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateWelcomeSection {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub section_title: String,
    #[serde(default)]
    pub sanskrit_verse: String,
    #[serde(default)]
    pub sanskrit_translation: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub background_image_url: String,
    #[serde(default)]
    pub primary_button_text: String,
    #[serde(default)]
    pub primary_button_link: String,
    #[serde(default)]
    pub secondary_button_text: String,
    #[serde(default)]
    pub secondary_button_link: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// A verse and its English rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub sanskrit: &'static str,
    pub translation: &'static str,
}

pub const SUGGESTED_VERSES: &[Verse] = &[
    Verse {
        sanskrit: "सर्वे भवन्तु सुखिनः सर्वे सन्तु निरामयाः",
        translation: "May all beings be happy, may all beings be free from illness",
    },
    Verse {
        sanskrit: "वसुधैव कुटुम्बकम्",
        translation: "The world is one family",
    },
    Verse {
        sanskrit: "सत्यमेव जयते",
        translation: "Truth alone triumphs",
    },
    Verse {
        sanskrit: "शान्ति शान्ति शान्तिः",
        translation: "Peace, Peace, Peace",
    },
];

impl WelcomeSection {
    /// Build from an update payload, as seeding and tests do.
    pub fn new(input: UpdateWelcomeSection, now: Timestamp) -> Self {
        Self {
            section_title: input.section_title,
            sanskrit_verse: input.sanskrit_verse,
            sanskrit_translation: input.sanskrit_translation,
            description: input.description,
            background_image_url: input.background_image_url,
            primary_button_text: input.primary_button_text,
            primary_button_link: input.primary_button_link,
            secondary_button_text: input.secondary_button_text,
            secondary_button_link: input.secondary_button_link,
            is_active: input.is_active,
            updated_at: now,
        }
    }

    /// Replace every field from `input` and stamp `updated_at`.
    pub fn replace(&mut self, input: UpdateWelcomeSection, now: Timestamp) {
        *self = Self::new(input, now);
    }
}
