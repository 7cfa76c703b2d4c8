//! Heading block above the visitor information cards. A singleton.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::default_true;
use crate::types::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TempleInfoHeader {
    pub section_title: String,
    pub section_subtitle: String,
    pub is_active: bool,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTempleInfoHeader {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub section_title: String,
    #[serde(default)]
    pub section_subtitle: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl TempleInfoHeader {
    pub fn new(
        section_title: impl Into<String>,
        section_subtitle: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            section_title: section_title.into(),
            section_subtitle: section_subtitle.into(),
            is_active: true,
            updated_at: now,
        }
    }

    pub fn replace(&mut self, input: UpdateTempleInfoHeader, now: Timestamp) {
        self.section_title = input.section_title;
        self.section_subtitle = input.section_subtitle;
        self.is_active = input.is_active;
        self.updated_at = now;
    }
}
