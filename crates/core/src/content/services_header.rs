//! Heading block above the service cards. A singleton, edited as a whole.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::default_true;
use crate::types::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesHeader {
    pub main_title: String,
    pub subtitle: String,
    pub is_active: bool,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateServicesHeader {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub main_title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ServicesHeader {
    pub fn new(main_title: impl Into<String>, subtitle: impl Into<String>, now: Timestamp) -> Self {
        Self {
            main_title: main_title.into(),
            subtitle: subtitle.into(),
            is_active: true,
            updated_at: now,
        }
    }

    /// Replace every field from `input` and stamp `updated_at`.
    pub fn replace(&mut self, input: UpdateServicesHeader, now: Timestamp) {
        self.main_title = input.main_title;
        self.subtitle = input.subtitle;
        self.is_active = input.is_active;
        self.updated_at = now;
    }
}
