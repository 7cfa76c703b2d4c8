//! Temple services (aarti, ceremonies, classes) offered to devotees.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::badge::{Badge, BadgeEntry, Tone};
use crate::collection::{NewRecord, Patch, Record};
use crate::filter::Searchable;
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Regular,
    Special,
    Festival,
    Wellness,
}

impl Badge for ServiceCategory {
    const TABLE: &'static [BadgeEntry<Self>] = &[
        BadgeEntry { key: ServiceCategory::Regular, label: "Regular Services", tone: Tone::Purple },
        BadgeEntry { key: ServiceCategory::Special, label: "Special Occasions", tone: Tone::Orange },
        BadgeEntry { key: ServiceCategory::Festival, label: "Festival Services", tone: Tone::Pink },
        BadgeEntry { key: ServiceCategory::Wellness, label: "Wellness Programs", tone: Tone::Green },
    ];

    fn as_str(self) -> &'static str {
        match self {
            ServiceCategory::Regular => "regular",
            ServiceCategory::Special => "special",
            ServiceCategory::Festival => "festival",
            ServiceCategory::Wellness => "wellness",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    #[default]
    Active,
    Scheduled,
    Inactive,
}

impl Badge for ServiceStatus {
    const TABLE: &'static [BadgeEntry<Self>] = &[
        BadgeEntry { key: ServiceStatus::Active, label: "Active", tone: Tone::Green },
        BadgeEntry { key: ServiceStatus::Scheduled, label: "Scheduled", tone: Tone::Blue },
        BadgeEntry { key: ServiceStatus::Inactive, label: "Inactive", tone: Tone::Gray },
    ];

    fn as_str(self) -> &'static str {
        match self {
            ServiceStatus::Active => "active",
            ServiceStatus::Scheduled => "scheduled",
            ServiceStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TempleService {
    pub id: DbId,
    pub name: String,
    pub category: ServiceCategory,
    pub description: String,
    pub schedule: String,
    pub duration: String,
    pub capacity: String,
    /// Suggested donation range as displayed, e.g. "₹51 - ₹501".
    pub donation: String,
    pub priest: String,
    pub status: ServiceStatus,
    pub location: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTempleService {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub category: ServiceCategory,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub capacity: String,
    #[serde(default)]
    pub donation: String,
    #[serde(default)]
    pub priest: String,
    #[serde(default)]
    pub status: ServiceStatus,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTempleService {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    pub category: Option<ServiceCategory>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub duration: Option<String>,
    pub capacity: Option<String>,
    pub donation: Option<String>,
    pub priest: Option<String>,
    pub status: Option<ServiceStatus>,
    pub location: Option<String>,
}

impl Record for TempleService {
    const ENTITY: &'static str = "service";

    fn id(&self) -> DbId {
        self.id
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }
}

impl Searchable for TempleService {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn filter_keys(&self) -> Vec<&str> {
        vec![self.category.as_str(), self.status.as_str()]
    }
}

impl NewRecord for CreateTempleService {
    type Record = TempleService;

    fn into_record(self, id: DbId, _position: i32, now: Timestamp) -> TempleService {
        TempleService {
            id,
            name: self.name,
            category: self.category,
            description: self.description,
            schedule: self.schedule,
            duration: self.duration,
            capacity: self.capacity,
            donation: self.donation,
            priest: self.priest,
            status: self.status,
            location: self.location,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Patch for UpdateTempleService {
    type Record = TempleService;

    fn apply_to(self, record: &mut TempleService) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(schedule) = self.schedule {
            record.schedule = schedule;
        }
        if let Some(duration) = self.duration {
            record.duration = duration;
        }
        if let Some(capacity) = self.capacity {
            record.capacity = capacity;
        }
        if let Some(donation) = self.donation {
            record.donation = donation;
        }
        if let Some(priest) = self.priest {
            record.priest = priest;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(location) = self.location {
            record.location = location;
        }
    }
}
