//! Temple events (festivals, regular gatherings, workshops).
//!
//! Events are listed in creation order and filtered by either their
//! [`EventType`] or their [`EventStatus`]; they have no manual ordering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::non_empty;
use crate::badge::{Badge, BadgeEntry, Tone};
use crate::collection::{NewRecord, Patch, Record};
use crate::filter::Searchable;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Festival,
    Regular,
    Workshop,
    Special,
}

impl Badge for EventType {
    const TABLE: &'static [BadgeEntry<Self>] = &[
        BadgeEntry { key: EventType::Festival, label: "Festivals", tone: Tone::Pink },
        BadgeEntry { key: EventType::Regular, label: "Regular Events", tone: Tone::Purple },
        BadgeEntry { key: EventType::Workshop, label: "Workshops", tone: Tone::Orange },
        BadgeEntry { key: EventType::Special, label: "Special Occasions", tone: Tone::Red },
    ];

    fn as_str(self) -> &'static str {
        match self {
            EventType::Festival => "festival",
            EventType::Regular => "regular",
            EventType::Workshop => "workshop",
            EventType::Special => "special",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Upcoming,
    Recurring,
    #[default]
    Draft,
    Planning,
}

impl Badge for EventStatus {
    const TABLE: &'static [BadgeEntry<Self>] = &[
        BadgeEntry { key: EventStatus::Upcoming, label: "Upcoming", tone: Tone::Blue },
        BadgeEntry { key: EventStatus::Recurring, label: "Recurring", tone: Tone::Green },
        BadgeEntry { key: EventStatus::Draft, label: "Draft", tone: Tone::Gray },
        BadgeEntry { key: EventStatus::Planning, label: "Planning", tone: Tone::Yellow },
    ];

    fn as_str(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Recurring => "recurring",
            EventStatus::Draft => "draft",
            EventStatus::Planning => "planning",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Badge for Priority {
    const TABLE: &'static [BadgeEntry<Self>] = &[
        BadgeEntry { key: Priority::High, label: "High", tone: Tone::Red },
        BadgeEntry { key: Priority::Medium, label: "Medium", tone: Tone::Yellow },
        BadgeEntry { key: Priority::Low, label: "Low", tone: Tone::Gray },
    ];

    fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

// ---------------------------------------------------------------------------
// Record and DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TempleEvent {
    pub id: DbId,
    pub title: String,
    pub event_type: EventType,
    pub date: NaiveDate,
    /// Free-form time range, e.g. "6:00 PM - 10:00 PM".
    pub time: String,
    pub location: String,
    pub description: String,
    pub organizer: String,
    /// Free-form attendance estimate, e.g. "500+".
    pub expected_attendees: String,
    pub registration_required: bool,
    pub status: EventStatus,
    pub priority: Priority,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTempleEvent {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub event_type: EventType,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub expected_attendees: String,
    #[serde(default)]
    pub registration_required: bool,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub priority: Priority,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTempleEvent {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,
    pub event_type: Option<EventType>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,
    pub organizer: Option<String>,
    pub expected_attendees: Option<String>,
    pub registration_required: Option<bool>,
    pub status: Option<EventStatus>,
    pub priority: Option<Priority>,
    pub image_url: Option<String>,
}

impl Record for TempleEvent {
    const ENTITY: &'static str = "event";

    fn id(&self) -> DbId {
        self.id
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }
}

impl Searchable for TempleEvent {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn filter_keys(&self) -> Vec<&str> {
        vec![self.event_type.as_str(), self.status.as_str()]
    }
}

impl NewRecord for CreateTempleEvent {
    type Record = TempleEvent;

    fn into_record(self, id: DbId, _position: i32, now: Timestamp) -> TempleEvent {
        TempleEvent {
            id,
            title: self.title,
            event_type: self.event_type,
            date: self.date,
            time: self.time,
            location: self.location,
            description: self.description,
            organizer: self.organizer,
            expected_attendees: self.expected_attendees,
            registration_required: self.registration_required,
            status: self.status,
            priority: self.priority,
            image_url: non_empty(self.image_url),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Patch for UpdateTempleEvent {
    type Record = TempleEvent;

    fn apply_to(self, record: &mut TempleEvent) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(event_type) = self.event_type {
            record.event_type = event_type;
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(time) = self.time {
            record.time = time;
        }
        if let Some(location) = self.location {
            record.location = location;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(organizer) = self.organizer {
            record.organizer = organizer;
        }
        if let Some(expected) = self.expected_attendees {
            record.expected_attendees = expected;
        }
        if let Some(required) = self.registration_required {
            record.registration_required = required;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(priority) = self.priority {
            record.priority = priority;
        }
        if self.image_url.is_some() {
            record.image_url = non_empty(self.image_url);
        }
    }
}
