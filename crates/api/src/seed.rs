//! Sample temple content loaded at startup when `SEED_SAMPLE_CONTENT` is on.
//!
//! Everything goes through the regular create path, so ids, positions and
//! validation match what the admin console would produce.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use mandir_core::collection::Collection;
use mandir_core::content::{
    CardIcon, CreateInfoCard, CreateServiceCard, CreateSliderImage, CreateTempleEvent,
    CreateTempleService, CreateTestimonial, EventStatus, EventType, InfoCard, InfoCardType,
    InfoIcon, Priority, ServiceCard, ServiceCategory, ServiceStatus, ServicesHeader, SliderImage,
    TempleEvent, TempleInfoHeader, TempleService, Testimonial, UpdateWelcomeSection,
    WelcomeSection,
};
use mandir_core::error::CoreError;

use crate::state::{
    ContentParts, ContentStore, DEFAULT_SERVICES_TITLE, DEFAULT_TEMPLE_INFO_TITLE,
    DEFAULT_WELCOME_TITLE,
};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=600";

/// Build a [`ContentStore`] holding the sample content.
pub fn sample_content() -> Result<ContentStore, CoreError> {
    let now = Utc::now();
    Ok(ContentStore::new(ContentParts {
        slider: sample_slider()?,
        events: sample_events()?,
        services: sample_services()?,
        service_cards: sample_service_cards()?,
        testimonials: sample_testimonials()?,
        info_cards: sample_info_cards()?,
        services_header: ServicesHeader::new(
            DEFAULT_SERVICES_TITLE,
            "Discover the various services, events, and activities our temple offers to the community.",
            now,
        ),
        temple_info_header: TempleInfoHeader::new(
            DEFAULT_TEMPLE_INFO_TITLE,
            "We welcome all devotees to experience the divine peace and spiritual growth at our sacred temple",
            now,
        ),
        welcome: WelcomeSection::new(
            UpdateWelcomeSection {
                section_title: DEFAULT_WELCOME_TITLE.into(),
                sanskrit_verse: "सर्वे भवन्तु सुखिनः सर्वे सन्तु निरामयाः".into(),
                sanskrit_translation: "May all beings be happy, may all beings be free from illness".into(),
                description: "Our temple is a sacred space dedicated to spiritual growth, community service, and preserving Hindu traditions. We welcome devotees from all walks of life to join us in prayer and celebration.".into(),
                background_image_url: "/placeholder.svg?height=600&width=1200".into(),
                primary_button_text: "Explore Our Temple".into(),
                primary_button_link: "#services".into(),
                secondary_button_text: "Visit Us Today".into(),
                secondary_button_link: "/contact".into(),
                is_active: true,
            },
            now,
        ),
    }))
}

fn sample_slider() -> Result<Collection<SliderImage>, CoreError> {
    let mut slider = Collection::new();
    for (alt_text, title, description, is_active) in [
        (
            "Temple main entrance",
            "Welcome to Our Sacred Temple",
            "Experience divine peace and spiritual growth",
            true,
        ),
        (
            "Temple celebration",
            "Join Our Celebrations",
            "Community festivals and spiritual gatherings",
            true,
        ),
        (
            "Temple interior",
            "Sacred Interior",
            "Beautifully designed prayer halls",
            false,
        ),
    ] {
        slider.create(CreateSliderImage {
            image_url: PLACEHOLDER_IMAGE.into(),
            alt_text: alt_text.into(),
            title: Some(title.into()),
            description: Some(description.into()),
            is_active,
        })?;
    }
    Ok(slider)
}

fn event(
    title: &str,
    event_type: EventType,
    date: NaiveDate,
    time: &str,
    location: &str,
    description: &str,
) -> CreateTempleEvent {
    CreateTempleEvent {
        title: title.into(),
        event_type,
        date,
        time: time.into(),
        location: location.into(),
        description: description.into(),
        organizer: String::new(),
        expected_attendees: String::new(),
        registration_required: false,
        status: EventStatus::default(),
        priority: Priority::default(),
        image_url: Some("/placeholder.svg".into()),
    }
}

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, CoreError> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| CoreError::Internal(format!("invalid sample date {y}-{m}-{d}")))
}

fn sample_events() -> Result<Collection<TempleEvent>, CoreError> {
    let mut events = Collection::new();

    events.create(CreateTempleEvent {
        organizer: "Festival Committee".into(),
        expected_attendees: "500+".into(),
        registration_required: true,
        status: EventStatus::Upcoming,
        priority: Priority::High,
        ..event(
            "Diwali Celebration",
            EventType::Festival,
            date(2024, 11, 12)?,
            "6:00 PM - 10:00 PM",
            "Main Temple Complex",
            "Grand Diwali celebration with traditional lighting ceremony, cultural programs, and feast",
        )
    })?;
    events.create(CreateTempleEvent {
        organizer: "Spiritual Committee".into(),
        expected_attendees: "100".into(),
        status: EventStatus::Recurring,
        ..event(
            "Weekly Satsang",
            EventType::Regular,
            date(2024, 2, 15)?,
            "7:00 PM - 8:30 PM",
            "Prayer Hall",
            "Weekly spiritual discourse and devotional singing",
        )
    })?;
    events.create(CreateTempleEvent {
        organizer: "Wellness Committee".into(),
        expected_attendees: "30".into(),
        registration_required: true,
        status: EventStatus::Draft,
        priority: Priority::Low,
        ..event(
            "Yoga Workshop",
            EventType::Workshop,
            date(2024, 2, 20)?,
            "8:00 AM - 12:00 PM",
            "Yoga Hall",
            "Introduction to spiritual yoga and meditation techniques",
        )
    })?;
    events.create(CreateTempleEvent {
        organizer: "Festival Committee".into(),
        expected_attendees: "800+".into(),
        status: EventStatus::Planning,
        priority: Priority::High,
        ..event(
            "Ram Navami Festival",
            EventType::Festival,
            date(2024, 4, 17)?,
            "5:00 AM - 12:00 PM",
            "Main Temple",
            "Celebration of Lord Rama's birthday with special prayers and procession",
        )
    })?;

    Ok(events)
}

fn sample_services() -> Result<Collection<TempleService>, CoreError> {
    let mut services = Collection::new();
    let rows = [
        (
            "Daily Aarti",
            ServiceCategory::Regular,
            "Morning and evening prayer ceremonies with devotional songs",
            "6:00 AM - 7:00 AM, 7:00 PM - 8:00 PM",
            "60 minutes",
            "100 people",
            "₹51 - ₹501",
            "Pandit Sharma",
            ServiceStatus::Active,
            "Main Temple Hall",
        ),
        (
            "Wedding Ceremony",
            ServiceCategory::Special,
            "Traditional Hindu wedding ceremonies with full rituals",
            "By appointment",
            "3-4 hours",
            "200 people",
            "₹5,001 - ₹25,000",
            "Pandit Gupta",
            ServiceStatus::Active,
            "Marriage Hall",
        ),
        (
            "Satyanarayan Puja",
            ServiceCategory::Festival,
            "Monthly puja for Lord Vishnu with prasadam distribution",
            "First Saturday of every month",
            "2 hours",
            "150 people",
            "₹501 - ₹2,101",
            "Pandit Verma",
            ServiceStatus::Scheduled,
            "Main Temple Hall",
        ),
        (
            "Yoga Classes",
            ServiceCategory::Wellness,
            "Weekly yoga and meditation sessions for spiritual wellness",
            "Tuesday & Thursday 6:00 AM",
            "90 minutes",
            "30 people",
            "₹201 per session",
            "Yoga Instructor Priya",
            ServiceStatus::Active,
            "Yoga Hall",
        ),
    ];

    for (name, category, description, schedule, duration, capacity, donation, priest, status, location) in rows {
        services.create(CreateTempleService {
            name: name.into(),
            category,
            description: description.into(),
            schedule: schedule.into(),
            duration: duration.into(),
            capacity: capacity.into(),
            donation: donation.into(),
            priest: priest.into(),
            status,
            location: location.into(),
        })?;
    }
    Ok(services)
}

fn sample_service_cards() -> Result<Collection<ServiceCard>, CoreError> {
    let mut cards = Collection::new();
    let rows = [
        (
            "Daily Pujas",
            "Morning & Evening Ceremonies",
            "Join our daily rituals to seek divine blessings and spiritual guidance. Our experienced priests perform traditional ceremonies following ancient Vedic traditions.",
            CardIcon::Calendar,
            ["Morning Aarti: 6:00 AM", "Noon Aarti: 12:00 PM", "Evening Aarti: 6:30 PM"],
            "View All Ceremonies",
            "/ceremonies",
        ),
        (
            "Community Services",
            "Serving Our Community",
            "We offer various community services focused on education, cultural preservation, and humanitarian aid. Our temple serves as a center for community growth and support.",
            CardIcon::Users,
            ["Free Food Distribution (Sundays)", "Health Camps (Monthly)", "Youth Mentoring Programs"],
            "Join Our Services",
            "/services",
        ),
        (
            "Spiritual Learning",
            "Ancient Wisdom & Modern Practice",
            "Deepen your spiritual understanding through our comprehensive learning programs, from ancient Sanskrit texts to modern meditation practices.",
            CardIcon::BookOpen,
            ["Sanskrit Classes (Weekends)", "Meditation Workshops", "Spiritual Discussion Groups"],
            "Start Learning",
            "/education",
        ),
    ];

    for (card_title, card_subtitle, description, icon, features, button_text, button_link) in rows {
        cards.create(CreateServiceCard {
            card_title: card_title.into(),
            card_subtitle: card_subtitle.into(),
            description: description.into(),
            image_url: "/placeholder.svg?height=400&width=600".into(),
            icon,
            features: features.iter().map(|f| f.to_string()).collect(),
            button_text: button_text.into(),
            button_link: button_link.into(),
            is_active: true,
        })?;
    }
    Ok(cards)
}

fn sample_testimonials() -> Result<Collection<Testimonial>, CoreError> {
    let mut testimonials = Collection::new();
    let rows = [
        (
            "Priya Sharma",
            "Temple Member for 5 years",
            "The peaceful atmosphere of this temple has been a source of great comfort to me. The priests are knowledgeable and the community is welcoming...",
            "The peaceful atmosphere of this temple has been a source of great comfort to me. The priests are knowledgeable and the community is welcoming. I've learned so much about our traditions here and feel spiritually connected every time I visit.",
        ),
        (
            "Raj Patel",
            "Parent & Community Volunteer",
            "I bring my children here to connect with our cultural roots. The educational programs and festival celebrations have helped them understand...",
            "I bring my children here to connect with our cultural roots. The educational programs and festival celebrations have helped them understand and appreciate our heritage.",
        ),
        (
            "Anita Desai",
            "Senior Community Member",
            "The community services provided by this temple have made a real difference in my life. From spiritual guidance to practical support...",
            "The community services provided by this temple have made a real difference in my life. From spiritual guidance to practical support, they truly embody the values they teach.",
        ),
        (
            "Vikram Mehta",
            "Cultural Committee Member",
            "The festivals celebrated at this temple are authentic and vibrant. It feels like being back in India, with all the traditional rituals...",
            "The festivals celebrated at this temple are authentic and vibrant. It feels like being back in India, with all the traditional rituals and customs observed meticulously.",
        ),
    ];

    for (name, role, text, full_text) in rows {
        testimonials.create(CreateTestimonial {
            name: name.into(),
            role: role.into(),
            text: text.into(),
            full_text: Some(full_text.into()),
            is_active: true,
        })?;
    }
    Ok(testimonials)
}

fn sample_info_cards() -> Result<Collection<InfoCard>, CoreError> {
    let mut cards = Collection::new();
    let rows = [
        (
            InfoCardType::Hours,
            "Temple Hours",
            InfoIcon::Calendar,
            [
                ("daily", "5:00 AM - 9:00 PM"),
                ("special_events", "Extended Hours"),
                ("festivals", "Open All Day"),
            ],
        ),
        (
            InfoCardType::Contact,
            "Contact Us",
            InfoIcon::Phone,
            [
                ("phone", "+1 (555) 123-4567"),
                ("email", "info@temple.org"),
                ("address", "123 Temple Street"),
            ],
        ),
        (
            InfoCardType::Location,
            "Find Us",
            InfoIcon::MapPin,
            [
                ("address", "123 Temple Street"),
                ("city", "Sacred City, SC 12345"),
                ("parking", "Free Parking Available"),
            ],
        ),
    ];

    for (card_type, card_title, icon, content) in rows {
        cards.create(CreateInfoCard {
            card_type,
            card_title: card_title.into(),
            icon: Some(icon),
            content: content
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
            is_active: true,
        })?;
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_content_loads_every_collection() {
        let store = sample_content().unwrap();

        let slider = store.slider.try_read().unwrap();
        assert_eq!(slider.len(), 3);
        assert_eq!(slider.active_count(), 2);

        assert_eq!(store.events.try_read().unwrap().len(), 4);
        assert_eq!(store.services.try_read().unwrap().len(), 4);
        assert_eq!(store.service_cards.try_read().unwrap().len(), 3);
        assert_eq!(store.testimonials.try_read().unwrap().len(), 4);
        assert_eq!(store.info_cards.try_read().unwrap().active_count(), 3);
    }

    #[test]
    fn sample_sections_carry_their_copy() {
        let store = sample_content().unwrap();

        let header = store.temple_info_header.try_read().unwrap();
        assert_eq!(header.section_title, DEFAULT_TEMPLE_INFO_TITLE);
        assert!(header.is_active);

        let welcome = store.welcome.try_read().unwrap();
        assert_eq!(welcome.primary_button_link, "#services");
        assert_eq!(welcome.secondary_button_link, "/contact");

        let cards = store.info_cards.try_read().unwrap();
        let contact = cards.get(2).unwrap();
        assert_eq!(contact.card_type, InfoCardType::Contact);
        assert_eq!(contact.content["email"], "info@temple.org");
    }

    #[test]
    fn sample_records_are_numbered_in_order() {
        let store = sample_content().unwrap();
        let events = store.events.try_read().unwrap();

        let titles: Vec<_> = events.list().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Diwali Celebration", "Weekly Satsang", "Yoga Workshop", "Ram Navami Festival"]
        );
        let ids: Vec<_> = events.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
