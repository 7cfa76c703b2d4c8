use std::sync::Arc;

use chrono::Utc;
use mandir_core::collection::{Collection, NewRecord, Patch, Record};
use mandir_core::content::{
    CreateInfoCard, CreateServiceCard, CreateSliderImage, CreateTempleEvent, CreateTempleService,
    CreateTestimonial, InfoCard, ServiceCard, ServicesHeader, SliderImage, TempleEvent,
    TempleInfoHeader, TempleService, Testimonial, UpdateInfoCard, UpdateServiceCard,
    UpdateSliderImage, UpdateTempleEvent, UpdateTempleService, UpdateTestimonial,
    UpdateWelcomeSection, WelcomeSection,
};
use mandir_core::filter::Searchable;
use mandir_events::{ActivityLog, ContentEvent, EventBus};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::config::ServerConfig;

/// Default heading shown above the service cards.
pub const DEFAULT_SERVICES_TITLE: &str = "Our Services & Events";

/// Default heading shown above the visitor information cards.
pub const DEFAULT_TEMPLE_INFO_TITLE: &str = "Visit Our Temple";

/// Default title of the home page welcome section.
pub const DEFAULT_WELCOME_TITLE: &str = "Welcome to Our Sacred Temple";

/// Every content collection the admin console manages.
///
/// Each collection sits behind its own lock; handlers hold a lock for a
/// single store call only.
pub struct ContentStore {
    pub slider: RwLock<Collection<SliderImage>>,
    pub events: RwLock<Collection<TempleEvent>>,
    pub services: RwLock<Collection<TempleService>>,
    pub service_cards: RwLock<Collection<ServiceCard>>,
    pub testimonials: RwLock<Collection<Testimonial>>,
    pub info_cards: RwLock<Collection<InfoCard>>,
    pub services_header: RwLock<ServicesHeader>,
    pub temple_info_header: RwLock<TempleInfoHeader>,
    pub welcome: RwLock<WelcomeSection>,
}

/// Unlocked contents for [`ContentStore::new`].
pub struct ContentParts {
    pub slider: Collection<SliderImage>,
    pub events: Collection<TempleEvent>,
    pub services: Collection<TempleService>,
    pub service_cards: Collection<ServiceCard>,
    pub testimonials: Collection<Testimonial>,
    pub info_cards: Collection<InfoCard>,
    pub services_header: ServicesHeader,
    pub temple_info_header: TempleInfoHeader,
    pub welcome: WelcomeSection,
}

impl Default for ContentParts {
    /// Empty collections and headers carrying only their default titles.
    fn default() -> Self {
        let now = Utc::now();
        Self {
            slider: Collection::new(),
            events: Collection::new(),
            services: Collection::new(),
            service_cards: Collection::new(),
            testimonials: Collection::new(),
            info_cards: Collection::new(),
            services_header: ServicesHeader::new(DEFAULT_SERVICES_TITLE, "", now),
            temple_info_header: TempleInfoHeader::new(DEFAULT_TEMPLE_INFO_TITLE, "", now),
            welcome: WelcomeSection::new(
                UpdateWelcomeSection {
                    section_title: DEFAULT_WELCOME_TITLE.into(),
                    sanskrit_verse: String::new(),
                    sanskrit_translation: String::new(),
                    description: String::new(),
                    background_image_url: String::new(),
                    primary_button_text: String::new(),
                    primary_button_link: String::new(),
                    secondary_button_text: String::new(),
                    secondary_button_link: String::new(),
                    is_active: true,
                },
                now,
            ),
        }
    }
}

impl ContentStore {
    pub fn new(parts: ContentParts) -> Self {
        Self {
            slider: RwLock::new(parts.slider),
            events: RwLock::new(parts.events),
            services: RwLock::new(parts.services),
            service_cards: RwLock::new(parts.service_cards),
            testimonials: RwLock::new(parts.testimonials),
            info_cards: RwLock::new(parts.info_cards),
            services_header: RwLock::new(parts.services_header),
            temple_info_header: RwLock::new(parts.temple_info_header),
            welcome: RwLock::new(parts.welcome),
        }
    }

    pub fn empty() -> Self {
        Self::new(ContentParts::default())
    }
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; inner data is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub content: Arc<ContentStore>,
    /// Content change notifications.
    pub event_bus: Arc<EventBus>,
    /// Recent changes, fed from `event_bus` once [`spawn_activity_log`] runs.
    ///
    /// [`spawn_activity_log`]: AppState::spawn_activity_log
    pub activity: ActivityLog,
}

impl AppState {
    pub fn new(config: ServerConfig, content: ContentStore) -> Self {
        let activity = ActivityLog::new(config.activity_log_capacity);
        Self {
            config: Arc::new(config),
            content: Arc::new(content),
            event_bus: Arc::new(EventBus::default()),
            activity,
        }
    }

    /// Start the background task feeding the activity log. It ends once
    /// every clone of `event_bus` is dropped.
    pub fn spawn_activity_log(&self) -> JoinHandle<()> {
        tokio::spawn(self.activity.clone().run(self.event_bus.subscribe()))
    }

    pub fn publish(&self, event: ContentEvent) {
        self.event_bus.publish(event);
    }
}

// ---------------------------------------------------------------------------
// Content kinds
// ---------------------------------------------------------------------------

/// Binds a record type to its DTOs and its collection in [`ContentStore`],
/// so the generic handlers in [`crate::handlers::content`] can serve it.
pub trait ContentKind: Record + Searchable + Serialize + Send + Sync + 'static {
    type Create: NewRecord<Record = Self> + DeserializeOwned + Send + 'static;
    type Update: Patch<Record = Self> + DeserializeOwned + Send + 'static;

    fn collection(store: &ContentStore) -> &RwLock<Collection<Self>>;
}

impl ContentKind for SliderImage {
    type Create = CreateSliderImage;
    type Update = UpdateSliderImage;

    fn collection(store: &ContentStore) -> &RwLock<Collection<Self>> {
        &store.slider
    }
}

impl ContentKind for TempleEvent {
    type Create = CreateTempleEvent;
    type Update = UpdateTempleEvent;

    fn collection(store: &ContentStore) -> &RwLock<Collection<Self>> {
        &store.events
    }
}

impl ContentKind for TempleService {
    type Create = CreateTempleService;
    type Update = UpdateTempleService;

    fn collection(store: &ContentStore) -> &RwLock<Collection<Self>> {
        &store.services
    }
}

impl ContentKind for ServiceCard {
    type Create = CreateServiceCard;
    type Update = UpdateServiceCard;

    fn collection(store: &ContentStore) -> &RwLock<Collection<Self>> {
        &store.service_cards
    }
}

impl ContentKind for Testimonial {
    type Create = CreateTestimonial;
    type Update = UpdateTestimonial;

    fn collection(store: &ContentStore) -> &RwLock<Collection<Self>> {
        &store.testimonials
    }
}

impl ContentKind for InfoCard {
    type Create = CreateInfoCard;
    type Update = UpdateInfoCard;

    fn collection(store: &ContentStore) -> &RwLock<Collection<Self>> {
        &store.info_cards
    }
}
