//! Content record kinds managed through the admin console.
//!
//! Each kind defines its record struct, the create DTO ([`NewRecord`]),
//! the partial update DTO ([`Patch`]), and its search/filter fields.
//!
//! [`NewRecord`]: crate::collection::NewRecord
//! [`Patch`]: crate::collection::Patch

pub mod event;
pub mod info_card;
pub mod service;
pub mod service_card;
pub mod services_header;
pub mod slider;
pub mod temple_info_header;
pub mod testimonial;
pub mod welcome;

pub use event::{CreateTempleEvent, EventStatus, EventType, Priority, TempleEvent, UpdateTempleEvent};
pub use info_card::{CardTemplate, CreateInfoCard, InfoCard, InfoCardType, InfoIcon, UpdateInfoCard};
pub use service::{CreateTempleService, ServiceCategory, ServiceStatus, TempleService, UpdateTempleService};
pub use service_card::{CardIcon, CreateServiceCard, ServiceCard, UpdateServiceCard};
pub use services_header::{ServicesHeader, UpdateServicesHeader};
pub use slider::{CreateSliderImage, SliderImage, UpdateSliderImage};
pub use temple_info_header::{TempleInfoHeader, UpdateTempleInfoHeader};
pub use testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
pub use welcome::{UpdateWelcomeSection, Verse, WelcomeSection, SUGGESTED_VERSES};

/// Serde default for `is_active` on create DTOs.
pub(crate) fn default_true() -> bool {
    true
}

/// Treat empty optional text as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
