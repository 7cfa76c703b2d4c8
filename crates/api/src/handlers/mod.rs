pub mod activity;
pub mod content;
pub mod dashboard;
pub mod meta;
pub mod services_header;
pub mod session;
pub mod temple_info_header;
pub mod welcome;
