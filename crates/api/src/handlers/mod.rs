//! HTTP request handlers, one module per resource.

pub mod articles;
pub mod auth;
pub mod authors;
pub mod awards;
pub mod committees;
pub mod events;
pub mod executive_committees;
pub mod faqs;
pub mod media;
pub mod merch_categories;
pub mod merchants;
pub mod orders;
pub mod organizers;
pub mod project_profiles;
pub mod users;
