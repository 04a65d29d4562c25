pub mod article;
pub mod author;
pub mod award;
pub mod committee;
pub mod event;
pub mod executive_committee;
pub mod faq;
pub mod media;
pub mod merch_category;
pub mod merchant;
pub mod organizer;
pub mod project_profile;
pub mod user;
