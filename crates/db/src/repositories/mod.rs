pub mod article_repo;
pub mod author_repo;
pub mod award_repo;
pub mod committee_repo;
pub mod event_repo;
pub mod executive_committee_repo;
pub mod faq_repo;
pub mod media_repo;
pub mod merch_category_repo;
pub mod merchant_repo;
pub mod organizer_repo;
pub mod project_profile_repo;
pub mod user_repo;

pub use article_repo::ArticleRepo;
pub use author_repo::AuthorRepo;
pub use award_repo::AwardRepo;
pub use committee_repo::{CommitteeRepo, SubCommitteeRepo};
pub use event_repo::EventRepo;
pub use executive_committee_repo::ExecutiveCommitteeRepo;
pub use faq_repo::FaqRepo;
pub use media_repo::MediaRepo;
pub use merch_category_repo::MerchCategoryRepo;
pub use merchant_repo::MerchantRepo;
pub use organizer_repo::OrganizerRepo;
pub use project_profile_repo::ProjectProfileRepo;
pub use user_repo::UserRepo;
