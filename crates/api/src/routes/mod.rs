pub mod articles;
pub mod auth;
pub mod authors;
pub mod awards;
pub mod committees;
pub mod events;
pub mod executive_committees;
pub mod faqs;
pub mod health;
pub mod media;
pub mod merch_categories;
pub mod merchants;
pub mod orders;
pub mod organizers;
pub mod project_profiles;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/me                         current principal (requires auth)
///
/// /users                           list, create (per users policy)
/// /users/{id}                      get, update, delete
///
/// /events                          list, create
/// /events/{id}                     get, update, delete
/// /events/slug/{slug}              get by slug
///
/// /articles                        list, create
/// /articles/{id}                   get, update, delete
/// /articles/slug/{slug}            get by slug
///
/// /authors                         list, create
/// /authors/{id}                    get, update, delete
///
/// /media                           list (?category), upload (multipart)
/// /media/{id}                      get, update metadata, delete
///
/// /committees                      list, create
/// /committees/{id}                 get, update, delete
/// /sub-committees                  list (?committee_id), create
/// /sub-committees/{id}             get, update, delete
/// /executive-committees            list (?year), create
/// /executive-committees/{id}       get, update, delete
///
/// /merchants                       list, create
/// /merchants/{id}                  get, update, delete
/// /merch-categories                list, create
/// /merch-categories/{id}           get, update, delete
/// /organizers                      list, create
/// /organizers/{id}                 get, update, delete
/// /project-profiles                list, create
/// /project-profiles/{id}           get, update, delete
/// /awards                          list, create
/// /awards/{id}                     get, update, delete
/// /faqs                            list, create
/// /faqs/{id}                       get, update, delete
///
/// /merch/order                     order intake (public, multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/events", events::router())
        .nest("/articles", articles::router())
        .nest("/authors", authors::router())
        .nest("/media", media::router())
        .merge(committees::router())
        .nest("/executive-committees", executive_committees::router())
        .nest("/merchants", merchants::router())
        .nest("/merch-categories", merch_categories::router())
        .nest("/organizers", organizers::router())
        .nest("/project-profiles", project_profiles::router())
        .nest("/awards", awards::router())
        .nest("/faqs", faqs::router())
        .nest("/merch", orders::router())
}
