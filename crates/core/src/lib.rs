//! Domain logic for the YPSL website backend.
//!
//! Pure, I/O-free building blocks shared by the database and API crates:
//! the principal/role model, the access policy engine, write-time
//! sanitize-and-stamp transforms, slug derivation, and merch order-ID
//! derivation.

pub mod error;
pub mod order;
pub mod policy;
pub mod principal;
pub mod slug;
pub mod stamp;
pub mod types;
