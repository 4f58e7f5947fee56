//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod gallery_item_repo;
pub mod pillar_repo;
pub mod timeline_era_repo;

pub use gallery_item_repo::GalleryItemRepo;
pub use pillar_repo::PillarRepo;
pub use timeline_era_repo::TimelineEraRepo;
