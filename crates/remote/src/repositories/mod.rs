//! One repository per remote table, each a unit struct with associated
//! async functions taking the shared [`ContentClient`](crate::ContentClient).

pub mod contact_repo;
pub mod gallery_repo;
pub mod project_repo;
pub mod studio_content_repo;
pub mod studio_repo;

pub use contact_repo::ContactRepo;
pub use gallery_repo::GalleryRepo;
pub use project_repo::ProjectRepo;
pub use studio_content_repo::StudioContentRepo;
pub use studio_repo::StudioRepo;
