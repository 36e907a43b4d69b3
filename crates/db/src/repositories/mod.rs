//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod comment_repo;
pub mod entry_repo;
pub mod published_repo;
pub mod session_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use comment_repo::CommentRepo;
pub use entry_repo::EntryRepo;
pub use published_repo::PublishedRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
