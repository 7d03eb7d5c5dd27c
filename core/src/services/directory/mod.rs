//! Read-only directory queries: positions, paged users, single user

mod service;


pub use service::{DirectoryService, UsersQuery};
