//! Users endpoints

mod list;
mod multipart;
mod register;
mod show;

pub use list::{list_users, UsersQueryParams};
pub use multipart::read_candidate;
pub use register::register_user;
pub use show::show_user;
