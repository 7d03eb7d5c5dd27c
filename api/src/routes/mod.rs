//! Route handlers mounted under `/api`

pub mod positions;
pub mod token;
pub mod users;
