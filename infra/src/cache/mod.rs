//! Cache module - Redis client and the shared registration token slot

pub mod redis_client;
pub mod redis_token_store;

pub use redis_client::RedisClient;
pub use redis_token_store::{RedisTokenStore, TOKEN_KEY};
