//! Image module - client for the Tinify optimization API

pub mod tinify;

pub use tinify::TinifyImageTransformer;
