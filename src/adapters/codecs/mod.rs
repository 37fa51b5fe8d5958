//! Entity codecs shared by the concrete repositories.

pub mod json;

pub use json::JsonCodec;
