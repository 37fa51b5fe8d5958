//! Adapters implementing the domain ports.

pub mod cache;
pub mod codecs;
pub mod repositories;
