//! Region provider lookup.
//!
//! The analysis pipeline only needs one thing from region providers:
//! given a region type, find the matching provider or fail. That
//! contract is [`RegionProviderResolver`]. [`RegionProviderList`] is an
//! in-memory implementation, and [`RegionMappingClient`] loads the list
//! from a region-mapping definitions URL on every lookup.

pub mod client;
pub mod provider;
pub mod resolver;

pub use client::RegionMappingClient;
pub use provider::{RegionProvider, RegionProviderList};
pub use resolver::{RegionProviderError, RegionProviderResolver};
