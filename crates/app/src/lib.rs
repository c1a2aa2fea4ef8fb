//! Quote workflow services, persistence and configuration for the jewelry store.

pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod drafts;
pub mod logging;
pub mod session;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
