//! Test support: isolated databases and service fixtures.

pub(crate) mod context;
pub(crate) mod helpers;

pub(crate) use context::TestContext;
