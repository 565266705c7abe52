//! CLI command implementations.

pub(crate) mod compare;
pub(crate) mod info;
pub(crate) mod search;
pub(crate) mod show;
