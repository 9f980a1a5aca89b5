pub(crate) mod cache;
pub(crate) mod calculators;
pub(crate) mod config;
pub(crate) mod helpers;
pub(crate) mod position;
