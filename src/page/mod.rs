pub(crate) mod config;
pub(crate) mod cursor;
pub(crate) mod geometry;
pub(crate) mod hub;
pub(crate) mod nav;
pub(crate) mod runtime;
pub(crate) mod simulate;
pub(crate) mod snapshot;
