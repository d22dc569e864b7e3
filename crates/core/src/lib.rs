//! Domain core of voiceclock: the timezone catalog, label formatting, the
//! storage and platform seams, and the reconciliation engine.

pub mod catalog;
pub mod errors;
pub mod formatter;
pub mod gateway;
pub mod models;
pub mod reconcile;
pub mod store;
