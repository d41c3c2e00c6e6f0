//! Progress reporting values

pub mod event;
