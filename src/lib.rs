//! Core library for asx-resolver
pub mod models;
pub mod walker;
pub mod playlist;
pub mod materialize;
pub mod tags;
pub mod worker;
