//! Builds SQL seed data for the `vocabulary` table from a catalog of
//! Chinese words, translating each English gloss on the way.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod services;
