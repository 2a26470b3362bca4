// src/lib.rs

//! Recipe Book Library
//!
//! Searches a Spoonacular-compatible recipe API and keeps a logged-in user's
//! saved recipes and star ratings in a local key-value store.

pub mod app;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;
pub mod utils;
pub mod views;
