//! Place Tracker - a personal travel journal
//!
//! Log the places you visit with notes, photos and moods, then look back at
//! your travels: itinerary distance, countries, continents, a yearly recap,
//! a passport of stamps, and badges that unlock as the journal grows.
//!
//! ## Core
//!
//! The two pieces with real logic are pure functions over a slice of places:
//!
//! 1. [`stats::calculate_stats`] builds a [`stats::TravelStats`] summary.
//! 2. [`stats::badges::check_new_badges`] decides which badges newly qualify.
//!
//! [`journal::Journal`] ties them to storage for one signed-in user.

pub mod config;
pub mod domain;
pub mod geocoding;
pub mod journal;
pub mod stats;
pub mod store;

pub use domain::*;
