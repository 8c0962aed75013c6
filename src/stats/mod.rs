//! Travel statistics and badges
//!
//! Everything here is a pure function of a slice of places:
//!
//! ```text
//! places ──► calculate_stats ──► TravelStats ──► check_new_badges ──► Vec<UnlockedBadge>
//!                                                      ▲
//!                                      already unlocked (owned by caller)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let stats = calculate_stats(&places);
//! let new_badges = check_new_badges(&stats, &unlocked);
//! unlocked.extend(new_badges);
//! ```

pub mod badges;
pub mod continents;
mod engine;
pub mod geo;
mod models;
mod passport;
mod recap;
mod timeline;

pub use engine::calculate_stats;
pub use models::{TopMood, TravelStats};
pub use passport::{Passport, Stamp, UNKNOWN_STAMP, flag_emoji, passport};
pub use recap::{DEFAULT_RECAP_MOOD, YearlyRecap, yearly_recap};
pub use timeline::timeline;
