//! Core domain types for the travel journal

mod error;
mod place;
mod user;

pub use error::ValidationError;
pub use place::{Coordinates, Mood, Place, PlaceDraft, PlacePatch, PlaceTag, Rating, VisitDetails};
pub use user::User;
