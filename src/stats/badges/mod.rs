//! Achievement badges driven by travel statistics

mod checker;
mod definitions;

pub use checker::{
    BadgeProgress, UnlockedBadge, badge_progress, check_new_badges, check_new_badges_at,
};
pub use definitions::{BADGES, Badge, BadgeId, BadgeRule};
