//! Points, achievements and history tracking for one session.
//!
//! All state lives on the `SessionContext` passed into each call; the
//! tracker itself holds nothing.

use chrono::NaiveDate;
use log::info;

use crate::errors::{Result, ValidationError};
use crate::progress::progress_model::{
    FootprintRecord, ACHIEVEMENT_THRESHOLDS, BASELINE_FOOTPRINT,
};
use crate::session::session_model::SessionContext;

pub struct ProgressTracker;

impl ProgressTracker {
    /// Points earned for a given footprint: `floor((baseline - footprint)
    /// * 100)` when below the baseline, zero otherwise.
    pub fn points_for_footprint(footprint: f64) -> u64 {
        if footprint < BASELINE_FOOTPRINT {
            ((BASELINE_FOOTPRINT - footprint) * 100.0).floor() as u64
        } else {
            0
        }
    }

    /// Add points to the session and return any achievements the new total
    /// unlocks.
    pub fn add_points(ctx: &mut SessionContext, delta: u64) -> Vec<String> {
        ctx.points += delta;
        Self::check_achievements(ctx)
    }

    /// Scan the achievement table in order and unlock every entry whose
    /// threshold the session's points have reached. Insertion into the set
    /// gates the notification: an achievement unlocks at most once no
    /// matter how often its threshold is re-crossed.
    pub fn check_achievements(ctx: &mut SessionContext) -> Vec<String> {
        let mut unlocked = Vec::new();
        for (name, threshold) in ACHIEVEMENT_THRESHOLDS {
            if ctx.points >= *threshold && ctx.achievements.insert((*name).to_string()) {
                info!(
                    "session {}: achievement unlocked: {} ({} points)",
                    ctx.id, name, ctx.points
                );
                unlocked.push((*name).to_string());
            }
        }
        unlocked
    }

    /// Append a footprint measurement to the session history.
    pub fn log_footprint(ctx: &mut SessionContext, footprint: f64, date: NaiveDate) -> Result<()> {
        if footprint < 0.0 {
            return Err(ValidationError::InvalidInput(format!(
                "footprint must be non-negative, got {}",
                footprint
            ))
            .into());
        }
        ctx.history.push(FootprintRecord { date, footprint });
        Ok(())
    }
}
