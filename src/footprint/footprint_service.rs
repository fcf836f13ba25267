//! Footprint calculation facade.
//!
//! Coordinates the estimator strategy, progress tracking, history logging
//! and recommendation rules for one calculation request, and derives the
//! chart tables the rendering collaborator consumes.

use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::aggregation::aggregation_model::ChartSeries;
use crate::aggregation::aggregation_service::AggregationEngine;
use crate::errors::Result;
use crate::estimator::estimator_traits::FootprintEstimator;
use crate::footprint::footprint_model::{CalculationOutcome, GaugeReading, UsageInput};
use crate::progress::progress_service::ProgressTracker;
use crate::recommendations::recommendation_service::RecommendationEngine;
use crate::session::session_model::{CalculationRecord, SessionContext};

pub struct FootprintService<E: FootprintEstimator> {
    estimator: Arc<E>,
}

impl<E: FootprintEstimator> FootprintService<E> {
    pub fn new(estimator: Arc<E>) -> Self {
        FootprintService { estimator }
    }

    /// Run one calculation against a session: validate the figures,
    /// estimate the footprint, award points and collect any achievement
    /// unlocks, append to the session's history and raw log, and assemble
    /// the renderable outcome.
    pub fn calculate(
        &self,
        ctx: &mut SessionContext,
        input: &UsageInput,
        date: NaiveDate,
    ) -> Result<CalculationOutcome> {
        input.validate()?;

        let footprint = self.estimator.estimate(input)?;
        debug!("session {}: estimated footprint {:.2}", ctx.id, footprint);

        let points_earned = ProgressTracker::points_for_footprint(footprint);
        let unlocked_achievements = if points_earned > 0 {
            ProgressTracker::add_points(ctx, points_earned)
        } else {
            Vec::new()
        };

        ProgressTracker::log_footprint(ctx, footprint, date)?;
        ctx.data.push(CalculationRecord {
            date,
            input: input.clone(),
            footprint,
        });

        Ok(CalculationOutcome {
            footprint,
            points_earned,
            total_points: ctx.points,
            unlocked_achievements,
            gauge: GaugeReading::new(footprint),
            recommendations: RecommendationEngine::recommend(input),
        })
    }

    /// All four bucket tables over the session's history.
    pub fn chart_series(&self, ctx: &SessionContext) -> ChartSeries {
        AggregationEngine::aggregate_all(&ctx.history)
    }
}
