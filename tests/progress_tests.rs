/// Tests for the points and achievements progress system
/// These tests verify the scoring policy, point monotonicity, one-time
/// achievement unlocks and session isolation

#[cfg(test)]
mod scoring_policy_tests {
    use carbontrack_core::progress::ProgressTracker;

    #[test]
    fn test_points_below_baseline() {
        // footprint=10, baseline=15: floor((15-10)*100) = 500
        assert_eq!(ProgressTracker::points_for_footprint(10.0), 500);
    }

    #[test]
    fn test_points_at_and_above_baseline_are_zero() {
        assert_eq!(
            ProgressTracker::points_for_footprint(15.0),
            0,
            "at the baseline earns nothing"
        );
        assert_eq!(
            ProgressTracker::points_for_footprint(22.5),
            0,
            "above the baseline earns nothing"
        );
    }

    #[test]
    fn test_fractional_points_are_floored() {
        // floor((15 - 14.991) * 100) = floor(0.9) = 0
        assert_eq!(ProgressTracker::points_for_footprint(14.991), 0);
        // floor((15 - 14.5) * 100) = 50
        assert_eq!(ProgressTracker::points_for_footprint(14.5), 50);
    }
}

#[cfg(test)]
mod achievement_tests {
    use carbontrack_core::progress::ProgressTracker;
    use carbontrack_core::session::SessionContext;

    #[test]
    fn test_500_points_unlocks_intermediate() {
        // The worked example: 500 points exactly crosses the Intermediate
        // threshold (and Beginner along the way)
        let mut ctx = SessionContext::new();
        let unlocked = ProgressTracker::add_points(&mut ctx, 500);

        assert!(
            unlocked.contains(&"Intermediate".to_string()),
            "500 points must unlock Intermediate"
        );
        assert!(
            ctx.achievements.contains("Intermediate"),
            "unlock must persist in the session set"
        );
    }

    #[test]
    fn test_unlocks_come_back_in_table_order() {
        let mut ctx = SessionContext::new();
        let unlocked = ProgressTracker::add_points(&mut ctx, 5000);
        assert_eq!(
            unlocked,
            vec![
                "Beginner".to_string(),
                "Intermediate".to_string(),
                "Expert".to_string(),
                "Master".to_string()
            ],
            "a single large award unlocks every tier, in table order"
        );
    }

    #[test]
    fn test_unlock_fires_at_most_once() {
        let mut ctx = SessionContext::new();
        let first = ProgressTracker::add_points(&mut ctx, 150);
        assert_eq!(first, vec!["Beginner".to_string()]);

        // Threshold is re-crossed on every subsequent award; the unlock
        // must not re-fire
        let second = ProgressTracker::add_points(&mut ctx, 50);
        assert!(
            second.is_empty(),
            "Beginner is already unlocked and must not notify again"
        );
        let third = ProgressTracker::add_points(&mut ctx, 400);
        assert_eq!(
            third,
            vec!["Intermediate".to_string()],
            "only the newly crossed threshold notifies"
        );
        assert_eq!(ctx.achievements.len(), 2);
    }

    #[test]
    fn test_points_are_monotonic() {
        let mut ctx = SessionContext::new();
        let mut previous = ctx.points;
        for delta in [0, 120, 0, 380, 1, 4499] {
            ProgressTracker::add_points(&mut ctx, delta);
            assert!(
                ctx.points >= previous,
                "points after an award must never be lower than before"
            );
            previous = ctx.points;
        }
        assert_eq!(ctx.points, 5000);
    }

    #[test]
    fn test_zero_points_session_has_no_achievements() {
        let mut ctx = SessionContext::new();
        let unlocked = ProgressTracker::check_achievements(&mut ctx);
        assert!(unlocked.is_empty());
        assert!(ctx.achievements.is_empty());
    }
}

#[cfg(test)]
mod history_tests {
    use carbontrack_core::progress::ProgressTracker;
    use carbontrack_core::session::SessionContext;
    use chrono::NaiveDate;

    #[test]
    fn test_log_footprint_appends_in_call_order() {
        let mut ctx = SessionContext::new();
        ProgressTracker::log_footprint(&mut ctx, 9.5, date(2025, 3, 10))
            .expect("non-negative footprint logs");
        ProgressTracker::log_footprint(&mut ctx, 8.0, date(2025, 3, 11))
            .expect("non-negative footprint logs");

        assert_eq!(ctx.history.len(), 2);
        assert_eq!(ctx.history[0].footprint, 9.5);
        assert_eq!(ctx.history[1].footprint, 8.0);
    }

    #[test]
    fn test_log_footprint_rejects_negative_values() {
        let mut ctx = SessionContext::new();
        assert!(
            ProgressTracker::log_footprint(&mut ctx, -0.1, date(2025, 3, 10)).is_err(),
            "negative footprints must be rejected"
        );
        assert!(ctx.history.is_empty());
    }

    // Helper functions
    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }
}

#[cfg(test)]
mod session_isolation_tests {
    use carbontrack_core::progress::ProgressTracker;
    use carbontrack_core::session::SessionRegistry;

    #[test]
    fn test_sessions_do_not_observe_each_other() {
        let mut registry = SessionRegistry::new();
        let first = registry.start_session();
        let second = registry.start_session();

        {
            let ctx = registry.get_mut(&first).expect("first session exists");
            ProgressTracker::add_points(ctx, 1000);
        }

        let other = registry.get(&second).expect("second session exists");
        assert_eq!(other.points, 0, "points must not leak across sessions");
        assert!(
            other.achievements.is_empty(),
            "achievements must not leak across sessions"
        );
    }

    #[test]
    fn test_ended_session_is_discarded() {
        let mut registry = SessionRegistry::new();
        let id = registry.start_session();
        assert_eq!(registry.len(), 1);

        let ended = registry.end_session(&id).expect("session existed");
        assert_eq!(ended.points, 0);
        assert!(registry.get(&id).is_none(), "ended sessions are gone");
        assert!(registry.is_empty());
    }
}
