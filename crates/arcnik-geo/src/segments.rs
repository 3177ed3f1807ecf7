use serde::Serialize;

/// Route legs split by the ship's progress: already traveled, currently being
/// traveled, or still ahead. Styling mirrors the dashboard map (solid green
/// behind the ship, dashed blue under it, dashed indigo ahead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentPhase {
    Completed,
    Active,
    Remaining,
}

impl SegmentPhase {
    pub fn stroke(self) -> &'static str {
        match self {
            Self::Completed => "#10b981",
            Self::Active => "#3b82f6",
            Self::Remaining => "#6366f1",
        }
    }

    pub fn dash_array(self) -> &'static str {
        match self {
            Self::Completed => "0",
            Self::Active | Self::Remaining => "5,5",
        }
    }
}

/// Classifies the leg from waypoint `index` to `index + 1` on a route of
/// `count` waypoints against a progress scalar in [0, 1].
pub fn classify_segment(index: usize, count: usize, progress: f64) -> SegmentPhase {
    debug_assert!(count >= 2);
    debug_assert!(index + 1 < count);
    let total = (count - 1) as f64;
    if progress > (index as f64 + 1.0) / total {
        SegmentPhase::Completed
    } else if progress > index as f64 / total {
        SegmentPhase::Active
    } else {
        SegmentPhase::Remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_partition_by_progress() {
        // 5 waypoints, 4 legs, ship halfway through leg 2
        let progress = 0.375;
        assert_eq!(classify_segment(0, 5, progress), SegmentPhase::Completed);
        assert_eq!(classify_segment(1, 5, progress), SegmentPhase::Active);
        assert_eq!(classify_segment(2, 5, progress), SegmentPhase::Remaining);
        assert_eq!(classify_segment(3, 5, progress), SegmentPhase::Remaining);
    }

    #[test]
    fn zero_progress_leaves_every_leg_remaining() {
        for index in 0..4 {
            assert_eq!(classify_segment(index, 5, 0.0), SegmentPhase::Remaining);
        }
    }

    #[test]
    fn full_progress_completes_all_but_the_last_leg() {
        assert_eq!(classify_segment(0, 3, 1.0), SegmentPhase::Completed);
        // progress is never strictly greater than 1, so the final leg stays active
        assert_eq!(classify_segment(1, 3, 1.0), SegmentPhase::Active);
    }
}
