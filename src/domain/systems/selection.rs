use crate::domain::state::{Candidate, Observer, Target};
use crate::domain::tuning::SelectionTuning;
use crate::domain::vector::Vec3;

/// Picks the live candidate with the lowest `distance + deviation * angle_weight`.
///
/// The yaw deviation is `|atan2(dx, dz) - observer.yaw|` without wrapping, gated by
/// [`SelectionTuning::max_deviation`]. Ties keep the earlier candidate. Returns `None`
/// when nothing passes the gate.
pub fn select_best(
    observer: &Observer,
    candidates: &[Candidate],
    tuning: &SelectionTuning,
) -> Option<Target> {
    let max_deviation = tuning.max_deviation();
    let mut best: Option<Target> = None;

    for candidate in candidates {
        if !candidate.is_alive() {
            continue;
        }

        let head = resolve_head(candidate, tuning);
        let d = head - observer.position;

        let yaw = d.x.atan2(d.z);
        let deviation = (yaw - observer.yaw).abs();
        if deviation > max_deviation {
            continue;
        }

        let score = d.length() + deviation * tuning.angle_weight;
        if best.as_ref().is_none_or(|b| score < b.score) {
            best = Some(Target {
                candidate: candidate.clone(),
                head,
                score,
            });
        }
    }

    best
}

/// World-space aim head: the bone-local head through the bindpose, offset from the
/// base position. Without a bindpose the configured `head_offset` is used.
pub fn resolve_head(candidate: &Candidate, tuning: &SelectionTuning) -> Vec3 {
    match &candidate.bindpose {
        Some(bindpose) => candidate.position + bindpose.transform_point(candidate.head),
        None => candidate.position + tuning.head_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vector::Mat3x4;

    fn observer() -> Observer {
        Observer {
            position: Vec3::ZERO,
            aim_point: Vec3::new(0.0, 0.0, 1.0),
            yaw: 0.0,
        }
    }

    fn candidate(id: u64, position: Vec3) -> Candidate {
        Candidate {
            id: Some(id),
            position,
            head: position,
            velocity: Vec3::ZERO,
            health: 100,
            armor_level: 0.0,
            bindpose: None,
        }
    }

    fn tuning(fov_degrees: f64) -> SelectionTuning {
        SelectionTuning {
            fov_degrees,
            head_offset: Vec3::ZERO,
            ..SelectionTuning::default()
        }
    }

    #[test]
    fn when_candidate_is_straight_ahead_then_it_is_selected() {
        let candidates = [candidate(1, Vec3::new(0.0, 0.0, 10.0))];

        let target = select_best(&observer(), &candidates, &tuning(60.0))
            .expect("expected candidate in front to be selected");

        assert_eq!(target.candidate.id, Some(1));
        assert!((target.score - 10.0).abs() < 1e-12);
    }

    #[test]
    fn when_candidate_is_outside_fov_then_none_is_selected() {
        // 90 degrees to the right, past a 60 degree gate.
        let candidates = [candidate(1, Vec3::new(10.0, 0.0, 0.0))];

        assert!(select_best(&observer(), &candidates, &tuning(60.0)).is_none());
    }

    #[test]
    fn when_candidate_is_between_half_and_full_fov_then_gate_mode_decides() {
        // 45 degrees off axis.
        let candidates = [candidate(1, Vec3::new(5.0, 0.0, 5.0))];
        let full = tuning(60.0);
        let half = SelectionTuning {
            half_angle_gate: true,
            ..full
        };

        assert!(select_best(&observer(), &candidates, &full).is_some());
        assert!(select_best(&observer(), &candidates, &half).is_none());
    }

    #[test]
    fn when_deviation_is_equal_then_closer_candidate_wins() {
        let candidates = [
            candidate(1, Vec3::new(0.0, 0.0, 20.0)),
            candidate(2, Vec3::new(0.0, 0.0, 8.0)),
        ];

        let target = select_best(&observer(), &candidates, &tuning(60.0))
            .expect("expected a candidate");

        assert_eq!(target.candidate.id, Some(2));
    }

    #[test]
    fn when_angle_penalty_outweighs_distance_then_centered_candidate_wins() {
        // Off-axis by ~0.46 rad at distance ~11.2, score ~18.1; centered at 15.
        let candidates = [
            candidate(1, Vec3::new(5.0, 0.0, 10.0)),
            candidate(2, Vec3::new(0.0, 0.0, 15.0)),
        ];

        let target = select_best(&observer(), &candidates, &tuning(60.0))
            .expect("expected a candidate");

        assert_eq!(target.candidate.id, Some(2));
    }

    #[test]
    fn when_candidate_is_dead_then_it_is_skipped() {
        let mut dead = candidate(1, Vec3::new(0.0, 0.0, 2.0));
        dead.health = 0;
        let candidates = [dead, candidate(2, Vec3::new(0.0, 0.0, 30.0))];

        let target = select_best(&observer(), &candidates, &tuning(60.0))
            .expect("expected the live candidate");

        assert_eq!(target.candidate.id, Some(2));
    }

    #[test]
    fn when_list_is_empty_then_none_is_selected() {
        assert!(select_best(&observer(), &[], &tuning(180.0)).is_none());
    }

    #[test]
    fn when_head_offset_is_configured_then_it_is_applied_to_the_target() {
        let candidates = [candidate(1, Vec3::new(0.0, 0.0, 10.0))];
        let tuning = SelectionTuning {
            head_offset: Vec3::new(0.0, 1.5, 0.0),
            ..tuning(60.0)
        };

        let target = select_best(&observer(), &candidates, &tuning).expect("expected a candidate");

        assert_eq!(target.head, Vec3::new(0.0, 1.5, 10.0));
    }

    #[test]
    fn when_bindpose_is_present_then_it_replaces_the_head_offset() {
        let mut rigged = candidate(1, Vec3::new(0.0, 0.0, 10.0));
        rigged.head = Vec3::new(0.0, 0.0, -1.5);
        // Swaps y and z, then lifts by 0.25.
        rigged.bindpose = Some(Mat3x4::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, -1.0, 0.25],
            [0.0, 1.0, 0.0, 0.0],
        ]));
        let tuning = SelectionTuning {
            head_offset: Vec3::new(0.0, 9.0, 0.0),
            ..tuning(60.0)
        };

        let target = select_best(&observer(), &[rigged], &tuning).expect("expected a candidate");

        assert_eq!(target.head, Vec3::new(0.0, 1.75, 10.0));
    }
}
