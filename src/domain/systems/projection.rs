use crate::domain::state::AimDelta;
use crate::domain::tuning::WeaponGain;
use crate::domain::vector::Vec3;

/// Projects the direction from `observer` to `target` onto yaw/pitch and scales it by
/// the weapon gain. Returns `None` when both points coincide.
pub fn project(observer: Vec3, target: Vec3, gain: WeaponGain) -> Option<AimDelta> {
    let delta = target - observer;
    let len = delta.length();
    if len == 0.0 {
        return None;
    }

    let n = delta.scale(1.0 / len);
    let pitch = -n.y.asin();
    let yaw = n.x.atan2(n.z);

    Some(AimDelta {
        dx: yaw * gain.yaw,
        dy: pitch * gain.pitch,
    })
}

/// True when `target` lies strictly within `radius` of the camera aim point.
pub fn is_within_trigger_zone(aim_point: Vec3, target: Vec3, radius: f64) -> bool {
    aim_point.distance(target) < radius
}
