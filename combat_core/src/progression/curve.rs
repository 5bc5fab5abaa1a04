//! Leveling curve - Cumulative experience thresholds

use crate::config::ProgressionConstants;

/// Cumulative experience needed to reach `level`.
///
/// Level 1 needs nothing. Each later step costs `base × growth^(i-2)`,
/// floored, so with the defaults level 2 is 100, level 3 is 250 and
/// level 4 is 475. Saturates at `u64::MAX`.
pub fn experience_for_level(level: u32, constants: &ProgressionConstants) -> u64 {
    let mut total = 0u64;
    for i in 2..=level {
        total = total.saturating_add(step_cost(i, constants));
        if total == u64::MAX {
            break;
        }
    }
    total
}

/// Experience still missing before `level + 1`. Zero at the level cap.
pub fn experience_to_next_level(level: u32, experience: u64, constants: &ProgressionConstants) -> u64 {
    if level >= constants.max_level {
        return 0;
    }
    experience_for_level(level + 1, constants).saturating_sub(experience)
}

fn step_cost(level: u32, constants: &ProgressionConstants) -> u64 {
    let exponent = i32::try_from(level - 2).unwrap_or(i32::MAX);
    let cost = constants.base_experience as f64 * constants.growth_rate.powi(exponent);
    cost.floor() as u64
}
