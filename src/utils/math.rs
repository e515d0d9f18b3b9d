//! # Convergence Mathematics
//!
//! Depth arithmetic shared by the path graph builder.

use crate::config::MAX_BRANCHING;

/// Depth at which branches stop fanning out and start converging on the boss.
///
/// # Examples
///
/// ```
/// use brc_dungeon::utils::convergence_point;
///
/// assert_eq!(convergence_point(1), 1);
/// assert_eq!(convergence_point(7), 4);
/// assert_eq!(convergence_point(10), 5);
/// ```
pub fn convergence_point(size: u32) -> u32 {
    size.div_ceil(2)
}

/// Number of steps taken after the convergence point.
pub fn remaining_steps(size: u32) -> u32 {
    size - convergence_point(size)
}

/// Successors each frontier position gets at `depth` during convergence.
///
/// The ratio climbs from 0 at the first converging depth to 1 at the last,
/// shrinking the fan-out from [`MAX_BRANCHING`] down to a single successor.
/// Returns `None` when there are no remaining steps, where the ratio is
/// undefined and the caller must connect straight to the boss.
pub fn converging_branch_count(depth: u32, convergence_point: u32, remaining_steps: u32) -> Option<usize> {
    if remaining_steps == 0 {
        return None;
    }

    let progress = (depth + 1).saturating_sub(convergence_point);
    let ratio = f64::from(progress) / f64::from(remaining_steps);
    let count = (MAX_BRANCHING as f64 * (1.0 - ratio)).floor();

    Some((count.max(0.0) as usize).max(1))
}
