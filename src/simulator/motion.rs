//! Pointer motion interpolation
//!
//! Turns one absolute displacement into a sequence of evenly spaced move
//! points, because games and some UI toolkits mishandle a single large
//! pointer jump.

use crate::backend::ScreenPoint;

/// Default distance between interpolated points, in pixels.
pub const DEFAULT_STEP_SIZE: i32 = 50;

/// A finite, consumed-once path of move points from a start to an end point.
///
/// Yields `steps` evenly spaced intermediate points (at least one, even for a
/// zero or sub-step displacement) followed by exactly the destination. The
/// per-step increment is re-derived from the step count, so integer-division
/// drift never prevents exact arrival: the final point is always `(x1, y1)`,
/// duplicate or not.
#[derive(Debug)]
pub struct MotionPlan {
    from: ScreenPoint,
    to: ScreenPoint,
    steps: i32,
    x_step: i32,
    y_step: i32,
    i: i32,
}

impl MotionPlan {
    pub fn new(from: ScreenPoint, to: ScreenPoint, step_size: i32) -> Self {
        // Guard the divisions below against a zero step size from config.
        let step_size = step_size.max(1);
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        let x_steps = dx / step_size;
        let y_steps = dy / step_size;
        let steps = x_steps.abs().max(y_steps.abs()).max(1);

        Self {
            from,
            to,
            steps,
            x_step: dx / steps,
            y_step: dy / steps,
            i: 0,
        }
    }

    /// Number of points this plan has left to yield.
    pub fn len(&self) -> usize {
        (self.steps + 1 - self.i) as usize
    }
}

impl Iterator for MotionPlan {
    type Item = ScreenPoint;

    fn next(&mut self) -> Option<ScreenPoint> {
        if self.i < self.steps {
            let point = ScreenPoint::new(
                self.from.x + self.i * self.x_step,
                self.from.y + self.i * self.y_step,
            );
            self.i += 1;
            Some(point)
        } else if self.i == self.steps {
            self.i += 1;
            Some(self.to)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MotionPlan {}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(x0: i32, y0: i32, x1: i32, y1: i32, step: i32) -> Vec<ScreenPoint> {
        MotionPlan::new(ScreenPoint::new(x0, y0), ScreenPoint::new(x1, y1), step).collect()
    }

    #[test]
    fn test_horizontal_path() {
        let path = points(0, 0, 500, 0, 50);

        assert_eq!(path.len(), 11);
        for (i, p) in path.iter().take(10).enumerate() {
            assert_eq!(*p, ScreenPoint::new(i as i32 * 50, 0));
        }
        assert_eq!(*path.last().unwrap(), ScreenPoint::new(500, 0));
    }

    #[test]
    fn test_sub_step_displacement_floors_to_one_step() {
        let path = points(0, 0, 10, 0, 50);

        assert_eq!(
            path,
            vec![ScreenPoint::new(0, 0), ScreenPoint::new(10, 0)]
        );
    }

    #[test]
    fn test_zero_displacement_yields_duplicate_point() {
        let path = points(42, 17, 42, 17, 50);

        assert_eq!(
            path,
            vec![ScreenPoint::new(42, 17), ScreenPoint::new(42, 17)]
        );
    }

    #[test]
    fn test_negative_direction() {
        let path = points(500, 0, 0, 0, 50);

        assert_eq!(path.len(), 11);
        assert_eq!(path[0], ScreenPoint::new(500, 0));
        assert_eq!(path[1], ScreenPoint::new(450, 0));
        assert_eq!(*path.last().unwrap(), ScreenPoint::new(0, 0));
    }

    #[test]
    fn test_diagonal_dominated_by_longer_axis() {
        let path = points(0, 0, 500, 100, 50);

        // 10 steps from the x axis; y advances 10 px per step.
        assert_eq!(path.len(), 11);
        assert_eq!(path[3], ScreenPoint::new(150, 30));
        assert_eq!(*path.last().unwrap(), ScreenPoint::new(500, 100));
    }

    #[test]
    fn test_exact_arrival_despite_division_drift() {
        // 499 / 50 = 9 steps, 499 / 9 = 55 px per step, 9 * 55 = 495: the
        // interpolated points stop short and the final point closes the gap.
        let path = points(0, 0, 499, 0, 50);

        assert_eq!(path.len(), 10);
        assert_eq!(path[8], ScreenPoint::new(440, 0));
        assert_eq!(*path.last().unwrap(), ScreenPoint::new(499, 0));
    }

    #[test]
    fn test_zero_step_size_is_clamped() {
        let path = points(0, 0, 3, 0, 0);

        // Clamped to 1 px per step: every pixel plus the final point.
        assert_eq!(path.len(), 4);
        assert_eq!(*path.last().unwrap(), ScreenPoint::new(3, 0));
    }

    #[test]
    fn test_size_hint_matches_yield_count() {
        let plan = MotionPlan::new(ScreenPoint::new(0, 0), ScreenPoint::new(500, 0), 50);
        assert_eq!(plan.len(), 11);
        assert_eq!(plan.count(), 11);
    }
}
