//! Closed-form 2D trilateration from three fixed stations
//!
//! Subtracting the range circle of station B from station A, and of C from B,
//! leaves a 2x2 linear system in (x, y) that is solved directly by Cramer's
//! rule. There is no iteration and no guard on the determinant: collinear
//! stations give non-finite coordinates.

use nalgebra::{Point2, Vector2};
use tracing::debug;

use crate::core::{Position, Reading, STATION_COUNT};

/// Solve for the transmitter position.
///
/// `readings` must be in station order (A, B, C). The linearisation is not
/// permutation-invariant, so reordering the readings yields a different point.
/// Any count other than three, or any reading without a distance, gives
/// [`Position::Unresolved`].
pub fn solve(readings: &[Reading]) -> Position {
    let [first, second, third] = readings else {
        debug!(count = readings.len(), "trilateration needs exactly {} readings", STATION_COUNT);
        return Position::Unresolved;
    };

    let (Some(d1), Some(d2), Some(d3)) = (first.distance, second.distance, third.distance) else {
        debug!("trilateration skipped: missing distance");
        return Position::Unresolved;
    };

    let point = intersect(
        [first.origin, second.origin, third.origin],
        [d1, d2, d3],
    );
    debug!(x = point.x, y = point.y, "trilateration solved");
    Position::Resolved(point)
}

fn intersect(origins: [Point2<f64>; 3], distances: [f64; 3]) -> Point2<f64> {
    let [p1, p2, p3] = origins.map(|origin| origin.coords);
    let [d1, d2, d3] = distances;

    // Row 1: circle A minus circle B, row 2: circle B minus circle C
    let row1: Vector2<f64> = (p2 - p1) * 2.0;
    let row2: Vector2<f64> = (p3 - p2) * 2.0;
    let (a, b) = (row1.x, row1.y);
    let (d, e) = (row2.x, row2.y);
    let c = d1 * d1 - d2 * d2 - p1.norm_squared() + p2.norm_squared();
    let f = d2 * d2 - d3 * d3 - p2.norm_squared() + p3.norm_squared();

    let x = (c * e - f * b) / (e * a - b * d);
    let y = (c * d - a * f) / (b * d - a * e);
    Point2::new(x, y)
}
