//! # Intersection Primitives
//!
//! Line–circle and circle–circle intersection.
//!
//! Both routines return an [`Intersections`] value holding zero, one or two
//! points in a fixed order. Callers never rely on that order: they pick the
//! geometrically meaningful point with an explicit [`Pick`] rule.
//!
//! ## Tolerance
//!
//! Tangency is decided with [`EPSILON`] scaled by the magnitude of the
//! inputs, so touching circles report exactly one point instead of two
//! nearly identical ones.

use config::constants::EPSILON;

use crate::core::vec2::Vec2;
use crate::error::{OutlineError, Result};

// =============================================================================
// RESULT SET
// =============================================================================

/// Zero, one or two intersection points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersections {
    /// No intersection: separate, nested or coincident curves.
    Empty,
    /// The curves touch at a single point.
    Tangent(Vec2),
    /// The curves cross at two points, in the routine's documented order.
    Secant(Vec2, Vec2),
}

/// Coordinate rule used to choose one point out of an [`Intersections`].
///
/// A point wins only when strictly better; ties go to the second point of
/// the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Smaller x coordinate.
    MinX,
    /// Larger x coordinate.
    MaxX,
    /// Smaller y coordinate.
    MinY,
    /// Larger y coordinate.
    MaxY,
}

impl Pick {
    fn prefers(self, candidate: Vec2, current: Vec2) -> bool {
        match self {
            Pick::MinX => candidate.x < current.x,
            Pick::MaxX => candidate.x > current.x,
            Pick::MinY => candidate.y < current.y,
            Pick::MaxY => candidate.y > current.y,
        }
    }
}

impl Intersections {
    /// Number of points (0, 1 or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Intersections::Empty => 0,
            Intersections::Tangent(_) => 1,
            Intersections::Secant(..) => 2,
        }
    }

    /// Whether there is no intersection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Intersections::Empty)
    }

    /// Points in the routine's order.
    #[must_use]
    pub fn points(&self) -> Vec<Vec2> {
        match *self {
            Intersections::Empty => Vec::new(),
            Intersections::Tangent(p) => vec![p],
            Intersections::Secant(a, b) => vec![a, b],
        }
    }

    /// Chooses one point according to `pick`.
    ///
    /// # Examples
    /// ```
    /// use fourcircle::primitives::intersect::{circle_circle_intersect, Pick};
    /// use fourcircle::Vec2;
    ///
    /// let hits = circle_circle_intersect(Vec2::ZERO, 5.0, Vec2::new(8.0, 0.0), 5.0);
    /// assert_eq!(hits.select(Pick::MinY), Some(Vec2::new(4.0, -3.0)));
    /// ```
    #[must_use]
    pub fn select(&self, pick: Pick) -> Option<Vec2> {
        match *self {
            Intersections::Empty => None,
            Intersections::Tangent(p) => Some(p),
            Intersections::Secant(a, b) => Some(if pick.prefers(a, b) { a } else { b }),
        }
    }

    /// Like [`select`](Self::select) but reports a missing intersection as a
    /// geometry error naming `what` was being constructed.
    pub fn require(&self, pick: Pick, what: &str) -> Result<Vec2> {
        self.select(pick)
            .ok_or_else(|| OutlineError::geometry(format!("no intersection for {what}")))
    }
}

// =============================================================================
// LINE–CIRCLE
// =============================================================================

/// Intersects the infinite line through `p0` and `p1` with a circle.
///
/// The line is written as `y = m·x + c` and substituted into the circle
/// equation, giving `A·x² + B·x + C = 0`. Two points are ordered
/// `(-B + √disc)` first, then `(-B − √disc)`. A vertical line is solved
/// directly for `x = p0.x`, ordered by `+√` then `−√` in y.
///
/// # Errors
///
/// [`OutlineError::Geometry`] when `p0 == p1` (no line is defined).
///
/// # Examples
/// ```
/// use fourcircle::primitives::intersect::line_circle_intersect;
/// use fourcircle::Vec2;
///
/// let hits = line_circle_intersect(Vec2::ZERO, 5.0, Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0)).unwrap();
/// assert_eq!(hits.points(), vec![Vec2::new(5.0, 0.0), Vec2::new(-5.0, 0.0)]);
/// ```
pub fn line_circle_intersect(center: Vec2, radius: f64, p0: Vec2, p1: Vec2) -> Result<Intersections> {
    if p0 == p1 {
        return Err(OutlineError::geometry(format!(
            "line through {p0} and {p1} is undefined"
        )));
    }
    if p0.x == p1.x {
        return Ok(vertical_line_circle(center, radius, p0.x));
    }

    let m = (p1.y - p0.y) / (p1.x - p0.x);
    let c = p0.y - m * p0.x;
    let (h, k) = (center.x, center.y);

    let qa = 1.0 + m * m;
    let qb = 2.0 * (m * (c - k) - h);
    let qc = h * h + (c - k) * (c - k) - radius * radius;
    let discriminant = qb * qb - 4.0 * qa * qc;
    let tolerance = EPSILON * (qb * qb).max((4.0 * qa * qc).abs()).max(1.0);

    let on_line = |x: f64| Vec2::new(x, m * x + c);

    if discriminant < -tolerance {
        Ok(Intersections::Empty)
    } else if discriminant <= tolerance {
        Ok(Intersections::Tangent(on_line(-qb / (2.0 * qa))))
    } else {
        let root = discriminant.sqrt();
        Ok(Intersections::Secant(
            on_line((-qb + root) / (2.0 * qa)),
            on_line((-qb - root) / (2.0 * qa)),
        ))
    }
}

fn vertical_line_circle(center: Vec2, radius: f64, x: f64) -> Intersections {
    let dx = x - center.x;
    let discriminant = radius * radius - dx * dx;
    let tolerance = EPSILON * (radius * radius).max(1.0);

    if discriminant < -tolerance {
        Intersections::Empty
    } else if discriminant <= tolerance {
        Intersections::Tangent(Vec2::new(x, center.y))
    } else {
        let root = discriminant.sqrt();
        Intersections::Secant(Vec2::new(x, center.y + root), Vec2::new(x, center.y - root))
    }
}

// =============================================================================
// CIRCLE–CIRCLE
// =============================================================================

/// Intersects two circles with the radical-line construction.
///
/// Case analysis on the center distance `d`:
///
/// - coincident circles (`d == 0`, `r0 == r1`): empty, the infinite
///   intersection is not representable;
/// - `d > r0 + r1` (separate) or `d < |r0 − r1|` (nested): empty;
/// - `d == r0 + r1` or `d == |r0 − r1|`: one tangency point;
/// - otherwise two points, `a = (r0² − r1² + d²) / 2d` along the center line
///   and `h = √(r0² − a²)` across it, ordered as the +90° then −90° rotation
///   of the direction from `c0` to `c1`.
///
/// # Examples
/// ```
/// use fourcircle::primitives::intersect::{circle_circle_intersect, Intersections};
/// use fourcircle::Vec2;
///
/// let hits = circle_circle_intersect(Vec2::ZERO, 5.0, Vec2::new(8.0, 0.0), 5.0);
/// assert_eq!(hits, Intersections::Secant(Vec2::new(4.0, 3.0), Vec2::new(4.0, -3.0)));
/// ```
#[must_use]
pub fn circle_circle_intersect(c0: Vec2, r0: f64, c1: Vec2, r1: f64) -> Intersections {
    let delta = c1 - c0;
    let d = delta.length();
    let tolerance = EPSILON * (r0.abs() + r1.abs()).max(1.0);

    // Concentric circles share no isolated point, coincident ones share all.
    if d <= tolerance {
        return Intersections::Empty;
    }

    let sum = r0 + r1;
    let diff = (r0 - r1).abs();
    if d > sum + tolerance || d < diff - tolerance {
        return Intersections::Empty;
    }

    let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
    let base = c0 + delta * (a / d);

    if (d - sum).abs() <= tolerance || (d - diff).abs() <= tolerance {
        return Intersections::Tangent(base);
    }

    let h = (r0 * r0 - a * a).max(0.0).sqrt();
    let offset = delta.perp() * (h / d);
    Intersections::Secant(base + offset, base - offset)
}
