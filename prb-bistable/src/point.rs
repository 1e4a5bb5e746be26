/// A point-like memory layout to achieve zero copy.
pub trait Point: Sized {
    /// Create a point from coordinates.
    fn new(x: f64, y: f64) -> Self;
    /// X coordinate.
    fn x(&self) -> f64;
    /// Y coordinate.
    fn y(&self) -> f64;

    /// The point at distance `d0` and angle `a0` (radians) from this point.
    fn pla(&self, d0: f64, a0: f64) -> Self {
        Self::new(self.x() + d0 * a0.cos(), self.y() + d0 * a0.sin())
    }

    /// Distance to another point.
    fn dist(&self, rhs: &Self) -> f64 {
        (rhs.x() - self.x()).hypot(rhs.y() - self.y())
    }

    /// Direction angle (radians) of the segment from this point to `rhs`.
    fn angle_to(&self, rhs: &Self) -> f64 {
        f64::atan2(rhs.y() - self.y(), rhs.x() - self.x())
    }
}

impl Point for [f64; 2] {
    #[inline(always)]
    fn new(x: f64, y: f64) -> Self {
        [x, y]
    }
    #[inline(always)]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline(always)]
    fn y(&self) -> f64 {
        self[1]
    }
}
