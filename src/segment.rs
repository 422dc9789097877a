use bevy_math::IVec2;

/// A line segment between two integer points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    start: IVec2,
    end: IVec2,
}

impl Segment {
    #[inline]
    #[must_use]
    pub fn new(start: IVec2, end: IVec2) -> Self {
        Self { start, end }
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> IVec2 {
        self.start
    }

    #[inline]
    #[must_use]
    pub fn end(&self) -> IVec2 {
        self.end
    }

    /// The intersection of this segment with another, rounded to the
    /// nearest pixel.
    ///
    /// Proper crossings use the parametric cross-product test. Collinear
    /// overlapping segments resolve deterministically to the overlap point
    /// farthest along this segment's direction; parallel or disjoint
    /// segments yield `None`.
    #[must_use]
    pub fn intersection(&self, other: &Segment) -> Option<IVec2> {
        let p = self.start.as_dvec2();
        let r = (self.end - self.start).as_dvec2();
        let q = other.start.as_dvec2();
        let s = (other.end - other.start).as_dvec2();

        let r_cross_s = r.perp_dot(s);
        let q_minus_p = q - p;

        if r_cross_s == 0.0 {
            if q_minus_p.perp_dot(r) != 0.0 {
                // Parallel, never meeting.
                return None;
            }
            return self.collinear_overlap(other);
        }

        let t = q_minus_p.perp_dot(s) / r_cross_s;
        let u = q_minus_p.perp_dot(r) / r_cross_s;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            let point = p + r * t;
            Some(IVec2::new(
                point.x.round() as i32,
                point.y.round() as i32,
            ))
        } else {
            None
        }
    }

    /// For collinear segments: the point of the shared span farthest along
    /// this segment's direction.
    fn collinear_overlap(&self, other: &Segment) -> Option<IVec2> {
        let p = self.start.as_dvec2();
        let r = (self.end - self.start).as_dvec2();
        let length_squared = r.dot(r);
        if length_squared == 0.0 {
            return None;
        }

        let t0 = (other.start.as_dvec2() - p).dot(r) / length_squared;
        let t1 = (other.end.as_dvec2() - p).dot(r) / length_squared;

        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);
        if lo > hi {
            return None;
        }

        let point = p + r * hi;
        Some(IVec2::new(point.x.round() as i32, point.y.round() as i32))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bevy_math::ivec2;

    #[test]
    fn test_crossing_segments() {
        let a = Segment::new(ivec2(100, 0), ivec2(100, 100));
        let b = Segment::new(ivec2(0, 0), ivec2(200, 50));
        assert_eq!(a.intersection(&b), Some(ivec2(100, 25)));
        assert_eq!(b.intersection(&a), Some(ivec2(100, 25)));
    }

    #[test]
    fn test_disjoint_segments() {
        let a = Segment::new(ivec2(0, 0), ivec2(100, 100));
        let b = Segment::new(ivec2(300, 0), ivec2(0, 300));
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_parallel_segments() {
        let a = Segment::new(ivec2(0, 0), ivec2(100, 100));
        let b = Segment::new(ivec2(0, 100), ivec2(100, 200));
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_touching_endpoints() {
        let a = Segment::new(ivec2(0, 0), ivec2(10, 10));
        let b = Segment::new(ivec2(10, 10), ivec2(20, 0));
        assert_eq!(a.intersection(&b), Some(ivec2(10, 10)));
    }

    #[test]
    fn test_collinear_overlap_takes_farthest_point() {
        let a = Segment::new(ivec2(0, 5), ivec2(10, 5));
        let b = Segment::new(ivec2(4, 5), ivec2(8, 5));
        // Farthest along a's direction (toward increasing x).
        assert_eq!(a.intersection(&b), Some(ivec2(8, 5)));

        let reversed = Segment::new(ivec2(10, 5), ivec2(0, 5));
        assert_eq!(reversed.intersection(&b), Some(ivec2(4, 5)));
    }

    #[test]
    fn test_collinear_disjoint() {
        let a = Segment::new(ivec2(0, 5), ivec2(10, 5));
        let b = Segment::new(ivec2(20, 5), ivec2(30, 5));
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_rounds_to_nearest_pixel() {
        let a = Segment::new(ivec2(0, 0), ivec2(10, 5));
        let b = Segment::new(ivec2(5, 0), ivec2(5, 10));
        // True crossing at (5, 2.5).
        let point = a.intersection(&b).unwrap();
        assert_eq!(point.x, 5);
        assert!((point.y - 2).abs() <= 1);
    }
}
