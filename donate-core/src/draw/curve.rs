use std::{
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
    sync::{Arc, Weak},
};

use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fill {
    Winding,
    EvenOdd,
}

/// A shared, copy-on-write path.
///
/// Backends cache their native paths keyed by [`WeakCurve`], so cloning a
/// curve is cheap and mutating one only invalidates the mutated copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    data: Arc<CurveData>,
}

impl Default for Curve {
    fn default() -> Self {
        Self::new()
    }
}

impl Curve {
    pub fn new() -> Self {
        Self {
            data: Arc::new(CurveData::new()),
        }
    }

    /// A closed polygon through `points`.
    pub fn polygon(points: impl IntoIterator<Item = Point>) -> Self {
        let mut curve = Self::new();

        for (i, point) in points.into_iter().enumerate() {
            if i == 0 {
                curve.move_to(point);
            } else {
                curve.line_to(point);
            }
        }

        curve.close();
        curve
    }

    pub fn downgrade(this: &Self) -> WeakCurve {
        WeakCurve {
            data: Arc::downgrade(&this.data),
        }
    }
}

impl Deref for Curve {
    type Target = CurveData;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for Curve {
    fn deref_mut(&mut self) -> &mut Self::Target {
        Arc::make_mut(&mut self.data)
    }
}

#[derive(Clone, Debug)]
pub struct WeakCurve {
    data: Weak<CurveData>,
}

impl WeakCurve {
    pub fn strong_count(&self) -> usize {
        self.data.strong_count()
    }
}

impl PartialEq for WeakCurve {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for WeakCurve {}

impl Hash for WeakCurve {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.as_ptr().hash(state);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurveData {
    pub fill: Fill,

    segments: Vec<CurveSegment>,
}

impl Default for CurveData {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveData {
    pub const fn new() -> Self {
        Self {
            fill:     Fill::Winding,
            segments: Vec::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.segments.last() == Some(&CurveSegment::Close)
    }

    pub fn move_to(&mut self, p: Point) {
        self.segments.push(CurveSegment::Move(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.segments.push(CurveSegment::Line(p));
    }

    pub fn close(&mut self) {
        if !self.is_closed() && !self.is_empty() {
            self.segments.push(CurveSegment::Close);
        }
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = CurveSegment> + '_ {
        self.segments.iter().copied()
    }

    /// Every point the curve passes through, in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            CurveSegment::Move(p) | CurveSegment::Line(p) => Some(*p),
            CurveSegment::Close => None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveSegment {
    Move(Point),
    Line(Point),
    Close,
}

#[cfg(test)]
mod tests {
    use crate::{Curve, CurveSegment, Point};

    #[test]
    fn polygon_is_closed() {
        let curve = Curve::polygon([
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 3.0),
        ]);

        assert!(curve.is_closed());
        assert_eq!(curve.len(), 4);
        assert_eq!(curve.iter().next(), Some(CurveSegment::Move(Point::ORIGIN)));
    }

    #[test]
    fn clones_are_copy_on_write() {
        let a = Curve::polygon([Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        let mut b = a.clone();

        assert_eq!(Curve::downgrade(&a), Curve::downgrade(&b));

        b.line_to(Point::new(2.0, 2.0));

        assert_ne!(Curve::downgrade(&a), Curve::downgrade(&b));
        assert_eq!(a.len(), 3);
    }
}
