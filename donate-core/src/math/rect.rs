use crate::{Affine, Offset, Point, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn min_size(min: Point, size: Size) -> Self {
        Self {
            min,
            max: Point {
                x: min.x + size.width,
                y: min.y + size.height,
            },
        }
    }

    pub const fn top(self) -> f32 {
        self.min.y
    }

    pub const fn right(self) -> f32 {
        self.max.x
    }

    pub const fn bottom(self) -> f32 {
        self.max.y
    }

    pub const fn left(self) -> f32 {
        self.min.x
    }

    pub const fn center(self) -> Point {
        Point {
            x: (self.min.x + self.max.x) / 2.0,
            y: (self.min.y + self.max.y) / 2.0,
        }
    }

    pub const fn top_center(self) -> Point {
        Point {
            x: (self.min.x + self.max.x) / 2.0,
            y: self.min.y,
        }
    }

    pub const fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    pub const fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    pub const fn size(self) -> Size {
        Size {
            width:  self.width(),
            height: self.height(),
        }
    }

    pub fn translate(self, offset: Offset) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    pub const fn contains(self, point: Point) -> bool {
        point.x >= self.min.x
            && point.y >= self.min.y
            && point.x <= self.max.x
            && point.y <= self.max.y
    }

    /// Axis aligned bounds of `self` after `transform`.
    pub fn transform_bounds(self, transform: Affine) -> Self {
        let corners = [
            transform * self.min,
            transform * Point::new(self.max.x, self.min.y),
            transform * Point::new(self.min.x, self.max.y),
            transform * self.max,
        ];

        let mut bounds = Rect {
            min: corners[0],
            max: corners[0],
        };

        for corner in &corners[1..] {
            bounds.min.x = bounds.min.x.min(corner.x);
            bounds.min.y = bounds.min.y.min(corner.y);
            bounds.max.x = bounds.max.x.max(corner.x);
            bounds.max.y = bounds.max.y.max(corner.y);
        }

        bounds
    }
}
