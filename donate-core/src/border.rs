#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerRadius {
    pub top_left:     f32,
    pub top_right:    f32,
    pub bottom_left:  f32,
    pub bottom_right: f32,
}

impl CornerRadius {
    pub const ZERO: Self = Self::all(0.0);

    pub const fn all(radius: f32) -> Self {
        Self {
            top_left:     radius,
            top_right:    radius,
            bottom_left:  radius,
            bottom_right: radius,
        }
    }

    pub const fn is_zero(self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_left == 0.0
            && self.bottom_right == 0.0
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::all(radius)
    }
}
