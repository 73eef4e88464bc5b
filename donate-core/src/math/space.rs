use crate::Size;

/// Layout constraints handed down to a widget.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Space {
    pub min: Size,
    pub max: Size,
}

impl Space {
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// A space that only fits `size`.
    pub const fn tight(size: Size) -> Self {
        Self::new(size, size)
    }

    pub const fn constrain(self, mut size: Size) -> Size {
        if self.min.width.is_finite() {
            size.width = size.width.max(self.min.width);
        }

        if self.min.height.is_finite() {
            size.height = size.height.max(self.min.height);
        }

        Size {
            width:  size.width.min(self.max.width),
            height: size.height.min(self.max.height),
        }
    }
}
