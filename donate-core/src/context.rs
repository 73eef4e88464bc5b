use crate::{Affine, CursorIcon, Point, Rect, Size, WidgetFlags, WidgetState};

pub struct EventCx<'a> {
    pub(crate) state: &'a mut WidgetState,
}

pub struct UpdateCx<'a> {
    pub(crate) state: &'a mut WidgetState,
}

pub struct LayoutCx<'a> {
    pub(crate) state: &'a mut WidgetState,
}

pub struct DrawCx<'a> {
    pub(crate) state: &'a mut WidgetState,
}

macro_rules! impl_contexts {
    ($cx:ty { $($tt:tt)* }) => {
        impl $cx {
            $($tt)*
        }
    };
    ($cx:ty, $($cxs:ty),* $(,)* { $($tt:tt)* }) => {
        impl_contexts!($cx { $($tt)* });
        impl_contexts!($($cxs),* { $($tt)* });
    }
}

impl_contexts! {
    EventCx<'_>,
    UpdateCx<'_> {
        pub fn request_animate(&mut self) {
            self.state.flags.insert(WidgetFlags::NEEDS_ANIMATE);
        }

        pub fn request_layout(&mut self) {
            self.state.flags.insert(WidgetFlags::NEEDS_LAYOUT | WidgetFlags::NEEDS_DRAW);
        }

        pub fn request_draw(&mut self) {
            self.state.flags.insert(WidgetFlags::NEEDS_DRAW);
        }

        pub fn set_cursor(&mut self, cursor: CursorIcon) {
            self.state.cursor = cursor;
        }
    }
}

impl_contexts! {
    EventCx<'_>,
    UpdateCx<'_>,
    LayoutCx<'_>,
    DrawCx<'_> {
        pub fn transform(&self) -> Affine {
            self.state.transform
        }

        pub fn size(&self) -> Size {
            self.state.size
        }

        pub fn rect(&self) -> Rect {
            Rect::min_size(Point::ORIGIN, self.size())
        }
    }
}
