use crate::{Affine, CursorIcon, Rect, Size};

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u8 {
        const NEEDS_ANIMATE = 1 << 0;
        const NEEDS_LAYOUT  = 1 << 1;
        const NEEDS_DRAW    = 1 << 2;

        // requests already forwarded to the host
        const SIGNALED_ANIMATE = 1 << 3;
        const SIGNALED_DRAW    = 1 << 4;
    }
}

#[derive(Debug)]
pub struct WidgetState {
    pub(crate) flags:     WidgetFlags,
    pub(crate) size:      Size,
    pub(crate) transform: Affine,
    pub(crate) cursor:    CursorIcon,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetState {
    pub fn new() -> Self {
        Self {
            flags:     WidgetFlags::NEEDS_LAYOUT | WidgetFlags::NEEDS_DRAW,
            size:      Size::ZERO,
            transform: Affine::IDENTITY,
            cursor:    CursorIcon::Default,
        }
    }

    pub fn flags(&self) -> WidgetFlags {
        self.flags
    }

    pub fn rect(&self) -> Rect {
        Rect::min_size(Default::default(), self.size)
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub fn needs_animate(&self) -> bool {
        self.flags.contains(WidgetFlags::NEEDS_ANIMATE)
    }

    pub fn needs_layout(&self) -> bool {
        self.flags.contains(WidgetFlags::NEEDS_LAYOUT)
    }

    pub fn needs_draw(&self) -> bool {
        self.flags.contains(WidgetFlags::NEEDS_DRAW)
    }
}
