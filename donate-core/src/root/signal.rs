use std::time::Instant;

use cursor_icon::CursorIcon;

/// Requests from a [`Root`](crate::Root) to its host.
#[derive(Clone, Debug, PartialEq)]
pub enum RootSignal {
    /// Call [`Root::draw`](crate::Root::draw) on the next frame.
    RequestRedraw,

    /// Call [`Root::animate`](crate::Root::animate) with the time elapsed
    /// since the given instant, then redraw.
    RequestAnimate(Instant),

    SetCursor(CursorIcon),
}
