use std::{any::Any, time::Duration};

use crate::{
    Canvas, DrawCx, EventCx, LayoutCx, Painter, PointerEvent, PointerPropagate, Size, Space,
    UpdateCx,
};

mod state;

pub use state::{WidgetFlags, WidgetState};

pub trait Widget: Any {
    fn layout(&mut self, cx: &mut LayoutCx<'_>, painter: &mut dyn Painter, space: Space) -> Size;

    fn draw(&mut self, cx: &mut DrawCx<'_>, canvas: &mut dyn Canvas) {
        let _ = cx;
        let _ = canvas;
    }

    fn animate(&mut self, cx: &mut UpdateCx<'_>, dt: Duration) {
        let _ = cx;
        let _ = dt;
    }

    fn on_pointer_event(&mut self, cx: &mut EventCx<'_>, event: &PointerEvent) -> PointerPropagate {
        let _ = cx;
        let _ = event;

        PointerPropagate::Bubble
    }
}

pub trait AnyWidget: Widget {
    fn as_any(&self) -> &dyn Any;
}

impl<T> AnyWidget for T
where
    T: Widget,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}
