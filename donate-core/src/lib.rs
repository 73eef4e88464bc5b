mod animation;
mod border;
mod color;
mod context;
mod draw;
mod event;
mod math;
mod root;
mod spring;
mod transition;
mod widget;

pub mod widgets;

pub use animation::{Animatable, Launch, Motion, Ticket};
pub use border::CornerRadius;
pub use color::Color;
pub use context::{DrawCx, EventCx, LayoutCx, UpdateCx};
pub use draw::{
    Blend, Canvas, Clip, Curve, CurveData, CurveSegment, DisplayList, DrawCommand,
    EstimatePainter, Fill, FontWeight, Paint, Painter, Paragraph, ParagraphData, Shader,
    TextAlign, TextStyle, WeakCurve, WeakParagraph,
};
pub use event::{
    CursorIcon, Pointer, PointerButton, PointerButtonEvent, PointerEvent, PointerId,
    PointerMoveEvent, PointerPropagate,
};
pub use math::{Affine, Matrix, Offset, Point, Rect, Size, Space};
pub use root::{Root, RootSignal};
pub use spring::Spring;
pub use transition::{Interpolate, Transition, TransitionCurve, Transitioned};
pub use widget::{AnyWidget, Widget, WidgetFlags, WidgetState};
