use std::time::{Duration, Instant};

use crate::{
    Affine, AnyWidget, Canvas, CursorIcon, DrawCx, EventCx, LayoutCx, Offset, Painter, Point,
    Pointer, PointerButton, PointerButtonEvent, PointerEvent, PointerId, PointerMoveEvent,
    PointerPropagate, Size, Space, UpdateCx, Widget, WidgetFlags, WidgetState,
};

mod signal;

pub use signal::RootSignal;

/// Hosts a single widget on a surface.
///
/// The host feeds input, frame ticks and a canvas into the root and listens
/// for [`RootSignal`]s to learn when to do so.
pub struct Root {
    contents: Box<dyn AnyWidget>,
    state:    WidgetState,
    size:     Size,
    pointers: Vec<Pointer>,
    cursor:   CursorIcon,
    sink:     Box<dyn Fn(RootSignal)>,
}

impl Root {
    /// Pointer used by [`Root::tap`].
    pub const TAP_POINTER: PointerId = PointerId::from_u64(u64::MAX);

    pub fn new(contents: impl Widget, sink: impl Fn(RootSignal) + 'static) -> Self {
        let mut root = Self {
            contents: Box::new(contents),
            state:    WidgetState::new(),
            size:     Size::new(800.0, 600.0),
            pointers: Vec::new(),
            cursor:   CursorIcon::Default,
            sink:     Box::new(sink),
        };

        root.flush();
        root
    }

    fn signal(&self, signal: RootSignal) {
        tracing::trace!(
            signal = ?signal,
            "root signal emitted",
        );

        (self.sink)(signal);
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn resize(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.state.flags.insert(WidgetFlags::NEEDS_LAYOUT | WidgetFlags::NEEDS_DRAW);
            self.flush();
        }
    }

    pub fn contents<T: Widget>(&self) -> Option<&T> {
        self.contents.as_any().downcast_ref()
    }

    /// Transform from widget space to surface space.
    pub fn contents_transform(&self) -> Affine {
        self.state.transform()
    }

    pub fn contents_size(&self) -> Size {
        self.state.size
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub fn needs_animate(&self) -> bool {
        self.state.needs_animate()
    }

    pub fn needs_draw(&self) -> bool {
        self.state.needs_draw()
    }

    /// Whether pointer positions would be routed with a stale placement.
    pub fn needs_layout(&self) -> bool {
        self.state.needs_layout()
    }

    pub fn layout(&mut self, painter: &mut dyn Painter) -> Size {
        let space = Space::new(Size::ZERO, self.size);

        let mut cx = LayoutCx {
            state: &mut self.state,
        };

        let size = self.contents.layout(&mut cx, painter, space);

        let offset = if self.size.is_finite() {
            (self.size - size).to_offset() / 2.0
        } else {
            Offset::ZERO
        };

        self.state.size = size;
        self.state.transform = Affine::translate(offset);
        self.state.flags.remove(WidgetFlags::NEEDS_LAYOUT);

        tracing::trace!(?size, ?offset, "root laid out");

        size
    }

    pub fn animate(&mut self, dt: Duration) {
        if !self.state.needs_animate() {
            return;
        }

        self.state
            .flags
            .remove(WidgetFlags::NEEDS_ANIMATE | WidgetFlags::SIGNALED_ANIMATE);

        let mut cx = UpdateCx {
            state: &mut self.state,
        };

        self.contents.animate(&mut cx, dt);
        self.flush();
    }

    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        if self.state.needs_layout() {
            self.layout(canvas.painter());
        }

        self.state
            .flags
            .remove(WidgetFlags::NEEDS_DRAW | WidgetFlags::SIGNALED_DRAW);

        let transform = self.state.transform;
        let contents = &mut self.contents;
        let state = &mut self.state;

        canvas.transform(transform, &mut |canvas| {
            let mut cx = DrawCx { state: &mut *state };
            contents.draw(&mut cx, canvas);
        });
    }

    pub fn pointer_moved(&mut self, pointer: PointerId, position: Point) {
        match self.pointers.iter_mut().find(|p| p.id == pointer) {
            Some(existing) => existing.position = position,
            None => self.pointers.push(Pointer {
                id: pointer,
                position,
            }),
        }

        let event = PointerEvent::Move(PointerMoveEvent {
            pointer,
            position: self.to_local(position),
        });

        self.dispatch(&event);
    }

    pub fn pointer_pressed(&mut self, pointer: PointerId, button: PointerButton, pressed: bool) {
        let Some(position) = self.pointers.iter().find(|p| p.id == pointer).map(|p| p.position)
        else {
            tracing::trace!(?pointer, "press from unknown pointer ignored");
            return;
        };

        let event = PointerButtonEvent {
            pointer,
            button,
            position: self.to_local(position),
        };

        let event = if pressed {
            PointerEvent::Down(event)
        } else {
            PointerEvent::Up(event)
        };

        self.dispatch(&event);
    }

    pub fn pointer_left(&mut self, pointer: PointerId) {
        self.pointers.retain(|p| p.id != pointer);
        self.dispatch(&PointerEvent::Leave(pointer));
    }

    /// Press and release the primary button at `position`, like a touch.
    pub fn tap(&mut self, position: Point) {
        self.pointer_moved(Self::TAP_POINTER, position);
        self.pointer_pressed(Self::TAP_POINTER, PointerButton::Primary, true);
        self.pointer_pressed(Self::TAP_POINTER, PointerButton::Primary, false);
        self.pointer_left(Self::TAP_POINTER);
    }

    fn to_local(&self, position: Point) -> Point {
        match self.state.transform.inverse() {
            Some(inverse) => inverse * position,
            None => position,
        }
    }

    fn dispatch(&mut self, event: &PointerEvent) -> PointerPropagate {
        let mut cx = EventCx {
            state: &mut self.state,
        };

        let propagate = self.contents.on_pointer_event(&mut cx, event);
        self.flush();

        propagate
    }

    fn flush(&mut self) {
        let flags = self.state.flags;

        if flags.contains(WidgetFlags::NEEDS_ANIMATE)
            && !flags.contains(WidgetFlags::SIGNALED_ANIMATE)
        {
            self.state.flags.insert(WidgetFlags::SIGNALED_ANIMATE);
            self.signal(RootSignal::RequestAnimate(Instant::now()));
        }

        if flags.intersects(WidgetFlags::NEEDS_DRAW | WidgetFlags::NEEDS_LAYOUT)
            && !flags.contains(WidgetFlags::SIGNALED_DRAW)
        {
            self.state.flags.insert(WidgetFlags::SIGNALED_DRAW);
            self.signal(RootSignal::RequestRedraw);
        }

        if self.state.cursor != self.cursor {
            self.cursor = self.state.cursor;
            self.signal(RootSignal::SetCursor(self.cursor));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use crate::{
        Canvas, Color, CornerRadius, DisplayList, DrawCx, EstimatePainter, EventCx, LayoutCx,
        Offset, Paint, Painter, Point, PointerEvent, PointerPropagate, Root, RootSignal, Size,
        Space, UpdateCx, Widget,
    };

    #[derive(Default)]
    struct Recorder {
        events:  Vec<PointerEvent>,
        frames:  u32,
        animate: u32,
    }

    impl Widget for Recorder {
        fn layout(
            &mut self,
            _cx: &mut LayoutCx<'_>,
            _painter: &mut dyn Painter,
            space: Space,
        ) -> Size {
            space.constrain(Size::new(100.0, 50.0))
        }

        fn draw(&mut self, cx: &mut DrawCx<'_>, canvas: &mut dyn Canvas) {
            canvas.draw_rect(cx.rect(), CornerRadius::ZERO, &Paint::from(Color::WHITE));
        }

        fn animate(&mut self, cx: &mut UpdateCx<'_>, _dt: Duration) {
            self.frames += 1;

            if self.frames < self.animate {
                cx.request_animate();
            }
        }

        fn on_pointer_event(&mut self, cx: &mut EventCx<'_>, event: &PointerEvent) -> PointerPropagate {
            if let PointerEvent::Down(..) = event {
                cx.request_animate();
            }

            self.events.push(event.clone());
            PointerPropagate::Handled
        }
    }

    fn root_with(recorder: Recorder) -> (Root, Rc<RefCell<Vec<RootSignal>>>) {
        let signals = Rc::new(RefCell::new(Vec::new()));

        let root = Root::new(recorder, {
            let signals = signals.clone();
            move |signal| signals.borrow_mut().push(signal)
        });

        (root, signals)
    }

    #[test]
    fn centers_contents() {
        let (mut root, _) = root_with(Recorder::default());

        root.resize(Size::new(300.0, 150.0));
        root.layout(&mut EstimatePainter);

        assert_eq!(
            root.contents_transform().offset,
            Offset::new(100.0, 50.0)
        );
    }

    #[test]
    fn pointer_positions_are_local() {
        let (mut root, _) = root_with(Recorder::default());

        root.resize(Size::new(300.0, 150.0));
        root.layout(&mut EstimatePainter);
        root.tap(Point::new(110.0, 60.0));

        let recorder = root.contents::<Recorder>().unwrap();

        assert_eq!(recorder.events.len(), 4);
        assert!(matches!(
            &recorder.events[1],
            PointerEvent::Down(event) if event.position == Point::new(10.0, 10.0)
        ));
        assert!(matches!(recorder.events[3], PointerEvent::Leave(..)));
    }

    #[test]
    fn resize_invalidates_placement() {
        let (mut root, _) = root_with(Recorder::default());

        assert!(root.needs_layout());
        root.layout(&mut EstimatePainter);
        assert!(!root.needs_layout());

        root.resize(Size::new(300.0, 150.0));
        assert!(root.needs_layout());

        root.layout(&mut EstimatePainter);
        root.tap(Point::new(100.0, 50.0));

        let recorder = root.contents::<Recorder>().unwrap();
        assert!(matches!(
            &recorder.events[1],
            PointerEvent::Down(event) if event.position == Point::new(0.0, 0.0)
        ));
    }

    #[test]
    fn animate_requests_are_not_repeated() {
        let (mut root, signals) = root_with(Recorder {
            animate: 3,
            ..Default::default()
        });

        root.layout(&mut EstimatePainter);
        root.tap(Point::new(400.0, 300.0));

        let count = |signals: &Rc<RefCell<Vec<RootSignal>>>| {
            signals
                .borrow()
                .iter()
                .filter(|s| matches!(s, RootSignal::RequestAnimate(..)))
                .count()
        };

        assert_eq!(count(&signals), 1);

        root.animate(Duration::from_millis(16));
        root.animate(Duration::from_millis(16));
        root.animate(Duration::from_millis(16));
        assert!(!root.needs_animate());

        // the third frame stopped asking
        assert_eq!(count(&signals), 3);

        root.animate(Duration::from_millis(16));
        assert_eq!(root.contents::<Recorder>().unwrap().frames, 3);
    }

    #[test]
    fn draw_lays_out_first() {
        let (mut root, signals) = root_with(Recorder::default());
        let mut list = DisplayList::default();

        assert_eq!(signals.borrow().first(), Some(&RootSignal::RequestRedraw));

        root.draw(&mut list);

        assert!(!root.needs_draw());
        assert_eq!(root.contents_size(), Size::new(100.0, 50.0));
        assert_eq!(list.commands().len(), 1);
        assert_eq!(
            list.commands()[0].transform().offset,
            Offset::new(350.0, 275.0)
        );
    }
}
