use std::time::Duration;

use crate::{
    Affine, Animatable, Canvas, Clip, CornerRadius, Curve, CursorIcon, DrawCx, EventCx, FontWeight,
    LayoutCx, Motion, Offset, Paint, Painter, Paragraph, Point, PointerButton, PointerEvent,
    PointerId, PointerPropagate, Rect, Size, Space, TextAlign, TextStyle, Ticket, Transitioned,
    UpdateCx, Widget,
};

mod model;
mod style;

pub use model::{Caption, Donation, Phase};
pub use style::{DonateStyle, DonateTimings};

/// A tappable part of a [`DonateButton`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Face,
    Strip,
}

/// An envelope that opens on tap and collects donations.
///
/// Tapping the face toggles between closed and open. Opening folds the flap
/// back, fades the caption and squares the corners, then lifts the amount
/// strip out of the envelope. Tapping the strip adds to the total.
pub struct DonateButton {
    style:    DonateStyle,
    timings:  DonateTimings,
    donation: Donation,

    corner_radius: Transitioned<CornerRadius>,
    caption_alpha: Transitioned<f32>,
    strip_lift:    Transitioned<f32>,
    flap:          Animatable,
    scale:         Animatable,

    // the open run whose completion reveals the thank you caption
    reveal: Option<Ticket>,

    flap_curve:   Curve,
    caption:      Paragraph,
    caption_size: Size,
    amount:       Paragraph,
    amount_size:  Size,

    hovered: Option<Region>,
    pressed: Option<(PointerId, Region)>,

    on_toggle: Box<dyn FnMut(Phase)>,
    on_donate: Box<dyn FnMut(f64)>,
}

impl Default for DonateButton {
    fn default() -> Self {
        Self::new()
    }
}

impl DonateButton {
    pub fn new() -> Self {
        Self::with_config(DonateStyle::default(), DonateTimings::default())
    }

    pub fn with_config(style: DonateStyle, timings: DonateTimings) -> Self {
        let donation = Donation::new(style.step);

        let flap_curve = flap_curve(&style);
        let caption = caption_paragraph(&style, donation.caption());
        let amount = amount_paragraph(&style, &donation);

        Self {
            corner_radius: Transitioned::new(
                CornerRadius::all(style.corner_radius),
                timings.corner,
            ),
            caption_alpha: Transitioned::new(1.0, timings.caption),
            strip_lift: Transitioned::new(0.0, timings.strip_close),
            flap: Animatable::new(0.0),
            scale: Animatable::new(1.0),
            reveal: None,
            flap_curve,
            caption,
            caption_size: Size::ZERO,
            amount,
            amount_size: Size::ZERO,
            hovered: None,
            pressed: None,
            on_toggle: Box::new(|_| {}),
            on_donate: Box::new(|_| {}),
            style,
            timings,
            donation,
        }
    }

    /// Called with the new phase whenever the face is tapped.
    pub fn on_toggle(mut self, on_toggle: impl FnMut(Phase) + 'static) -> Self {
        self.on_toggle = Box::new(on_toggle);
        self
    }

    /// Called with the new total whenever the strip is tapped.
    pub fn on_donate(mut self, on_donate: impl FnMut(f64) + 'static) -> Self {
        self.on_donate = Box::new(on_donate);
        self
    }

    pub fn style(&self) -> &DonateStyle {
        &self.style
    }

    pub fn timings(&self) -> &DonateTimings {
        &self.timings
    }

    pub fn donation(&self) -> &Donation {
        &self.donation
    }

    pub fn phase(&self) -> Phase {
        self.donation.phase()
    }

    pub fn is_open(&self) -> bool {
        self.donation.is_open()
    }

    pub fn caption(&self) -> Caption {
        self.donation.caption()
    }

    pub fn amount(&self) -> f64 {
        self.donation.amount()
    }

    pub fn amount_text(&self) -> &str {
        &self.amount.text
    }

    /// Flap rotation in degrees, `0` closed and `-180` open.
    pub fn flap_rotation(&self) -> f32 {
        self.flap.get()
    }

    pub fn scale(&self) -> f32 {
        self.scale.get()
    }

    pub fn corner_radius(&self) -> CornerRadius {
        self.corner_radius.get()
    }

    pub fn caption_alpha(&self) -> f32 {
        *self.caption_alpha
    }

    pub fn strip_lift(&self) -> f32 {
        *self.strip_lift
    }

    pub fn hovered(&self) -> Option<Region> {
        self.hovered
    }

    pub fn face_bounds(&self) -> Rect {
        let size = self.style.size();
        let x = (size.width - self.style.face_size.width) / 2.0;

        Rect::min_size(
            Point::new(x, self.style.face_top()),
            self.style.face_size,
        )
    }

    /// Bounds of the strip before its bounce is applied.
    pub fn strip_bounds(&self) -> Rect {
        let size = self.style.size();
        let x = (size.width - self.style.strip_size.width) / 2.0;
        let y = self.style.face_top() + self.style.strip_rest - *self.strip_lift;

        Rect::min_size(Point::new(x, y), self.style.strip_size)
    }

    /// Scales the strip about the center of its slot below the face, not
    /// about the lifted strip itself.
    pub fn strip_transform(&self) -> Affine {
        let scale = self.scale.get();

        let slot = Point::new(
            self.style.size().width / 2.0,
            self.style.face_top() + self.style.face_size.height + self.style.strip_size.height / 2.0,
        );

        Affine::scale_around(slot, scale, scale)
    }

    /// Places the flap with its hinge at the origin of its curve.
    ///
    /// The rotation about the hinge is projected onto the screen, which
    /// leaves a vertical scale by `cos(angle)`.
    pub fn flap_transform(&self) -> Affine {
        let size = self.style.size();
        let x = (size.width - self.style.flap_size.width) / 2.0;
        let y = self.style.face_top() + self.style.flap_offset;

        let fold = self.flap.get().to_radians().cos();

        Affine::translate(Offset::new(x, y)) * Affine::scale(1.0, fold)
    }

    /// The top-most region under `point`, the flap is never hit.
    pub fn region_at(&self, point: Point) -> Option<Region> {
        if self.face_bounds().contains(point) {
            return Some(Region::Face);
        }

        let local = self.strip_transform().inverse()? * point;

        if self.strip_bounds().contains(local) {
            return Some(Region::Strip);
        }

        None
    }

    fn toggle(&mut self) {
        let phase = self.donation.toggle();
        let open = phase.is_open();

        if open {
            self.corner_radius.begin(CornerRadius::ZERO);
            self.caption_alpha.begin(0.0);
            self.strip_lift.begin_with(self.style.strip_lift, self.timings.strip_open);
        } else {
            self.corner_radius.begin(CornerRadius::all(self.style.corner_radius));
            self.caption_alpha.begin(1.0);
            self.strip_lift.begin_with(0.0, self.timings.strip_close);
        }

        let target = if open { -180.0 } else { 0.0 };
        let launch = self.flap.animate_to(Motion::tween(target, self.timings.flap));

        if launch.interrupted.is_some() && self.reveal.is_some() {
            tracing::debug!("flap interrupted before the caption was revealed");
        }

        self.reveal = open.then_some(launch.ticket);

        tracing::debug!(?phase, "donate button toggled");
        (self.on_toggle)(phase);
    }

    fn donate(&mut self) {
        let total = self.donation.donate();
        self.amount = amount_paragraph(&self.style, &self.donation);

        self.scale.animate_through([
            Motion::tween(self.style.bounce_scale, self.timings.bounce),
            Motion::spring(1.0, self.timings.settle),
        ]);

        tracing::debug!(total, "donation added");
        (self.on_donate)(total);
    }

    fn set_hovered(&mut self, cx: &mut EventCx<'_>, hovered: Option<Region>) {
        if self.hovered == hovered {
            return;
        }

        self.hovered = hovered;

        cx.set_cursor(match hovered {
            Some(_) => CursorIcon::Pointer,
            None => CursorIcon::Default,
        });
    }

    fn activate(&mut self, cx: &mut EventCx<'_>, region: Region) {
        match region {
            Region::Face => self.toggle(),
            Region::Strip => {
                self.donate();
                cx.request_layout();
            }
        }

        cx.request_animate();
        cx.request_draw();
    }
}

fn flap_curve(style: &DonateStyle) -> Curve {
    let width = style.flap_size.width;

    Curve::polygon([
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(width / 2.0, width * style.flap_depth),
    ])
}

fn caption_paragraph(style: &DonateStyle, caption: Caption) -> Paragraph {
    let text_style = TextStyle {
        font_size:   style.caption_size,
        font_family: style.font_family.clone(),
        font_weight: FontWeight::BOLD,
        color:       style.caption_color,
    };

    Paragraph::new(caption.as_str(), text_style, TextAlign::Center)
}

fn amount_paragraph(style: &DonateStyle, donation: &Donation) -> Paragraph {
    let text_style = TextStyle {
        font_size:   style.amount_size,
        font_family: style.font_family.clone(),
        font_weight: FontWeight::NORMAL,
        color:       style.amount_color,
    };

    Paragraph::new(donation.amount_text(), text_style, TextAlign::Center)
}

/// Top-left of a text block of `size` centered vertically in `rect`.
fn text_offset(rect: Rect, size: Size) -> Offset {
    Offset::new(rect.left(), rect.top() + (rect.height() - size.height) / 2.0)
}

impl Widget for DonateButton {
    fn layout(&mut self, _cx: &mut LayoutCx<'_>, painter: &mut dyn Painter, space: Space) -> Size {
        self.caption_size = painter.measure_text(&self.caption, self.style.face_size.width);
        self.amount_size = painter.measure_text(&self.amount, self.style.strip_size.width);

        space.constrain(self.style.size())
    }

    fn draw(&mut self, _cx: &mut DrawCx<'_>, canvas: &mut dyn Canvas) {
        let this = &*self;
        let style = &this.style;

        canvas.transform(this.flap_transform(), &mut |canvas| {
            canvas.draw_curve(&this.flap_curve, &Paint::from(style.flap_color));
        });

        let strip = this.strip_bounds();

        canvas.transform(this.strip_transform(), &mut |canvas| {
            let line = Rect::min_size(
                Point::new(strip.left(), strip.bottom() - style.line_width),
                Size::new(strip.width(), style.line_width),
            );

            canvas.draw_rect(strip, CornerRadius::ZERO, &Paint::from(style.strip_color));
            canvas.draw_rect(line, CornerRadius::ZERO, &Paint::from(style.line_color));

            canvas.draw_text(
                &this.amount,
                strip.width(),
                text_offset(strip, this.amount_size),
            );
        });

        let face = this.face_bounds();
        let corners = this.corner_radius.get();

        canvas.draw_rect(face, corners, &Paint::from(style.face_color));

        let alpha = *this.caption_alpha;

        if alpha <= 0.0 {
            return;
        }

        canvas.clip(&Clip::Rect(face, corners), &mut |canvas| {
            canvas.layer(alpha, &mut |canvas| {
                canvas.draw_text(
                    &this.caption,
                    face.width(),
                    text_offset(face, this.caption_size),
                );
            });
        });
    }

    fn animate(&mut self, cx: &mut UpdateCx<'_>, dt: Duration) {
        cx.request_draw();

        let mut running = false;
        running |= self.corner_radius.animate(dt);
        running |= self.caption_alpha.animate(dt);
        running |= self.strip_lift.animate(dt);

        if let Some(ticket) = self.flap.animate(dt)
            && self.reveal == Some(ticket)
        {
            self.reveal = None;
            self.donation.reveal();
            self.caption = caption_paragraph(&self.style, self.donation.caption());

            tracing::debug!(caption = %self.donation.caption(), "caption revealed");
            cx.request_layout();
        }

        self.scale.animate(dt);

        running |= self.flap.is_running();
        running |= self.scale.is_running();

        if running {
            cx.request_animate();
        }
    }

    fn on_pointer_event(&mut self, cx: &mut EventCx<'_>, event: &PointerEvent) -> PointerPropagate {
        match event {
            PointerEvent::Move(event) => {
                let region = self.region_at(event.position);
                self.set_hovered(cx, region);

                if let Some((pointer, pressed)) = self.pressed
                    && pointer == event.pointer
                    && region != Some(pressed)
                {
                    tracing::trace!(?pressed, "press moved off its region");
                    self.pressed = None;
                }

                match region {
                    Some(_) => PointerPropagate::Handled,
                    None => PointerPropagate::Bubble,
                }
            }

            PointerEvent::Down(event) if event.button == PointerButton::Primary => {
                match self.region_at(event.position) {
                    Some(region) => {
                        self.pressed = Some((event.pointer, region));
                        PointerPropagate::Handled
                    }

                    None => PointerPropagate::Bubble,
                }
            }

            PointerEvent::Up(event) if event.button == PointerButton::Primary => {
                match self.pressed.take() {
                    Some((pointer, region))
                        if pointer == event.pointer
                            && self.region_at(event.position) == Some(region) =>
                    {
                        self.activate(cx, region);
                        PointerPropagate::Handled
                    }

                    _ => PointerPropagate::Bubble,
                }
            }

            PointerEvent::Leave(pointer) => {
                if self.pressed.is_some_and(|(pressed, _)| pressed == *pointer) {
                    self.pressed = None;
                }

                self.set_hovered(cx, None);
                PointerPropagate::Bubble
            }

            _ => PointerPropagate::Bubble,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::*;
    use crate::{DisplayList, DrawCommand, EstimatePainter, PointerId, Root};

    const FRAME: Duration = Duration::from_millis(16);

    fn mount(button: DonateButton) -> Root {
        let mut root = Root::new(button, |_| {});
        root.layout(&mut EstimatePainter);
        root
    }

    fn button(root: &Root) -> &DonateButton {
        root.contents::<DonateButton>().unwrap()
    }

    fn frames(root: &mut Root, count: usize) {
        for _ in 0..count {
            root.animate(FRAME);
        }
    }

    fn settle(root: &mut Root) {
        for _ in 0..1000 {
            if !root.needs_animate() {
                return;
            }

            root.animate(FRAME);
        }

        panic!("animations never settled");
    }

    fn face(root: &Root) -> Point {
        root.contents_transform() * button(root).face_bounds().center()
    }

    /// A point on the strip that the face does not cover.
    fn strip(root: &Root) -> Point {
        let button = button(root);
        let strip = button.strip_bounds();
        let face = button.face_bounds();

        assert!(strip.top() < face.top(), "strip is covered");

        let point = Point::new(strip.center().x, strip.top() + 10.0);
        root.contents_transform() * button.strip_transform() * point
    }

    fn open(root: &mut Root) {
        root.tap(face(root));
        settle(root);
    }

    fn draw(root: &mut Root) -> DisplayList {
        let mut list = DisplayList::default();
        root.draw(&mut list);
        list
    }

    #[test]
    fn starts_closed() {
        let root = mount(DonateButton::new());
        let button = button(&root);

        assert_eq!(button.phase(), Phase::Closed);
        assert_eq!(button.caption(), Caption::Donate);
        assert_eq!(button.amount(), 0.0);
        assert_eq!(button.amount_text(), "0.0$");
        assert_eq!(button.corner_radius(), CornerRadius::all(25.0));
        assert_eq!(button.flap_rotation(), 0.0);
        assert_eq!(root.contents_size(), Size::new(280.0, 340.0));
    }

    #[test]
    fn face_tap_opens_immediately() {
        let mut root = mount(DonateButton::new());

        root.tap(face(&root));

        assert_eq!(button(&root).phase(), Phase::Open);
        assert!(root.needs_animate());
    }

    #[test]
    fn caption_changes_when_flap_is_folded() {
        let mut root = mount(DonateButton::new());
        root.tap(face(&root));

        frames(&mut root, 49);
        assert_eq!(button(&root).caption(), Caption::Donate);
        assert!(button(&root).flap_rotation() > -180.0);

        frames(&mut root, 2);
        assert_eq!(button(&root).caption(), Caption::ThankYou);
        assert_eq!(button(&root).flap_rotation(), -180.0);

        settle(&mut root);
        assert_eq!(button(&root).corner_radius(), CornerRadius::ZERO);
        assert_eq!(button(&root).caption_alpha(), 0.0);
        assert_eq!(button(&root).strip_lift(), 190.0);
    }

    #[test]
    fn strip_waits_for_flap() {
        let mut root = mount(DonateButton::new());
        root.tap(face(&root));

        frames(&mut root, 45);
        assert_eq!(button(&root).strip_lift(), 0.0);

        frames(&mut root, 20);
        assert!(button(&root).strip_lift() > 0.0);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut root = mount(DonateButton::new());

        open(&mut root);
        root.tap(face(&root));
        settle(&mut root);

        let button = button(&root);
        assert_eq!(button.phase(), Phase::Closed);
        assert_eq!(button.corner_radius(), CornerRadius::all(25.0));
        assert_eq!(button.flap_rotation(), 0.0);
        assert_eq!(button.caption_alpha(), 1.0);
        assert_eq!(button.strip_lift(), 0.0);

        // closing keeps the caption
        assert_eq!(button.caption(), Caption::ThankYou);
    }

    #[test]
    fn interrupted_open_keeps_caption() {
        let mut root = mount(DonateButton::new());

        root.tap(face(&root));
        frames(&mut root, 25);
        root.tap(face(&root));
        settle(&mut root);

        assert_eq!(button(&root).phase(), Phase::Closed);
        assert_eq!(button(&root).caption(), Caption::Donate);

        open(&mut root);
        assert_eq!(button(&root).caption(), Caption::ThankYou);
    }

    #[test]
    fn three_strip_taps() {
        let mut root = mount(DonateButton::new());
        open(&mut root);

        for _ in 0..3 {
            root.tap(strip(&root));
        }

        assert_eq!(button(&root).amount(), 30.0);
        assert_eq!(button(&root).amount_text(), "30.0$");

        let list = draw(&mut root);
        assert!(list.texts().any(|text| text == "30.0$"));
    }

    #[test]
    fn closed_strip_is_covered() {
        let mut root = mount(DonateButton::new());
        let button = button(&root);

        let hidden = button.strip_bounds().center();
        assert_eq!(button.region_at(hidden), Some(Region::Face));

        let point = root.contents_transform() * hidden;
        root.tap(point);

        let button = self::button(&root);
        assert_eq!(button.amount(), 0.0);
        assert_eq!(button.phase(), Phase::Open);
    }

    #[test]
    fn flap_is_not_tappable() {
        let button = DonateButton::new();
        let flap = button.flap_transform() * Point::new(132.5, 1.0);

        assert_eq!(button.region_at(flap), Some(Region::Face));
        assert_eq!(button.region_at(Point::new(140.0, 50.0)), None);
    }

    #[test]
    fn strip_bounce() {
        let mut root = mount(DonateButton::new());
        open(&mut root);

        root.tap(strip(&root));
        frames(&mut root, 9);

        let peak = button(&root).scale();
        assert!(peak > 1.15 && peak <= 1.2, "{peak}");

        settle(&mut root);
        assert_eq!(button(&root).scale(), 1.0);
    }

    #[test]
    fn bounce_grows_from_slot() {
        let mut root = mount(DonateButton::new());
        open(&mut root);

        root.tap(strip(&root));
        frames(&mut root, 9);

        let button = button(&root);
        let scale = button.scale();
        let corner = button.strip_transform() * button.strip_bounds().min;

        // the open strip spans y -70..30, its slot is centered at (140, 290)
        assert!((corner.x - 140.0 * (1.0 - scale)).abs() < 1e-2, "{corner:?}");
        assert!((corner.y - (290.0 - 360.0 * scale)).abs() < 1e-2, "{corner:?}");
        assert!(corner.y < -120.0, "{corner:?}");
    }

    #[test]
    fn bounced_strip_is_hit_where_drawn() {
        let mut root = mount(DonateButton::new());
        open(&mut root);

        root.tap(strip(&root));
        frames(&mut root, 9);

        let button = self::button(&root);
        let drawn = button.strip_transform() * Point::new(140.0, -40.0);

        // above the strip as laid out, inside it as drawn
        assert!(drawn.y < button.strip_bounds().top());
        assert_eq!(button.region_at(drawn), Some(Region::Strip));

        let point = root.contents_transform() * drawn;
        root.tap(point);
        assert_eq!(self::button(&root).amount(), 20.0);
    }

    #[test]
    fn strip_tap_during_toggle() {
        let mut root = mount(DonateButton::new());

        root.tap(face(&root));
        frames(&mut root, 100);

        // the strip is rising but not done yet
        assert!(button(&root).strip_lift() < 190.0);

        root.tap(strip(&root));
        assert_eq!(button(&root).amount(), 10.0);
        assert_eq!(button(&root).phase(), Phase::Open);

        settle(&mut root);

        let button = button(&root);
        assert_eq!(button.strip_lift(), 190.0);
        assert_eq!(button.scale(), 1.0);
        assert_eq!(button.caption(), Caption::ThankYou);
        assert_eq!(button.amount_text(), "10.0$");
    }

    #[test]
    fn draw_order() {
        let mut root = mount(DonateButton::new());

        let list = draw(&mut root);
        let commands = list.commands();

        assert!(matches!(commands[0], DrawCommand::Curve { .. }));
        assert!(matches!(
            commands.last(),
            Some(DrawCommand::Text { text, .. }) if text == "Donate"
        ));
        assert_eq!(list.texts().collect::<Vec<_>>(), ["0.0$", "Donate"]);

        open(&mut root);

        let list = draw(&mut root);
        assert_eq!(list.texts().collect::<Vec<_>>(), ["0.0$"]);
        assert!(matches!(
            list.commands().last(),
            Some(DrawCommand::Rect { corners, .. }) if *corners == CornerRadius::ZERO
        ));
    }

    #[test]
    fn flap_folds_upwards() {
        let mut root = mount(DonateButton::new());
        open(&mut root);

        let list = draw(&mut root);
        let transform = list.commands()[0].transform();

        let tip = transform * Point::new(132.5, 79.5);
        let hinge = root.contents_transform() * Point::new(0.0, 105.0);

        assert!(tip.y < hinge.y);
    }

    #[test]
    fn hover_sets_cursor() {
        let mut root = mount(DonateButton::new());
        let pointer = PointerId::from_u64(1);

        root.pointer_moved(pointer, face(&root));
        assert_eq!(root.cursor(), CursorIcon::Pointer);
        assert_eq!(button(&root).hovered(), Some(Region::Face));

        root.pointer_moved(pointer, Point::new(1.0, 1.0));
        assert_eq!(root.cursor(), CursorIcon::Default);
    }

    #[test]
    fn moving_off_cancels_tap() {
        let mut root = mount(DonateButton::new());
        let pointer = PointerId::from_u64(1);

        root.pointer_moved(pointer, face(&root));
        root.pointer_pressed(pointer, PointerButton::Primary, true);
        root.pointer_moved(pointer, Point::new(1.0, 1.0));
        root.pointer_moved(pointer, face(&root));
        root.pointer_pressed(pointer, PointerButton::Primary, false);

        assert_eq!(button(&root).phase(), Phase::Closed);
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut root = mount(DonateButton::new());
        let pointer = PointerId::from_u64(1);

        root.pointer_moved(pointer, face(&root));
        root.pointer_pressed(pointer, PointerButton::Secondary, true);
        root.pointer_pressed(pointer, PointerButton::Secondary, false);

        assert_eq!(button(&root).phase(), Phase::Closed);
    }

    #[test]
    fn observers() {
        let phases = Rc::new(RefCell::new(Vec::new()));
        let totals = Rc::new(RefCell::new(Vec::new()));

        let button = DonateButton::new()
            .on_toggle({
                let phases = phases.clone();
                move |phase| phases.borrow_mut().push(phase)
            })
            .on_donate({
                let totals = totals.clone();
                move |total| totals.borrow_mut().push(total)
            });

        let mut root = mount(button);
        open(&mut root);
        root.tap(strip(&root));
        root.tap(strip(&root));
        root.tap(face(&root));

        assert_eq!(*phases.borrow(), [Phase::Open, Phase::Closed]);
        assert_eq!(*totals.borrow(), [10.0, 20.0]);
    }

    #[test]
    fn custom_step() {
        let style = DonateStyle {
            step: 2.5,
            ..Default::default()
        };

        let mut root = mount(DonateButton::with_config(style, DonateTimings::default()));
        open(&mut root);
        root.tap(strip(&root));

        assert_eq!(button(&root).amount_text(), "2.5$");
    }
}
