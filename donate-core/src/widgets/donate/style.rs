use crate::{Color, Size, Spring, Transition};

/// Geometry, colors and fonts of a [`DonateButton`](super::DonateButton).
///
/// The widget stacks three slots vertically, the flap slot on top, then the
/// face, then the strip slot. The flap and strip are drawn relative to the
/// face, so only the face top depends on the flap slot.
#[derive(Clone, Debug, PartialEq)]
pub struct DonateStyle {
    pub face_size:  Size,
    pub flap_size:  Size,
    pub strip_size: Size,

    /// Distance from the face top to the flap hinge.
    pub flap_offset: f32,

    /// Depth of the flap triangle as a fraction of its width.
    pub flap_depth: f32,

    /// Distance from the face top to the strip top while closed.
    pub strip_rest: f32,

    /// How far the strip rises when open.
    pub strip_lift: f32,

    /// Height of the line along the bottom of the strip.
    pub line_width: f32,

    pub corner_radius: f32,
    pub bounce_scale:  f32,

    /// Added to the total on every strip tap.
    pub step: f64,

    pub font_family:   String,
    pub caption_size:  f32,
    pub amount_size:   f32,
    pub face_color:    Color,
    pub flap_color:    Color,
    pub strip_color:   Color,
    pub line_color:    Color,
    pub caption_color: Color,
    pub amount_color:  Color,
}

impl Default for DonateStyle {
    fn default() -> Self {
        Self {
            face_size:     Size::new(280.0, 140.0),
            flap_size:     Size::new(265.0, 100.0),
            strip_size:    Size::new(280.0, 100.0),
            flap_offset:   5.0,
            flap_depth:    0.3,
            strip_rest:    20.0,
            strip_lift:    190.0,
            line_width:    10.0,
            corner_radius: 25.0,
            bounce_scale:  1.2,
            step:          10.0,
            font_family:   String::from("sans-serif"),
            caption_size:  22.0,
            amount_size:   24.0,
            face_color:    Color::WHITE,
            flap_color:    Color::WHITE,
            strip_color:   Color::BLUE,
            line_color:    Color::WHITE,
            caption_color: Color::BLACK,
            amount_color:  Color::WHITE,
        }
    }
}

impl DonateStyle {
    /// Size of the three stacked slots.
    pub fn size(&self) -> Size {
        let width = self
            .face_size
            .width
            .max(self.flap_size.width)
            .max(self.strip_size.width);

        let height = self.flap_size.height + self.face_size.height + self.strip_size.height;

        Size::new(width, height)
    }

    pub fn face_top(&self) -> f32 {
        self.flap_size.height
    }
}

/// Durations, curves and springs of a [`DonateButton`](super::DonateButton).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonateTimings {
    pub corner:  Transition,
    pub caption: Transition,
    pub flap:    Transition,

    /// Strip rising, starts once the flap is out of the way.
    pub strip_open:  Transition,
    pub strip_close: Transition,

    /// First leg of the bounce, growing to
    /// [`DonateStyle::bounce_scale`].
    pub bounce: Transition,

    /// Second leg of the bounce, back to `1.0`.
    pub settle: Spring,
}

impl Default for DonateTimings {
    fn default() -> Self {
        Self {
            corner:      Transition::bounce_in(1.0),
            caption:     Transition::ease_in(0.8),
            flap:        Transition::linear(0.8),
            strip_open:  Transition::ease_in_out(1.5).with_delay(0.8),
            strip_close: Transition::ease_in_out(0.8),
            bounce:      Transition::tween(0.15),
            settle:      Spring::new(0.7, 200.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stack() {
        let style = DonateStyle::default();

        assert_eq!(style.size(), Size::new(280.0, 340.0));
        assert_eq!(style.face_top(), 100.0);
    }
}
