use std::{
    sync::mpsc::{self, Receiver},
    time::{Duration, Instant},
};

use donate_core::{
    Color, CursorIcon, Point, Root, RootSignal, Size,
    widgets::DonateButton,
};
use donate_skia::{Error, RasterSurface, SkiaPainter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

/// A headless host for a [`DonateButton`].
///
/// The host owns the root, listens to its signals and renders frames into a
/// raster surface whenever the root asks for it.
pub struct App {
    root:       Root,
    receiver:   Receiver<RootSignal>,
    painter:    SkiaPainter,
    surface:    RasterSurface,
    background: Color,
    animate:    Option<Instant>,
    redraw:     bool,
    cursor:     CursorIcon,
}

impl App {
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        Self::with_button(DonateButton::new(), width, height)
    }

    pub fn with_button(button: DonateButton, width: u32, height: u32) -> Result<Self, Error> {
        let surface = RasterSurface::new(width, height)?;

        let (sender, receiver) = mpsc::channel();
        let mut root = Root::new(button, move |signal| {
            let _ = sender.send(signal);
        });

        root.resize(Size::new(width as f32, height as f32));

        let mut app = Self {
            root,
            receiver,
            painter: SkiaPainter::new(),
            surface,
            background: Color::BLACK,
            animate: None,
            redraw: false,
            cursor: CursorIcon::Default,
        };

        app.layout();
        app.handle_signals();
        Ok(app)
    }

    pub fn init_log() {
        let mut filter = EnvFilter::default();

        if cfg!(debug_assertions) {
            filter = filter.add_directive(tracing::Level::DEBUG.into());
        }

        if let Ok(env) = std::env::var("RUST_LOG")
            && let Ok(env) = env.parse()
        {
            filter = filter.add_directive(env);
        }

        let subscriber = tracing_subscriber::registry().with(filter);

        #[cfg(not(target_arch = "wasm32"))]
        let subscriber = subscriber.with(tracing_subscriber::fmt::layer());

        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn button(&self) -> Option<&DonateButton> {
        self.root.contents()
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
        self.redraw = true;
    }

    pub fn load_font(&mut self, bytes: &[u8], alias: Option<&str>) {
        self.painter.load_font(bytes, alias);
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        self.surface.resize(width, height)?;

        let scale = self.surface.scale_factor();
        let size = Size::new(width as f32 / scale, height as f32 / scale);

        self.root.resize(size);
        self.layout();
        self.handle_signals();

        Ok(())
    }

    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.surface.set_scale_factor(scale_factor);

        let size = Size::new(
            self.surface.width() as f32 / scale_factor,
            self.surface.height() as f32 / scale_factor,
        );

        self.root.resize(size);
        self.layout();
        self.handle_signals();
    }

    /// Tap at `position` in logical surface coordinates.
    pub fn tap(&mut self, position: Point) {
        self.layout();
        self.root.tap(position);
        self.handle_signals();
    }

    pub fn is_animating(&self) -> bool {
        self.animate.is_some()
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Run one frame `dt` after the previous one.
    ///
    /// Animates if the root asked for it, then draws if anything changed.
    /// Returns whether a frame was drawn.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.handle_signals();

        if self.animate.take().is_some() {
            self.root.animate(dt);
            self.handle_signals();
        }

        if !self.redraw {
            return false;
        }

        self.render();
        true
    }

    /// Draw a frame now.
    pub fn render(&mut self) {
        self.redraw = false;

        let root = &mut self.root;
        self.surface.draw(&mut self.painter, self.background, |canvas| {
            root.draw(canvas);
        });

        self.painter.cleanup();
        self.handle_signals();
    }

    /// The last drawn frame as a PNG file.
    pub fn png(&mut self) -> Result<Vec<u8>, Error> {
        self.surface.png()
    }

    /// The last drawn frame as RGBA, row by row.
    pub fn pixels(&mut self) -> Result<Vec<u8>, Error> {
        self.surface.pixels()
    }

    // pointer routing needs the placement of the current size
    fn layout(&mut self) {
        if self.root.needs_layout() {
            self.root.layout(&mut self.painter);
        }
    }

    fn handle_signals(&mut self) {
        while let Ok(signal) = self.receiver.try_recv() {
            match signal {
                RootSignal::RequestRedraw => {
                    self.redraw = true;
                }

                RootSignal::RequestAnimate(at) => {
                    self.animate.get_or_insert(at);
                    self.redraw = true;
                }

                RootSignal::SetCursor(cursor) => {
                    tracing::trace!(?cursor, "cursor changed");
                    self.cursor = cursor;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use donate_core::{Color, Point, widgets::Phase};

    use super::App;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(app: &mut App) -> u32 {
        let mut frames = 0;

        while app.is_animating() {
            app.advance(FRAME);
            frames += 1;
        }

        frames
    }

    #[test]
    fn tap_before_first_frame() {
        let mut app = App::new(800, 600).unwrap();

        assert!(app.needs_redraw());

        app.tap(Point::new(400.0, 300.0));

        assert_eq!(app.button().unwrap().phase(), Phase::Open);
        assert!(app.is_animating());
    }

    #[test]
    fn tap_after_resize() {
        let mut app = App::new(800, 600).unwrap();
        app.resize(400, 400).unwrap();

        // the button is now offset by (60, 30), its face spans y 130..270
        app.tap(Point::new(200.0, 200.0));

        assert_eq!(app.button().unwrap().phase(), Phase::Open);
    }

    #[test]
    fn advance_runs_until_settled() {
        let mut app = App::new(800, 600).unwrap();

        assert!(app.advance(FRAME));
        assert!(!app.needs_redraw());
        assert!(!app.advance(FRAME));

        app.tap(Point::new(400.0, 300.0));

        let frames = settle(&mut app);
        let button = app.button().unwrap();

        assert!(frames > 100);
        assert_eq!(button.flap_rotation(), -180.0);
        assert!(!app.needs_redraw());
        assert!(!app.advance(FRAME));
    }

    #[test]
    fn background_fills_surface() {
        let mut app = App::new(64, 64).unwrap();

        app.set_background(Color::rgb(1.0, 0.0, 0.0));
        assert!(app.needs_redraw());
        app.render();

        let pixels = app.pixels().unwrap();
        assert_eq!(&pixels[..4], &[255, 0, 0, 255]);
    }
}
