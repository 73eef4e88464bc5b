use std::time::Duration;

use donate::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn settle(app: &mut App) {
    while app.is_animating() {
        app.advance(FRAME);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    App::init_log();

    let path = std::env::args().nth(1).unwrap_or_else(|| String::from("donate.png"));

    let mut app = App::new(800, 600)?;
    app.set_background(Color::rgb(0.1, 0.1, 0.12));

    let face = |app: &App| {
        let button = app.button()?;
        Some(app.root().contents_transform() * button.face_bounds().center())
    };

    let strip = |app: &App| {
        let button = app.button()?;
        let bounds = button.strip_bounds();
        let point = Point::new(bounds.center().x, bounds.top() + 10.0);

        Some(app.root().contents_transform() * button.strip_transform() * point)
    };

    if let Some(point) = face(&app) {
        app.tap(point);
    }

    settle(&mut app);

    for _ in 0..3 {
        if let Some(point) = strip(&app) {
            app.tap(point);
        }

        settle(&mut app);
    }

    if app.needs_redraw() {
        app.render();
    }

    if let Some(button) = app.button() {
        tracing::info!(
            total = button.amount_text(),
            caption = %button.caption(),
            "donations done",
        );
    }

    std::fs::write(&path, app.png()?)?;
    tracing::info!(path = %path, "frame written");

    Ok(())
}
