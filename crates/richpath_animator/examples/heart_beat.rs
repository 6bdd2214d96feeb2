//! Heart Beat Demo
//!
//! Loads two paths from an inline SVG, pulses the heart while its outline
//! draws in, then fades the heart out.
//!
//! Features demonstrated:
//! - Loading named paths with PathDocument
//! - Grouped (`and_animate`) and sequential (`then_animate`) builders
//! - Scaling against the original size, color keyframes, custom updates
//! - Lifecycle listeners and a fixed-step frame loop
//!
//! Run with: cargo run -p richpath_animator --example heart_beat
//! Set RUST_LOG=richpath_animator=debug to follow the sequencer.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use richpath_animator::{
    CallbackListener, Easing, PathDocument, RepeatMode, RichPath, SharedPath,
};
use tracing_subscriber::EnvFilter;

const HEART_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="110">
    <path id="heart" fill="#e53935"
          d="M60 100 L15 55 C0 40 5 10 30 10 C45 10 55 20 60 30 C65 20 75 10 90 10 C115 10 120 40 105 55 Z"/>
    <path id="outline" fill="none" stroke="#212121" stroke-width="3"
          d="M60 100 L15 55 C0 40 5 10 30 10 C45 10 55 20 60 30 C65 20 75 10 90 10 C115 10 120 40 105 55 Z"/>
</svg>"##;

const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let document = PathDocument::from_str(HEART_SVG)?;
    tracing::info!(
        "Loaded {} paths ({}x{})",
        document.paths().len(),
        document.width,
        document.height
    );

    let heart = document.find_path("heart");
    let outline = document.find_path("outline");

    let animator = richpath_animator::animate([heart.clone()])
        .scale(&[1.0, 1.2, 1.0])
        .fill_color(&[0xFFE53935, 0xFFFF8A80, 0xFFE53935])
        .duration(600)
        .repeat_mode(RepeatMode::Restart)
        .repeat_count(2)
        .and_animate([outline.clone()])
        .trim_path_end(&[0.0, 1.0])
        .duration(1800)
        .interpolator(Easing::fast_out_slow_in())
        .then_animate([heart.clone()])
        .fill_alpha(&[0.0])
        .custom(
            |path: &mut RichPath, value: f32| path.set_rotation(value * 15.0),
            &[0.0, 1.0, 0.0],
        )
        .duration(400)
        .interpolator(Easing::Linear)
        .animation_listener(
            CallbackListener::new()
                .on_start(|| tracing::info!("Animation started"))
                .on_repeat(|| tracing::info!("Heart beat"))
                .on_end(|| tracing::info!("Animation finished")),
        )
        .start()?;

    let mut frame = 0u32;
    while animator.tick(FRAME_MS as f32) {
        frame += 1;
        if frame % 10 == 0 {
            report(frame, heart.as_ref(), outline.as_ref());
        }
        thread::sleep(Duration::from_millis(FRAME_MS));
    }
    report(frame, heart.as_ref(), outline.as_ref());

    Ok(())
}

fn report(frame: u32, heart: Option<&SharedPath>, outline: Option<&SharedPath>) {
    if let Some(heart) = heart {
        let heart = heart.lock().unwrap();
        tracing::info!(
            frame,
            width = heart.width(),
            scale = heart.scale_x(),
            fill = ?heart.fill_color(),
            alpha = heart.fill_alpha(),
            rotation = heart.rotation(),
            "heart"
        );
    }
    if let Some(outline) = outline {
        let outline = outline.lock().unwrap();
        tracing::info!(frame, trim_end = outline.trim_path_end(), "outline");
    }
}
