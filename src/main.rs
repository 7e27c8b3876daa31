//! gl_jump entry point
//!
//! The window/GPU host is not part of this crate. Natively this runs the full
//! frame pipeline headless with the autopilot at a fixed 60 Hz and reports
//! the results.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use gl_jump::platform::{Autopilot, Clock, ManualClock};
    use gl_jump::renderer::FrameBuilder;
    use gl_jump::{Game, Tuning, TuningError};

    const FRAME_DT: f64 = 1.0 / 60.0;
    const DEMO_SECONDS: f64 = 120.0;

    env_logger::init();
    log::info!("gl_jump (headless) starting...");

    let tuning = match Tuning::from_env() {
        Ok(tuning) => tuning,
        Err(TuningError::Io(err)) => {
            return Err(err).context("could not read the file named by GL_JUMP_TUNING");
        }
        Err(err) => {
            log::warn!("Ignoring tuning file: {}", err);
            Tuning::default()
        }
    };

    let mut clock = ManualClock::new(0.0);
    let mut autopilot = Autopilot::new(FRAME_DT as f32);
    let mut builder = FrameBuilder::default();
    let mut game = Game::new(tuning, clock.now());

    let frames = (DEMO_SECONDS / FRAME_DT) as u64;
    let mut vertex_bytes = 0usize;
    for _ in 0..frames {
        clock.advance(FRAME_DT);
        autopilot.observe(game.state());
        game.frame(&autopilot, &clock, &mut builder);
        vertex_bytes += builder.finish().vertex_bytes().len();
    }

    log::info!(
        "Simulated {} frames ({} vertex bytes), {} runs finished",
        frames,
        vertex_bytes,
        game.runs()
    );
    match game.high_scores().best() {
        Some(best) => log::info!("Best score: {}", best),
        None => log::info!("No run finished"),
    }

    println!("{}", game.high_scores().to_json()?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // A browser host drives gl_jump::Game directly
}
