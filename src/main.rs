use cube_snake::app::{FrameResult, Game, KeyboardState, Prefs, State};
use cube_snake::app::{AppErrorConversion, AppResult};
use cube_snake::snake_control::Template;

/// 60 frames per second
const FRAME_MS: f64 = 1000. / 60.;
/// About an hour of play
const MAX_FRAMES: usize = 60 * 60 * 60;

// headless run of the full frame loop, the autopilot plays a single game
fn main() -> AppResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut game = Game::new(Prefs::default()).with_trace_step("main")?;
    game.set_autopilot(Some(Template::Autopilot));

    let keyboard = KeyboardState::new();
    let mut frames = 0;
    while frames < MAX_FRAMES {
        frames += 1;
        if game.frame(FRAME_MS, &keyboard) == FrameResult::Quit {
            break;
        }
        if matches!(game.state(), State::GameOver | State::Won) {
            break;
        }
        if frames % 600 == 0 {
            let scene = game.scene();
            log::debug!(
                "frame {}: length {}, tick interval {}ms, rotation {:?}",
                frames,
                scene.snake.len(),
                scene.tick_interval_ms,
                scene.rotation,
            );
        }
    }

    let scene = game.scene();
    log::info!(
        "{:?} after {} frames ({:.1}s): score {}, length {}, tick interval {}ms",
        game.state(),
        frames,
        frames as f64 * FRAME_MS / 1000.,
        scene.score,
        scene.snake.len(),
        scene.tick_interval_ms,
    );

    Ok(())
}
