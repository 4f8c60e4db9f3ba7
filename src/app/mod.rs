pub use app_error::{AppError, AppErrorConversion, AppErrorType, AppResult};
pub use control::{Control, State};
pub use game::{FrameResult, Game};
pub use keyboard_control::{Action, Controls, Key, KeyboardState};
pub use palette::Palette;
pub use prefs::{Prefs, PrefsError};
pub use scene::Scene;
pub use snake_management::Outcome;

pub mod app_error;
pub mod control;
mod game;
pub mod keyboard_control;
mod palette;
pub mod prefs;
mod scene;
pub mod snake_management;
