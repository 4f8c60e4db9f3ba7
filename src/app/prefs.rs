use crate::app::palette::Palette;
use crate::basic::GridSize;
use crate::cube::Orientation;

pub const DEFAULT_GRID_SIZE: GridSize = 4;
pub const MIN_GRID_SIZE: GridSize = 4;
pub const MAX_GRID_SIZE: GridSize = 64;

pub const START_LEN: usize = 3;

pub const START_TICK_INTERVAL_MS: u32 = 200;
pub const TICK_INTERVAL_STEP_MS: u32 = 10;
pub const MIN_TICK_INTERVAL_MS: u32 = 60;

static_assertions::const_assert!(MIN_GRID_SIZE <= DEFAULT_GRID_SIZE && DEFAULT_GRID_SIZE <= MAX_GRID_SIZE);
static_assertions::const_assert!(0 < MIN_TICK_INTERVAL_MS && MIN_TICK_INTERVAL_MS <= START_TICK_INTERVAL_MS);
// the starting snake lies on the front face, head in the middle
static_assertions::const_assert!(START_LEN as GridSize <= MIN_GRID_SIZE / 2 + 1);

#[derive(Copy, Clone, Debug, PartialEq, Display, Error)]
pub enum PrefsError {
    #[display(fmt = "grid size {} is outside of {}..={}", size, min, max)]
    GridSize { size: GridSize, min: GridSize, max: GridSize },
    #[display(fmt = "starting length {} doesn't fit between 3 and {}", len, max)]
    StartLen { len: usize, max: usize },
    #[display(fmt = "tick interval floor {}ms must be positive and at most the starting interval {}ms", min, start)]
    TickInterval { start: u32, min: u32 },
    #[display(fmt = "rotation smoothing {} is outside of (0, 1]", factor)]
    RotationSmoothing { factor: f32 },
    #[display(fmt = "food placement needs at least one attempt")]
    FoodAttempts,
}

#[derive(Clone, Debug)]
pub struct Prefs {
    /// Cells along the side of each face
    pub grid_size: GridSize,
    pub start_len: usize,
    pub start_tick_interval_ms: u32,
    /// How much faster the game gets with every food eaten
    pub tick_interval_step_ms: u32,
    pub min_tick_interval_ms: u32,
    /// Fraction of the remaining angle covered every frame
    pub rotation_smoothing: f32,
    /// Random draws before food placement falls back to enumerating
    /// the free cells
    pub max_food_attempts: usize,
    pub palette: Palette,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            start_len: START_LEN,
            start_tick_interval_ms: START_TICK_INTERVAL_MS,
            tick_interval_step_ms: TICK_INTERVAL_STEP_MS,
            min_tick_interval_ms: MIN_TICK_INTERVAL_MS,
            rotation_smoothing: Orientation::DEFAULT_SMOOTHING,
            max_food_attempts: 1000,
            palette: Palette::default(),
        }
    }
}

impl Prefs {
    pub fn validate(&self) -> Result<(), PrefsError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(PrefsError::GridSize {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }

        let max_len = (self.grid_size / 2 + 1) as usize;
        if !(START_LEN..=max_len).contains(&self.start_len) {
            return Err(PrefsError::StartLen { len: self.start_len, max: max_len });
        }

        if self.min_tick_interval_ms == 0 || self.min_tick_interval_ms > self.start_tick_interval_ms {
            return Err(PrefsError::TickInterval {
                start: self.start_tick_interval_ms,
                min: self.min_tick_interval_ms,
            });
        }

        if !(self.rotation_smoothing > 0. && self.rotation_smoothing <= 1.) {
            return Err(PrefsError::RotationSmoothing { factor: self.rotation_smoothing });
        }

        if self.max_food_attempts == 0 {
            return Err(PrefsError::FoodAttempts);
        }

        Ok(())
    }
}
