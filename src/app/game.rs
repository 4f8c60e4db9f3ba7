use rand::rngs::ThreadRng;
use rand::Rng;

use crate::app::app_error::{AppError, AppErrorConversion, AppResult};
use crate::app::control::{Control, State};
use crate::app::keyboard_control::{Action, Controls, InputEdges, KeyboardState};
use crate::app::prefs::Prefs;
use crate::app::scene::Scene;
use crate::app::snake_management::{self, Outcome, World};
use crate::basic::{Cell, Dir, Face, Millis};
use crate::cube::{CubeTopology, Orientation};
use crate::food::place_food;
use crate::snake::{self, Snake};
use crate::snake_control::{Controller, InputBuffer, Template};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FrameResult {
    Continue,
    Quit,
}

/// A whole match, owns every piece of state and is driven one rendered
/// frame at a time through [`Game::frame`]
pub struct Game<R: Rng = ThreadRng> {
    prefs: Prefs,
    topology: CubeTopology,
    control: Control,
    input: InputBuffer,
    edges: InputEdges,
    world: World,
    /// Every new game starts from a copy of this snake
    start_snake: Snake,
    start_dir: Dir,
    autopilot: Option<Box<dyn Controller>>,
    rng: R,
}

impl Game {
    pub fn new(prefs: Prefs) -> AppResult<Self> {
        Self::with_rng(prefs, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(prefs: Prefs, rng: R) -> AppResult<Self> {
        prefs
            .validate()
            .map_err(AppError::from)
            .with_trace_step("Game::with_rng")?;
        let topology = CubeTopology::new(prefs.grid_size)
            .map_err(AppError::from)
            .with_trace_step("Game::with_rng")?;

        let start_dir = Dir::R;
        let center = prefs.grid_size / 2;
        let start_snake = snake::Builder::default()
            .pos(Cell::new(Face::Front, center, center))
            .dir(start_dir)
            .len(prefs.start_len)
            .build(&topology)
            .map_err(AppError::from)
            .with_trace_step("Game::with_rng")?;

        let mut game = Self {
            control: Control::new(&prefs),
            input: InputBuffer::new(start_dir),
            edges: InputEdges::new(Controls::default()),
            world: World {
                snake: start_snake.clone(),
                food: None,
                orientation: Orientation::new(prefs.rotation_smoothing),
                score: 0,
            },
            start_snake,
            start_dir,
            autopilot: None,
            topology,
            prefs,
            rng,
        };
        game.new_game();
        Ok(game)
    }

    /// Fresh snake, food, speed and orientation, also what Restart does
    pub fn new_game(&mut self) {
        self.world.snake = self.start_snake.clone();
        self.world.orientation.reset();
        self.world.score = 0;
        self.world.food = place_food(
            &self.world.snake,
            self.topology.grid_size(),
            self.prefs.max_food_attempts,
            &mut self.rng,
        );
        self.control.reset();
        self.input.reset(self.start_dir);

        log::info!(
            "new game on a {0}x{0} cube, snake length {1}, food at {2:?}",
            self.topology.grid_size(),
            self.world.snake.len(),
            self.world.food,
        );
    }

    /// Let a controller steer instead of the keyboard, `None` hands
    /// control back to the player
    pub fn set_autopilot(&mut self, template: Option<Template>) {
        self.autopilot = template.map(Template::into_controller);
    }

    /// Run one rendered frame
    ///
    /// `elapsed_ms` is the time since the previous frame and `keyboard`
    /// the keys held right now, presses are detected against the keys of
    /// the previous call.
    pub fn frame(&mut self, elapsed_ms: Millis, keyboard: &KeyboardState) -> FrameResult {
        self.edges.update(keyboard);

        if self.edges.is_down(Action::Quit) {
            log::info!("quit with score {}", self.world.score);
            return FrameResult::Quit;
        }

        match self.control.state() {
            State::Playing | State::Paused => {
                if self.edges.pressed_this_frame(Action::Pause) {
                    self.toggle_pause();
                }
            }
            State::GameOver | State::Won => {
                if self.edges.pressed_this_frame(Action::Restart) {
                    self.new_game();
                }
            }
        }

        if self.control.state() == State::Playing {
            let held: Vec<_> = self.edges.held_dirs().collect();
            for dir in held {
                self.propose(dir);
            }
        }

        self.control.advance_time(elapsed_ms);
        while self.control.can_update() {
            self.tick();
        }

        self.world.orientation.ease();

        FrameResult::Continue
    }

    /// Queue a direction for the next tick, ignored unless playing
    pub fn propose(&mut self, dir: Dir) -> bool {
        self.control.state() == State::Playing && self.input.propose(dir)
    }

    pub fn toggle_pause(&mut self) {
        self.control.toggle_pause();
        log::info!("{:?}", self.control.state());
    }

    /// One simulation step, `None` when the game isn't running
    pub fn tick(&mut self) -> Option<Outcome> {
        if self.control.state() != State::Playing {
            return None;
        }

        if let Some(autopilot) = &mut self.autopilot {
            let proposal = autopilot.next_dir(&self.world.snake, self.input.dir(), self.world.food, &self.topology);
            if let Some(dir) = proposal {
                self.input.propose(dir);
            }
        }

        let dir = self.input.commit();
        Some(snake_management::tick(
            &mut self.world,
            &mut self.control,
            &self.topology,
            dir,
            self.prefs.max_food_attempts,
            &mut self.rng,
        ))
    }

    pub fn scene(&self) -> Scene {
        let palette = &self.prefs.palette;
        let state = self.control.state();
        Scene {
            grid_size: self.topology.grid_size(),
            snake: self.world.snake.iter().copied().collect(),
            food: self.world.food,
            face_colors: palette.face_colors,
            grid_color: palette.grid_color,
            snake_color: palette.snake_color,
            food_color: palette.food_color,
            background_color: palette.background_color,
            rotation: self.world.orientation.current(),
            paused: state == State::Paused,
            game_over: state == State::GameOver,
            won: state == State::Won,
            score: self.world.score,
            tick_interval_ms: self.control.tick_interval_ms(),
        }
    }

    pub fn state(&self) -> State {
        self.control.state()
    }

    pub fn snake(&self) -> &Snake {
        &self.world.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.world.food
    }

    pub fn dir(&self) -> Dir {
        self.input.dir()
    }

    pub fn score(&self) -> usize {
        self.world.score
    }

    pub fn topology(&self) -> &CubeTopology {
        &self.topology
    }
}
