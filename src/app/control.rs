use crate::app::prefs::Prefs;
use crate::basic::Millis;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    Paused,
    GameOver,
    /// The board filled up, there is nowhere left to put food
    Won,
}

// combines the tick clock with game state management
#[derive(Clone, Debug)]
pub struct Control {
    game_state: State,

    // current time between two ticks, shrinks every time
    // food is eaten
    tick_interval_ms: u32,
    start_tick_interval_ms: u32,
    tick_interval_step_ms: u32,
    min_tick_interval_ms: u32,

    // amount of time which ticks have not yet been
    // performed for, an interval is subtracted per tick
    // so the surplus carries over to the next frame
    accumulator: Millis,
}

impl Control {
    pub fn new(prefs: &Prefs) -> Self {
        Self {
            game_state: State::Playing,
            tick_interval_ms: prefs.start_tick_interval_ms,
            start_tick_interval_ms: prefs.start_tick_interval_ms,
            tick_interval_step_ms: prefs.tick_interval_step_ms,
            min_tick_interval_ms: prefs.min_tick_interval_ms,
            accumulator: 0.,
        }
    }

    /// Back to the starting speed with a fresh clock, used by new games
    pub fn reset(&mut self) {
        self.game_state = State::Playing;
        self.tick_interval_ms = self.start_tick_interval_ms;
        self.accumulator = 0.;
    }

    pub fn state(&self) -> State {
        self.game_state
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn accumulator(&self) -> Millis {
        self.accumulator
    }

    // call once per frame before draining ticks with can_update
    pub fn advance_time(&mut self, elapsed_ms: Millis) {
        if self.game_state != State::Playing {
            return;
        }
        // a bogus frame time shouldn't poison the clock
        if !elapsed_ms.is_finite() || elapsed_ms < 0. {
            log::warn!("ignoring frame time of {}ms", elapsed_ms);
            return;
        }
        self.accumulator += elapsed_ms;
    }

    // repeatedly called in the frame loop as while loop condition,
    // performs as many ticks as the accumulated time allows
    pub fn can_update(&mut self) -> bool {
        if self.game_state != State::Playing {
            return false;
        }

        let interval = self.tick_interval_ms as Millis;
        if self.accumulator >= interval {
            self.accumulator -= interval;
            true
        } else {
            false
        }
    }

    /// Shorten the tick interval after food was eaten, never below the floor
    pub fn speed_up(&mut self) {
        self.tick_interval_ms = self
            .tick_interval_ms
            .saturating_sub(self.tick_interval_step_ms)
            .max(self.min_tick_interval_ms);
    }

    pub fn toggle_pause(&mut self) {
        match self.game_state {
            State::Playing => self.pause(),
            State::Paused => self.play(),
            State::GameOver | State::Won => (),
        }
    }

    pub fn play(&mut self) {
        self.game_state = State::Playing;
    }

    pub fn pause(&mut self) {
        self.game_state = State::Paused;
    }

    pub fn game_over(&mut self) {
        self.game_state = State::GameOver;
    }

    pub fn won(&mut self) {
        self.game_state = State::Won;
    }
}
