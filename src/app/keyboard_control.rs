use std::collections::HashSet;

use crate::basic::Dir;

/// Physical keys the game listens to
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    P,
    R,
    Escape,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Move(Dir),
    Pause,
    Restart,
    Quit,
}

impl Action {
    pub const ALL: [Self; 7] = [
        Self::Move(Dir::U),
        Self::Move(Dir::D),
        Self::Move(Dir::L),
        Self::Move(Dir::R),
        Self::Pause,
        Self::Restart,
        Self::Quit,
    ];
}

/// Keys bound to each action, movement has an arrow key and a WASD alias
#[derive(Clone, Debug)]
pub struct Controls {
    pub u: [Key; 2],
    pub d: [Key; 2],
    pub l: [Key; 2],
    pub r: [Key; 2],
    pub pause: Key,
    pub restart: Key,
    pub quit: Key,
}

impl Default for Controls {
    fn default() -> Self {
        use Key::*;
        #[rustfmt::skip]
        let controls = Self {
            u: [Up, W], d: [Down, S], l: [Left, A], r: [Right, D],
            pause: P, restart: R, quit: Escape,
        };
        controls
    }
}

impl Controls {
    pub fn keys(&self, action: Action) -> &[Key] {
        match action {
            Action::Move(Dir::U) => &self.u,
            Action::Move(Dir::D) => &self.d,
            Action::Move(Dir::L) => &self.l,
            Action::Move(Dir::R) => &self.r,
            Action::Pause => std::slice::from_ref(&self.pause),
            Action::Restart => std::slice::from_ref(&self.restart),
            Action::Quit => std::slice::from_ref(&self.quit),
        }
    }
}

/// Keys held down during one frame
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KeyboardState {
    down: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.down.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }
}

impl FromIterator<Key> for KeyboardState {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        Self { down: iter.into_iter().collect() }
    }
}

/// Rising edge, true only for the frame in which the key went down
pub fn pressed_this_frame(is_down: bool, was_down: bool) -> bool {
    is_down && !was_down
}

/// Remembers the previous frame's keys to tell presses from holds
#[derive(Clone, Debug, Default)]
pub struct InputEdges {
    controls: Controls,
    current: KeyboardState,
    previous: KeyboardState,
}

impl InputEdges {
    pub fn new(controls: Controls) -> Self {
        Self {
            controls,
            current: KeyboardState::default(),
            previous: KeyboardState::default(),
        }
    }

    /// Call once at the start of every frame
    pub fn update(&mut self, keyboard: &KeyboardState) {
        self.previous = std::mem::replace(&mut self.current, keyboard.clone());
    }

    /// Level-triggered, any alias held counts
    pub fn is_down(&self, action: Action) -> bool {
        self.controls.keys(action).iter().any(|&key| self.current.is_down(key))
    }

    fn was_down(&self, action: Action) -> bool {
        self.controls.keys(action).iter().any(|&key| self.previous.is_down(key))
    }

    /// Edge-triggered, holding the key doesn't repeat the action
    pub fn pressed_this_frame(&self, action: Action) -> bool {
        pressed_this_frame(self.is_down(action), self.was_down(action))
    }

    /// Directions held this frame, in [`Dir::iter`] order
    pub fn held_dirs(&self) -> impl Iterator<Item = Dir> + '_ {
        Dir::iter().filter(move |&dir| self.is_down(Action::Move(dir)))
    }
}
