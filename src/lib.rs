#[macro_use]
extern crate derive_more;

pub mod app;
pub mod basic;
pub mod color;
pub mod cube;
pub mod food;
pub mod snake;
pub mod snake_control;
