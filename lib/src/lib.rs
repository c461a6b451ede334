#[macro_use]
pub(crate) mod util;
pub mod game;
pub mod player;
pub mod primitives;
pub mod rules;
