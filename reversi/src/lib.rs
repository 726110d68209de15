pub use board::*;
pub use errors::*;
pub use game::*;
pub use player::*;
pub use strategy::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod game;
mod player;
mod strategy;
mod turn;
mod visualization;
