mod debug;
mod mcts;
mod node;
mod noise;
mod play;
mod ucb;

pub use mcts::SearchTree;
pub use node::{Node, NodeId};
pub use play::{select_move, SelectError};
