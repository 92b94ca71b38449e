use arrayvec::ArrayVec;

use sogo::{Action, Game, NUM_ACTIONS};

/// Index of a node within its [`SearchTree`](super::SearchTree) arena.
pub type NodeId = usize;

/// A tree vertex. The parent is a non-owning back-reference into the arena;
/// children are stored in the order they were created, ascending by action
/// index. `value_sum / visits` estimates the outcome from the perspective of
/// the player to move at this node.
#[derive(Clone, Debug)]
pub struct Node {
    pub game: Game,
    pub parent: Option<NodeId>,
    pub action: Option<Action>,
    pub policy: f32,
    pub visits: u32,
    pub value_sum: f32,
    pub children: ArrayVec<NodeId, NUM_ACTIONS>,
}

impl Node {
    pub fn root(game: Game) -> Self {
        Node {
            game,
            parent: None,
            action: None,
            policy: 0.0,
            visits: 0,
            value_sum: 0.0,
            children: ArrayVec::new(),
        }
    }

    pub fn child(game: Game, parent: NodeId, action: Action, policy: f32) -> Self {
        Node {
            game,
            parent: Some(parent),
            action: Some(action),
            policy,
            visits: 0,
            value_sum: 0.0,
            children: ArrayVec::new(),
        }
    }

    /// A node expands exactly once, so having children is being expanded.
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Mean outcome from this node's own perspective.
    pub fn expected_reward(&self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.value_sum / self.visits as f32
        }
    }
}
