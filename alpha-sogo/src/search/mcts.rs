use log::warn;

use sogo::{Action, Game, NUM_ACTIONS};

use super::{
    node::{Node, NodeId},
    ucb::upper_confidence_bound,
};
use crate::{
    agent::{Agent, Policy},
    config::SearchConfig,
};

pub(super) const ROOT: NodeId = 0;

/// The tree for a single search. Nodes live in an arena and refer to each
/// other by index; the arena is dropped with the tree once the visit
/// distribution has been produced.
pub struct SearchTree {
    pub(super) nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new(game: Game) -> Self {
        SearchTree {
            nodes: vec![Node::root(game)],
        }
    }

    /// Runs the configured number of simulations and returns the visit-count
    /// distribution over the root actions.
    pub fn search<A: Agent>(&mut self, agent: &A, config: &SearchConfig, add_noise: bool) -> Policy {
        if add_noise {
            let (policy, _eval) = agent.policy_and_eval(&self.nodes[ROOT].game);
            let policy = self.noisy_root_policy(policy, config);
            self.expand(ROOT, &policy);
        }

        for _ in 0..config.rollouts {
            // Selection: descend to a leaf.
            let mut node = ROOT;
            while self.nodes[node].is_expanded() {
                node = self.select_child(node, config.exploration);
            }

            // Evaluation: terminal leaves score themselves, the rest ask the
            // oracle and expand.
            let (value, terminal) = self.nodes[node].game.value_and_terminated();
            let value = if terminal {
                value
            } else {
                let (policy, eval) = agent.policy_and_eval(&self.nodes[node].game);
                let policy = masked_policy(policy, &self.nodes[node].game);
                self.expand(node, &policy);
                eval
            };

            self.backpropagate(node, value);
        }

        self.improved_policy()
    }

    /// The child maximizing the upper confidence bound. Equal bounds keep
    /// the earlier child, so the choice is deterministic for identical
    /// trees.
    fn select_child(&self, id: NodeId, exploration: f32) -> NodeId {
        let parent_visits = self.nodes[id].visits;
        let mut best = self.nodes[id].children[0];
        let mut best_ucb = upper_confidence_bound(exploration, parent_visits, &self.nodes[best]);
        for &child in &self.nodes[id].children[1..] {
            let ucb = upper_confidence_bound(exploration, parent_visits, &self.nodes[child]);
            if ucb > best_ucb {
                best = child;
                best_ucb = ucb;
            }
        }
        best
    }

    /// Creates one child per action with a strictly positive prior, in
    /// ascending action order.
    pub(super) fn expand(&mut self, id: NodeId, policy: &Policy) {
        assert!(!self.nodes[id].is_expanded(), "node is already expanded");
        for action in Action::all() {
            let prior = policy[action.index()];
            if prior > 0.0 {
                let mut game = self.nodes[id].game;
                if game.play(action).is_ok() {
                    let child = self.nodes.len();
                    self.nodes.push(Node::child(game, id, action, prior));
                    self.nodes[id].children.push(child);
                }
            }
        }
    }

    /// Adds the simulation value and walks the parent chain back to the
    /// root, flipping the sign at every hop to switch perspective.
    pub(super) fn backpropagate(&mut self, id: NodeId, value: f32) {
        let mut value = value;
        let mut current = Some(id);
        while let Some(node) = current {
            self.nodes[node].value_sum += value;
            self.nodes[node].visits += 1;
            value = -value;
            current = self.nodes[node].parent;
        }
    }

    /// After many rollouts the visit counts become a better estimate for the
    /// policy. Actions that were never expanded stay at zero.
    fn improved_policy(&self) -> Policy {
        let mut probs = [0.0; NUM_ACTIONS];
        let total: u32 = self.nodes[ROOT]
            .children
            .iter()
            .map(|&child| self.nodes[child].visits)
            .sum();
        if total == 0 {
            return probs;
        }
        for &child in &self.nodes[ROOT].children {
            let node = &self.nodes[child];
            if let Some(action) = node.action {
                probs[action.index()] = node.visits as f32 / total as f32;
            }
        }
        probs
    }
}

/// Masks illegal columns and renormalizes. A policy which vanishes under
/// the mask falls back to uniform over the legal moves.
pub(crate) fn masked_policy(mut policy: Policy, game: &Game) -> Policy {
    let valid = game.valid_moves();
    for (prob, &legal) in policy.iter_mut().zip(valid.iter()) {
        if !legal {
            *prob = 0.0;
        }
    }
    let sum: f32 = policy.iter().sum();
    if sum > 0.0 {
        for prob in policy.iter_mut() {
            *prob /= sum;
        }
    } else {
        warn!("policy vanished after masking, using uniform over legal moves");
        let legal_count = valid.iter().filter(|&&legal| legal).count() as f32;
        for (prob, &legal) in policy.iter_mut().zip(valid.iter()) {
            *prob = if legal { 1.0 / legal_count } else { 0.0 };
        }
    }
    policy
}
