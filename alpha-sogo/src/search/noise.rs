use log::debug;
use rand::thread_rng;
use rand_distr::{Dirichlet, Distribution};

use sogo::NUM_ACTIONS;

use super::mcts::{masked_policy, SearchTree, ROOT};
use crate::{agent::Policy, config::SearchConfig};

impl SearchTree {
    /// The root policy with Dirichlet exploration noise mixed in: the oracle
    /// priors are masked, blended with a noise sample, then masked again and
    /// renormalized (uniform over the legal moves when everything cancels).
    pub(super) fn noisy_root_policy(&self, policy: Policy, config: &SearchConfig) -> Policy {
        let game = &self.nodes[ROOT].game;
        let valid = game.valid_moves();
        let mut policy = policy;
        for (prob, &legal) in policy.iter_mut().zip(valid.iter()) {
            if !legal {
                *prob = 0.0;
            }
        }

        debug!(
            "mixing dirichlet noise into the root policy (alpha {}, epsilon {})",
            config.dirichlet_alpha, config.dirichlet_epsilon
        );
        let dirichlet = Dirichlet::new(&vec![config.dirichlet_alpha; NUM_ACTIONS]).unwrap();
        let noise = dirichlet.sample(&mut thread_rng());
        for (prob, noise) in policy.iter_mut().zip(noise) {
            *prob = (1.0 - config.dirichlet_epsilon) * *prob + config.dirichlet_epsilon * noise;
        }

        masked_policy(policy, game)
    }
}
