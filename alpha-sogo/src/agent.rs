use sogo::{Game, NUM_ACTIONS};

pub type Policy = [f32; NUM_ACTIONS];
pub type Eval = f32;

/// The policy/value oracle consulted at every expanded leaf.
///
/// Implementations backed by a network typically feed
/// [`game_repr`](crate::repr::game_repr) forward and return the raw heads.
/// Priors may arrive unmasked and unnormalized; the search masks illegal
/// columns and renormalizes itself. The value is from the perspective of the
/// player to move, in `[-1, 1]`. The search only ever reads the agent, so a
/// `Sync` implementation can serve concurrent searches without further
/// coordination.
pub trait Agent {
    fn policy_and_eval(&self, game: &Game) -> (Policy, Eval);
}
