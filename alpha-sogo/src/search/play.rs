use std::{error::Error, fmt::Display};

use rand::thread_rng;
use rand_distr::{Distribution, WeightedIndex};

use sogo::Action;

use crate::agent::Policy;

/// Stochastic selection needs a positive temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectError {
    NonPositiveTemperature,
}

impl Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "temperature must be greater than 0 for stochastic selection")
    }
}

impl Error for SelectError {}

/// Picks the move to play from a search policy.
///
/// With `play_best` the most probable action wins, earliest index first on
/// ties, and the temperature is ignored. Otherwise the distribution is
/// sharpened by `1 / temperature` and sampled.
pub fn select_move(
    policy: &Policy,
    temperature: f32,
    play_best: bool,
) -> Result<Action, SelectError> {
    if play_best {
        let mut best = 0;
        for (index, &prob) in policy.iter().enumerate() {
            if prob > policy[best] {
                best = index;
            }
        }
        return Ok(Action::new(best).expect("action indices cover the policy"));
    }

    if temperature <= 0.0 {
        return Err(SelectError::NonPositiveTemperature);
    }

    let weights: Vec<f32> = policy.iter().map(|p| p.powf(1.0 / temperature)).collect();
    let distr = WeightedIndex::new(&weights).expect("policy has positive weight");
    let index = distr.sample(&mut thread_rng());
    Ok(Action::new(index).expect("action indices cover the policy"))
}
