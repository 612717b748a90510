//! Random policy for [`MinefieldEnv`](crate::MinefieldEnv).
use crate::{act::N_ACTS, MinefieldAct, MinefieldEnv, MinefieldObs};
use minefield_core::{Configurable, Policy};
use serde::{Deserialize, Serialize};

/// Configuration of [`RandomPolicy`].
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RandomPolicyConfig {
    /// Seed of the random number generator of the policy.
    pub seed: u64,
}

impl Default for RandomPolicyConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// A policy that samples actions uniformly, ignoring observations.
///
/// Carries its own random number generator so that every policy instance
/// can be seeded independently of the environment.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    /// Constructs a random policy with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Policy<MinefieldEnv> for RandomPolicy {
    fn sample(&mut self, _: &MinefieldObs) -> MinefieldAct {
        MinefieldAct::new(self.rng.i32(0..N_ACTS as i32))
    }
}

impl Configurable<MinefieldEnv> for RandomPolicy {
    type Config = RandomPolicyConfig;

    fn build(config: Self::Config) -> Self {
        Self::new(config.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomPolicy;
    use crate::act::N_ACTS;
    use minefield_core::{Obs as _, Policy as _};

    #[test]
    fn test_sampled_actions_are_valid() {
        let obs = crate::MinefieldObs::dummy(1);
        let mut policy = RandomPolicy::new(0);
        for _ in 0..100 {
            let act = policy.sample(&obs);
            assert!(0 <= act.act && act.act < N_ACTS as i32);
        }
    }
}
