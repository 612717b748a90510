//! Minefield environment.
mod config;
use crate::{
    act::N_ACTS,
    dynamics, episode,
    obs::{MINES_KEY, TARGET_KEY, VEHICLE_KEY},
    world::World,
    MinefieldAct, MinefieldObs,
};
use anyhow::Result;
use log::trace;
pub use config::MinefieldEnvConfig;
use minefield_core::{record::Record, Env, Info, Obs, Space, Step};
use rand::{rngs::StdRng, SeedableRng};

/// Information given at every step of the interaction with the environment.
///
/// Currently, it is empty and used to match the type signature.
pub struct MinefieldInfo {}

impl Info for MinefieldInfo {}

/// The minefield navigation environment.
///
/// Owns the mutable [`World`] of the current episode; a fresh world is
/// generated on every reset and discarded on the next one. A single
/// instance is a single-owner state machine and must not be shared between
/// concurrent callers; a harness wanting parallelism builds one
/// environment per worker, each with its own seed.
pub struct MinefieldEnv {
    config: MinefieldEnvConfig,

    world: World,

    rng: StdRng,
}

impl Env for MinefieldEnv {
    type Config = MinefieldEnvConfig;
    type Obs = MinefieldObs;
    type Act = MinefieldAct;
    type Info = MinefieldInfo;

    /// Constructs [`MinefieldEnv`].
    ///
    /// * `seed` - The seed value of the random number generator.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized,
    {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let world = World::generate(&mut rng, config.max_mines, config.width);

        Ok(Self {
            config: config.clone(),
            world,
            rng,
        })
    }

    fn observation_space(&self) -> Space {
        Space::dict(vec![
            (VEHICLE_KEY.to_string(), Space::vector(4)),
            (TARGET_KEY.to_string(), Space::vector(2)),
            (MINES_KEY.to_string(), Space::vector(2)),
        ])
    }

    fn action_space(&self) -> Space {
        Space::discrete(N_ACTS)
    }

    /// Resets the environment and returns an observation.
    ///
    /// In this environment, the length of `is_done` is assumed to be 1.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<MinefieldObs> {
        trace!("MinefieldEnv::reset()");

        let reset = match is_done {
            None => true,
            Some(v) => {
                debug_assert_eq!(v.len(), 1);
                v[0] != 0
            }
        };

        if !reset {
            return Ok(MinefieldObs::dummy(1));
        }

        self.world = World::generate(&mut self.rng, self.config.max_mines, self.config.width);
        Ok(MinefieldObs::from(&self.world))
    }

    /// Resets the environment with the given index as a random seed.
    fn reset_with_index(&mut self, ix: usize) -> Result<MinefieldObs> {
        self.rng = StdRng::seed_from_u64(ix as u64);
        self.reset(None)
    }

    /// Runs a step of the environment's dynamics.
    ///
    /// Fails with [`MinefieldEnvError`](crate::MinefieldEnvError) if the
    /// action index is out of range; the world and the step counter keep
    /// their values in that case.
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        trace!("MinefieldEnv::step()");

        dynamics::apply(&mut self.world.vehicle, a)?;
        self.world.step += 1;
        self.world.vehicle.step = self.world.step;

        let outcome = episode::evaluate(&self.world, self.config.max_steps);
        let obs = MinefieldObs::from(&self.world);
        let step = Step::new(
            obs,
            a.clone(),
            vec![outcome.reward],
            vec![outcome.is_terminated],
            vec![outcome.is_truncated],
            MinefieldInfo {},
            MinefieldObs::dummy(1),
        );

        Ok((step, Record::empty()))
    }
}
