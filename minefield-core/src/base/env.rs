//! Environment.
use super::{Act, Info, Obs, Step};
use crate::{record::Record, Space};
use anyhow::Result;

/// Represents an environment, typically an MDP.
///
/// This is the flat convention of the workspace: a raw observation, a
/// single action, a scalar reward and done flags per step. Environments
/// also report their [`Space`] descriptors, which wrappers use to
/// translate the environment into other interface conventions.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// The space of observations emitted by this environment.
    fn observation_space(&self) -> Space;

    /// The space of actions accepted by this environment.
    fn action_space(&self) -> Space;

    /// Performs an environment step.
    ///
    /// Fails if the action is not an element of the environment's action
    /// space. The environment state is left untouched in that case.
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized;

    /// Resets the environment if `is_done[0] == 1` or `is_done.is_none()`.
    ///
    /// Vectorized environments are not supported and `is_done.len()` is
    /// expected to be 1.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs>;

    /// Performs an environment step and resets the environment if the
    /// episode ends.
    fn step_with_reset(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let (step, record) = self.step(a)?;
        let step = if step.is_done() {
            let init_obs = self.reset(None)?;
            Step {
                act: step.act,
                obs: step.obs,
                reward: step.reward,
                is_terminated: step.is_terminated,
                is_truncated: step.is_truncated,
                info: step.info,
                init_obs,
            }
        } else {
            step
        };

        Ok((step, record))
    }

    /// Resets the environment with a given index.
    ///
    /// The index is used in an arbitrary way. For example, it can be used
    /// as a random seed, which is useful for evaluation runs that should
    /// visit a fixed set of initial states. This method is called in
    /// [`DefaultEvaluator`](crate::DefaultEvaluator).
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs>;
}
