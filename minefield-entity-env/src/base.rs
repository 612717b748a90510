//! The entity-structured environment interface.
use crate::spaces::{
    GlobalCategoricalAction, GlobalCategoricalActionMask, GlobalCategoricalActionSpace, ObsSpace,
};
use anyhow::Result;
use minefield_core::record::Record;
use ndarray::Array2;

/// Observation of an [`EntityEnv`].
///
/// Besides the per-group feature records, it carries the reward and done
/// flag of the transition that produced it, auxiliary metrics, and the
/// legality masks of the actions available in the new state.
#[derive(Debug)]
pub struct EntityObs {
    /// One array of feature records per entity group, rows being records.
    pub features: Vec<(String, Array2<f32>)>,

    /// Reward of the transition that produced this observation.
    pub reward: f32,

    /// Whether the episode ended with this observation.
    pub done: bool,

    /// Auxiliary information of the transition.
    pub metrics: Record,

    /// Legality masks, one per action.
    pub actions: Vec<(String, GlobalCategoricalActionMask)>,
}

/// An environment under the entity-structured convention.
pub trait EntityEnv {
    /// The observation schema of the environment.
    fn obs_space(&self) -> &ObsSpace;

    /// The actions of the environment, by name.
    fn action_space(&self) -> &[(String, GlobalCategoricalActionSpace)];

    /// Starts a new episode and returns its initial observation.
    fn reset(&mut self) -> Result<EntityObs>;

    /// Performs one step with the given choice per action.
    fn act(&mut self, actions: &[(String, GlobalCategoricalAction)]) -> Result<EntityObs>;
}
