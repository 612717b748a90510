//! Adapter exposing a flat-convention environment as an [`EntityEnv`].
use crate::{
    base::{EntityEnv, EntityObs},
    error::AdapterError,
    spaces::{
        Entity, GlobalCategoricalAction, GlobalCategoricalActionMask,
        GlobalCategoricalActionSpace, ObsSpace,
    },
};
use anyhow::Result;
use log::trace;
use minefield_core::{record::Record, Env, Space};
use ndarray::Array2;

/// Name of the single global action exposed by the adapter.
pub const GLOBAL_ACTION_KEY: &str = "action";

/// Exposes an [`Env`] under the entity-structured convention.
///
/// The adapter owns the wrapped environment and delegates every call to
/// it; it holds no episode state of its own. Space translation happens
/// once, in [`EntityEnvAdapter::wrap`]; an environment whose spaces do not
/// fit the convention is rejected there with an [`AdapterError`].
pub struct EntityEnvAdapter<E: Env> {
    env: E,

    obs_space: ObsSpace,

    action_space: Vec<(String, GlobalCategoricalActionSpace)>,
}

/// Translates a dict-of-vectors observation space into entity types with
/// positional feature names.
fn entity_obs_space(space: &Space) -> Result<ObsSpace, AdapterError> {
    let spaces = match space {
        Space::Dict { spaces } => spaces,
        space => return Err(AdapterError::UnsupportedObsSpace(format!("{:?}", space))),
    };

    let mut entities = Vec::with_capacity(spaces.len());
    for (name, space) in spaces {
        match space {
            Space::Box { shape } if shape.len() == 1 => {
                let features = (0..shape[0]).map(|i| format!("_{}", i)).collect();
                entities.push((name.clone(), Entity { features }));
            }
            space => return Err(AdapterError::UnsupportedObsSpace(format!("{:?}", space))),
        }
    }

    Ok(ObsSpace { entities })
}

/// Translates a discrete action space into a global categorical action
/// with unnamed choices.
fn global_action_space(space: &Space) -> Result<GlobalCategoricalActionSpace, AdapterError> {
    match space {
        Space::Discrete { n } => {
            let choices = (0..*n).map(|i| format!("_{}", i)).collect();
            Ok(GlobalCategoricalActionSpace { choices })
        }
        space => Err(AdapterError::UnsupportedActionSpace(format!("{:?}", space))),
    }
}

impl<E> EntityEnvAdapter<E>
where
    E: Env,
    E::Obs: Into<Vec<(String, Array2<f32>)>>,
    E::Act: From<usize>,
{
    /// Wraps an environment, translating its space descriptors.
    ///
    /// Fails if the observation space is not a dict of fixed-length 1D
    /// vector groups or the action space is not a single discrete space.
    /// This is a configuration error, never a runtime one.
    pub fn wrap(env: E) -> Result<Self, AdapterError> {
        let obs_space = entity_obs_space(&env.observation_space())?;
        let action_space = vec![(
            GLOBAL_ACTION_KEY.to_string(),
            global_action_space(&env.action_space())?,
        )];

        Ok(Self {
            env,
            obs_space,
            action_space,
        })
    }

    /// Builds the wrapped environment from its configuration, then wraps
    /// it.
    pub fn build(config: &E::Config, seed: i64) -> Result<Self> {
        let env = E::build(config, seed)?;
        Ok(Self::wrap(env)?)
    }

    /// The constant all-legal mask reported with every observation.
    ///
    /// The wrapped environment performs its own validity check and fails
    /// on out-of-range choices.
    fn action_masks(&self) -> Vec<(String, GlobalCategoricalActionMask)> {
        vec![(
            GLOBAL_ACTION_KEY.to_string(),
            GlobalCategoricalActionMask::default(),
        )]
    }
}

impl<E> EntityEnv for EntityEnvAdapter<E>
where
    E: Env,
    E::Obs: Into<Vec<(String, Array2<f32>)>>,
    E::Act: From<usize>,
{
    fn obs_space(&self) -> &ObsSpace {
        &self.obs_space
    }

    fn action_space(&self) -> &[(String, GlobalCategoricalActionSpace)] {
        &self.action_space
    }

    fn reset(&mut self) -> Result<EntityObs> {
        trace!("EntityEnvAdapter::reset()");

        let obs = self.env.reset(None)?;
        Ok(EntityObs {
            features: obs.into(),
            reward: 0.0,
            done: false,
            metrics: Record::empty(),
            actions: self.action_masks(),
        })
    }

    fn act(&mut self, actions: &[(String, GlobalCategoricalAction)]) -> Result<EntityObs> {
        trace!("EntityEnvAdapter::act()");

        let index = actions
            .iter()
            .find(|(name, _)| name == GLOBAL_ACTION_KEY)
            .map(|(_, a)| a.index)
            .ok_or_else(|| AdapterError::MissingAction(GLOBAL_ACTION_KEY.to_string()))?;
        let (step, record) = self.env.step(&E::Act::from(index))?;

        let done = step.is_done();
        let reward = step.reward[0];
        Ok(EntityObs {
            features: step.obs.into(),
            reward,
            done,
            metrics: record,
            actions: self.action_masks(),
        })
    }
}
