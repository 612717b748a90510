//! A 2D navigation environment for reinforcement learning.
//!
//! A vehicle moves on a square arena holding a target and a set of mines.
//! At every step the agent turns the vehicle left or right by π/8 or moves
//! it forward by 3 units. Reaching the target (distance below 5) ends the
//! episode with reward 1; hitting a mine or exceeding the step limit ends
//! it with reward 0.
//!
//! [`MinefieldEnv`] implements [`minefield_core::Env`], the flat
//! observation convention of this workspace. The entity-structured view of
//! the same environment lives in the `minefield-entity-env` crate.
//!
//! Here is an example of running an episode with a random policy.
//!
//! ```
//! use anyhow::Result;
//! use minefield_core::{DefaultEvaluator, Evaluator as _};
//! use minefield_env::{MinefieldEnv, MinefieldEnvConfig, RandomPolicy};
//!
//! fn main() -> Result<()> {
//!     let env_config = MinefieldEnvConfig::default();
//!     let mut policy = RandomPolicy::new(42);
//!     let _ = DefaultEvaluator::<MinefieldEnv>::new(&env_config, 0, 5)?.evaluate(&mut policy)?;
//!     Ok(())
//! }
//! ```
mod act;
mod dynamics;
mod env;
mod episode;
mod error;
mod obs;
mod policy;
mod world;
pub use act::{MinefieldAct, N_ACTS};
pub use env::{MinefieldEnv, MinefieldEnvConfig, MinefieldInfo};
pub use error::MinefieldEnvError;
pub use obs::{MinefieldObs, MINES_KEY, TARGET_KEY, VEHICLE_KEY};
pub use policy::{RandomPolicy, RandomPolicyConfig};
pub use world::{Mine, Target, Vehicle, World};
