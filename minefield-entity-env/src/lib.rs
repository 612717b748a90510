//! An entity-structured view of flat-observation environments.
//!
//! This crate defines the entity-structured interface convention
//! ([`EntityEnv`]): observations are named groups of same-typed records
//! with a declared feature list per group, actions are global categorical
//! choices, and every observation carries a legality mask per action.
//!
//! [`EntityEnvAdapter`] exposes any environment of the flat convention
//! ([`minefield_core::Env`]) under this interface, as long as its spaces
//! fit. Two translation concerns are involved:
//!
//! ## Spaces
//!
//! Translated once, at adapter construction. Every group of the wrapped
//! environment's dict observation space becomes an entity type whose
//! features are named after the positions of the group's vector
//! (`_0, _1, ...`). The discrete action space becomes a single global
//! categorical action with one unnamed choice per index. Any other space
//! shape is a configuration error, reported as [`AdapterError`] by
//! [`EntityEnvAdapter::wrap`] before any episode starts.
//!
//! ## Calls
//!
//! Translated on every interaction. `reset` delegates to the wrapped
//! environment and wraps the raw feature arrays as an [`EntityObs`] with
//! reward 0 and done false; `act` extracts the chosen index of the single
//! global action, delegates to the wrapped environment's `step`, and wraps
//! the resulting observation, reward and done flag the same way. The
//! legality mask is constant: every choice is always legal, the wrapped
//! environment itself rejects out-of-range indices.
mod adapter;
mod base;
mod error;
mod spaces;
pub use adapter::{EntityEnvAdapter, GLOBAL_ACTION_KEY};
pub use base::{EntityEnv, EntityObs};
pub use error::AdapterError;
pub use spaces::{
    Entity, GlobalCategoricalAction, GlobalCategoricalActionMask, GlobalCategoricalActionSpace,
    ObsSpace,
};
