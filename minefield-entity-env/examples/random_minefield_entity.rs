use anyhow::Result;
use minefield_entity_env::{
    EntityEnv, EntityEnvAdapter, GlobalCategoricalAction, GLOBAL_ACTION_KEY,
};
use minefield_env::{MinefieldEnv, MinefieldEnvConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    // Wraps the minefield environment under the entity-structured
    // convention
    let env_config = MinefieldEnvConfig::default();
    let mut env = EntityEnvAdapter::<MinefieldEnv>::build(&env_config, 42)?;

    let n_choices = env.action_space()[0].1.choices.len();

    // Runs an episode with uniformly sampled choices
    let mut obs = env.reset()?;
    let mut return_ = 0.0;
    let mut steps = 0;
    while !obs.done {
        let actions = vec![(
            GLOBAL_ACTION_KEY.to_string(),
            GlobalCategoricalAction {
                index: fastrand::usize(..n_choices),
            },
        )];
        obs = env.act(&actions)?;
        return_ += obs.reward;
        steps += 1;
    }

    println!("Episode ended after {} steps with return {}", steps, return_);

    Ok(())
}
