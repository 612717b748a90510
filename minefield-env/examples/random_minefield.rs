use anyhow::Result;
use minefield_core::{DefaultEvaluator, Evaluator as _};
use minefield_env::{MinefieldEnv, MinefieldEnvConfig, RandomPolicy};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Minefield environment configuration
    let env_config = MinefieldEnvConfig::default();

    // Creates a random policy
    let mut policy = RandomPolicy::new(42);

    // Runs evaluation
    let record = DefaultEvaluator::<MinefieldEnv>::new(&env_config, 0, 5)?.evaluate(&mut policy)?;
    println!(
        "Average return over 5 episodes: {}",
        record.get_scalar("Episode return")?
    );

    Ok(())
}
