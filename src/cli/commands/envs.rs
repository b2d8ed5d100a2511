use crate::cli::Cli;
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the `railsyaml envs` command.
///
/// Lists every environment block, marking the current one.
pub fn execute(cli: &Cli) -> Result<()> {
    let resolver = crate::cli::context::load_resolver(cli)?;
    let current = resolver.current_environment();
    let envs = resolver.environments();

    if envs.is_empty() {
        output::warning("No environment blocks found");
        return Ok(());
    }

    for env in envs {
        output::environment(env, env == current);
    }

    Ok(())
}
