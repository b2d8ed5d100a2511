use crate::cli::Cli;
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the `railsyaml show` command.
///
/// Prints the effective settings for the current environment, sorted
/// by key: defaults overlaid by the environment block.
pub fn execute(cli: &Cli, json: bool) -> Result<()> {
    let resolver = crate::cli::context::load_resolver(cli)?;
    let resolved = resolver.resolved();

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    if !cli.quiet {
        output::header(&format!("Environment: {}", resolver.current_environment()));
    }

    for (key, value) in &resolved {
        output::entry(key, value);
    }

    if !cli.quiet {
        output::success(&format!("{} key(s) resolved", resolved.len()));
    }

    Ok(())
}
