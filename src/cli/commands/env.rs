use crate::cli::Cli;
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the `railsyaml env` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let resolver = crate::cli::context::load_resolver(cli)?;
    let env = resolver.current_environment();

    println!("{env}");

    if !resolver.has_environment(env) && !cli.quiet {
        output::warning(&format!(
            "No '{env}' block in the document; lookups use defaults only"
        ));
    }

    Ok(())
}
