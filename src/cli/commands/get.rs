use crate::cli::Cli;
use crate::core::errors::Result;

/// Execute the `railsyaml get <key>` command.
///
/// Prints the resolved value on stdout: scalars bare, sequences and
/// mappings as JSON. With `--string` the value must be a string.
pub fn execute(cli: &Cli, key: &str, string: bool) -> Result<()> {
    let resolver = crate::cli::context::load_resolver(cli)?;

    if string {
        println!("{}", resolver.get_string(key)?);
    } else {
        println!("{}", resolver.get(key)?);
    }

    Ok(())
}
