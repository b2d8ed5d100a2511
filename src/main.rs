use clap::Parser;

use railsyaml::cli::{self, Cli, Commands};

fn main() {
    let args = Cli::parse();
    railsyaml::logging::init(args.verbose, args.quiet);

    let result = match &args.command {
        Commands::Get { key, string } => cli::commands::get::execute(&args, key, *string),
        Commands::Envs => cli::commands::envs::execute(&args),
        Commands::Show { json } => cli::commands::show::execute(&args, *json),
        Commands::Env => cli::commands::env::execute(&args),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
