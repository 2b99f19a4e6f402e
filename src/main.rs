use clap::Parser;

use huvudbok::cli::{self, project::ProjectArgs, Cli, Commands};
use huvudbok::logging;
use huvudbok::projection::Baseline;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Parse { file, limit } => cli::parse::run(&file, limit, verbose),
        Commands::Kpi { file, months } => cli::kpi::run(&file, months, verbose),
        Commands::Export { file, output } => cli::export::run(&file, output.as_deref()),
        Commands::Project {
            revenue,
            fixed_costs,
            variable_costs,
            cash,
            from_ledger,
            changes,
            months,
            start,
            json,
        } => cli::project::run(ProjectArgs {
            baseline: Baseline {
                revenue,
                fixed_costs,
                variable_costs,
                cash_balance: cash,
            },
            from_ledger,
            changes,
            months,
            start,
            json,
        }),
        Commands::Config { horizon, currency } => cli::config::run(horizon, currency),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
