use clap::Parser;
use scenario::config::ScenarioConfig;
use scenario::runner::Runner;
use std::path::PathBuf;

mod scenario;

#[derive(Parser)]
#[command(author, version, about = "Detector prototype factory walkthrough")]
struct Args {
    /// Load the scenario from YAML instead of the built-in walkthrough
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Do not print the archive text produced while cloning
    #[arg(long, default_value_t = false)]
    quiet_archive: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.scenario {
        ScenarioConfig::load(path)?
    } else {
        ScenarioConfig::default()
    };

    let result = Runner::new(config).execute()?;

    for detector in &result.created {
        println!("{}", detector);
    }

    for outcome in &result.clones {
        if !args.quiet_archive {
            println!("{}", outcome.archive);
        }
        println!("{}", outcome.source);
        println!("{}", outcome.clone);
    }

    Ok(())
}
