use std::process::exit;

use anyhow::{bail, Result};
use dotenvy::dotenv;
use tracing::Level;

use library_contract::{
    client::LibraryClient,
    config::Config,
    contract::{Scenario, SCENARIOS},
    runner,
};

mod command_parser;
mod report;

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn select_scenarios(names: Option<Vec<String>>) -> Result<Vec<Scenario>> {
    let Some(names) = names else {
        return Ok(SCENARIOS.to_vec());
    };
    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        match Scenario::from_name(&name) {
            Some(scenario) => selected.push(scenario),
            None => bail!("Unknown scenario `{name}`, see `library-contract list`"),
        }
    }
    Ok(selected)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let matches = command_parser::arg_parser().get_matches();
    init_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("check", matches)) => {
            let mut config = Config::read_config()?;
            if let Some(base_url) = matches.get_one::<String>("base-url") {
                config.base_url = base_url.clone();
            }
            let scenarios = select_scenarios(
                matches
                    .get_many::<String>("scenario")
                    .map(|names| names.cloned().collect()),
            )?;
            let client = LibraryClient::from_config(&config)?;
            let report = runner::run(&client, config.run_tag(), &scenarios).await;
            if matches.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report::print_report(&report, &config.report);
            }
            if !report.is_success() {
                exit(1);
            }
        }
        Some(("list", _)) => report::print_scenarios(),
        Some(("config", _)) => println!("{}", Config::default_as_string()?),
        Some((name, _)) => unimplemented!("{}", name),
        None => unreachable!("subcommand required"),
    }
    Ok(())
}
