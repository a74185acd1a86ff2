use clap::{Parser, Subcommand};
use openadas_repo::config::Config;
use openadas_repo::utils::{logger, report};
use openadas_repo::{encode_transition, lookup_species, valid_charge, RateKind, Repository};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "openadas-repo", version, about = "Inspect the local OpenADAS rate repository")]
struct Args {
    /// Repository root (overrides $OPENADAS_REPOSITORY and the config file)
    #[arg(short, long, global = true)]
    repository: Option<PathBuf>,

    /// More log output; repeat for debug/trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List species and charge states for a rate type
    List {
        /// ionisation, recombination, continuum, cx or line
        kind: RateKind,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the repository key for a transition
    Encode { upper: String, lower: String },
    /// Check whether a species can be ionised to a charge
    CheckCharge { species: String, charge: u32 },
    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    SetPath { path: PathBuf },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (mut config, config_msg) = Config::load();
    let level = match args.verbose {
        0 => config.log_level.to_filter(),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = logger::init(level);
    if config_msg.starts_with("Error") {
        log::warn!("{}", config_msg);
    } else {
        log::info!("{}", config_msg);
    }

    match args.command {
        Command::List { kind, json } => {
            let repo = Repository::new(config.repository_path(args.repository.as_deref()));
            match repo.available(kind) {
                Ok(rates) if json => match serde_json::to_string_pretty(&rates) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        log::error!("Failed to serialise rates: {}", e);
                        return ExitCode::FAILURE;
                    }
                },
                Ok(rates) => print!("{}", report::rates_summary(kind, repo.root(), &rates)),
                Err(e) => {
                    log::error!("{}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        Command::Encode { upper, lower } => println!("{}", encode_transition((upper, lower))),
        Command::CheckCharge { species, charge } => match lookup_species(&species) {
            Ok(sp) => {
                let ok = valid_charge(&sp, charge);
                println!(
                    "{}: charge {} is {} (Z = {})",
                    sp,
                    charge,
                    if ok { "valid" } else { "invalid" },
                    sp.atomic_number()
                );
                if !ok {
                    return ExitCode::FAILURE;
                }
            }
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        Command::Config { action } => match action {
            ConfigAction::Show => {
                println!("Config file: {}", Config::get_path().display());
                println!(
                    "Repository:  {}",
                    config.repository_path(args.repository.as_deref()).display()
                );
                println!("Log level:   {:?}", config.log_level);
            }
            ConfigAction::SetPath { path } => {
                config.repository_path = Some(path);
                match config.save() {
                    Ok(p) => log::info!("Config saved to {:?}", p),
                    Err(e) => {
                        log::error!("Failed to save config: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }
        },
    }

    ExitCode::SUCCESS
}
