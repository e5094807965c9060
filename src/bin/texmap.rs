//! Command-line interface for texmap
//! This binary loads a map definitions file and queries tokens against it.
//!
//! Usage:
//!   texmap list `<definitions>`                 - List the maps in a definitions file
//!   texmap lookup `<definitions>` `<token>`...   - Resolve tokens against the maps

use clap::{Arg, ArgAction, Command};
use texmap::{MapLoader, MapSet};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("texmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting symbol map definitions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List the maps in a definitions file")
                .arg(
                    Arg::new("definitions")
                        .help("Path to the definitions file (YAML or JSON)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("lookup")
                .about("Resolve tokens against the maps, in definition order")
                .arg(
                    Arg::new("definitions")
                        .help("Path to the definitions file (YAML or JSON)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("tokens")
                        .help("Tokens to resolve")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append)
                        .index(2),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("list", list_matches)) => {
            let path = list_matches
                .get_one::<String>("definitions")
                .expect("definitions is required");
            handle_list_command(path);
        }
        Some(("lookup", lookup_matches)) => {
            let path = lookup_matches
                .get_one::<String>("definitions")
                .expect("definitions is required");
            let tokens: Vec<&String> = lookup_matches
                .get_many::<String>("tokens")
                .expect("tokens are required")
                .collect();
            handle_lookup_command(path, &tokens);
        }
        _ => unreachable!(),
    }
}

fn load_or_exit(path: &str) -> MapSet {
    MapLoader::from_path(path)
        .and_then(|loader| loader.load())
        .unwrap_or_else(|e| {
            eprintln!("Error loading {}: {}", path, e);
            std::process::exit(1);
        })
}

/// Handle the list command
fn handle_list_command(path: &str) {
    let set = load_or_exit(path);
    print!("{}", set.summary());
}

/// Handle the lookup command
fn handle_lookup_command(path: &str, tokens: &[&String]) {
    let set = load_or_exit(path);
    for token in tokens {
        match set.lookup(token) {
            Some(resolved) => {
                let json = serde_json::to_string(&resolved).unwrap_or_else(|e| {
                    eprintln!("Error formatting entry: {}", e);
                    std::process::exit(1);
                });
                println!("{}: {}", token, json);
            }
            None => println!("{}: unrecognized", token),
        }
    }
}
