// src/bin/legacy_symbol_cli.rs
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use legacy_quote_symbol::symbols::index_codes;
use legacy_quote_symbol::{build_reports, NormalizeReport, SymbolConfig, SymbolError};

#[derive(Parser)]
#[command(name = "legacy-symbol")]
#[command(about = "Normalize A-share identifiers for the legacy real-time quote endpoint", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize identifiers given on the command line
    Normalize {
        #[arg(required = true)]
        symbols: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Normalize the STOCK_LIST from the environment
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print the registered index codes
    Registry,
}

fn main() {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Normalize { symbols, json } => {
            handle_result(build_reports(&symbols), json);
        }
        Commands::List { json } => match SymbolConfig::from_env() {
            Ok(config) => handle_result(build_reports(&config.stock_list), json),
            Err(e) => {
                eprintln!("❌ Config error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Registry => {
            for code in index_codes() {
                println!("{}", code);
            }
        }
    }
}

fn handle_result(result: Result<Vec<NormalizeReport>, SymbolError>, json: bool) {
    match result {
        Ok(reports) if json => match serde_json::to_string_pretty(&reports) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("❌ Error: {}", e);
                std::process::exit(1);
            }
        },
        Ok(reports) => {
            for report in reports {
                println!("{}", report.token);
            }
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}
