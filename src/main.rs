use clap::{Parser, Subcommand};
use curvelib::cli_commands;

#[derive(Parser)]
#[command(name = "curvelib", about = "Parse and query curve geometries")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a geometry and print its details
    Show {
        /// WKT string, or hex-encoded WKB with --wkb
        input: String,
        /// Treat the input as hex-encoded WKB
        #[arg(long)]
        wkb: bool,
    },
    /// Compute the total length of a curve geometry
    Length {
        input: String,
        #[arg(long)]
        wkb: bool,
    },
    /// Check whether every curve element of a geometry is closed
    IsClosed {
        input: String,
        #[arg(long)]
        wkb: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Show { input, wkb } => cli_commands::parse_show_detail(&input, wkb),
        Command::Length { input, wkb } => cli_commands::compute_length(&input, wkb),
        Command::IsClosed { input, wkb } => cli_commands::check_closed(&input, wkb),
    };

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
