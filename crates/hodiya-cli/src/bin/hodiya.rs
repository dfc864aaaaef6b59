use clap::{Parser, Subcommand};

use hodiya_cli::commands::{config_ops, convert_ops, plan_ops};
use hodiya_core::translit::Direction;

#[derive(Parser)]
#[command(name = "hodiya", about = "Sinhala ⇄ Singlish transliteration tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate one string (direction is guessed when omitted)
    Convert {
        text: String,
        /// toRoman | toScript
        #[arg(long, short)]
        direction: Option<Direction>,
        /// Custom mapping TOML
        #[arg(long)]
        mapping: Option<String>,
    },
    /// Transliterate every line of a file, writing JSON Lines
    Batch {
        #[arg(long, short)]
        direction: Direction,
        #[arg(long)]
        mapping: Option<String>,
        input_file: String,
        output_file: String,
    },
    /// Dump the active mapping table
    Table {
        #[arg(long)]
        mapping: Option<String>,
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in mapping TOML
    MappingExport,
    /// Check a mapping TOML for errors and collisions
    MappingValidate { file: String },
    /// Show how a language pair is routed (and optionally run it offline)
    Plan {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        mapping: Option<String>,
    },
}

fn main() {
    hodiya_cli::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            text,
            direction,
            mapping,
        } => convert_ops::convert_cmd(&text, direction, mapping.as_deref()),
        Command::Batch {
            direction,
            mapping,
            input_file,
            output_file,
        } => convert_ops::batch_cmd(direction, mapping.as_deref(), &input_file, &output_file),
        Command::Table { mapping, json } => config_ops::table_cmd(mapping.as_deref(), json),
        Command::MappingExport => config_ops::mapping_export(),
        Command::MappingValidate { file } => config_ops::mapping_validate(&file),
        Command::Plan {
            from,
            to,
            text,
            mapping,
        } => plan_ops::plan_cmd(&from, &to, text.as_deref(), mapping.as_deref()),
    }
}
