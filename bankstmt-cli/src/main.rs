use anyhow::{bail, Context, Result};
use bankstmt_core::{BankType, ParseResult};
use bankstmt_report::{
    default_export_file_name, summary_headers, write_export, Converter, ExportFormat,
};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod state;

const DEFAULT_LOG_FILTER: &str =
    "bankstmt_cli=info,bankstmt_report=info,bankstmt_ingest=warn,bankstmt_core=warn";

#[derive(Parser, Debug)]
#[command(
    name = "bankstmt",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BANKSTMT_BUILD_SHA"), ")"),
    about = "Convert extracted bank statement text into a transaction ledger"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse statement text and write the ledger as CSV or JSON
    Convert {
        /// Statement text (pages joined in order); stdin when omitted or `-`
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Bank layout: SCB or KBANK (default from config)
        #[arg(short, long)]
        bank: Option<BankType>,

        /// Export format: csv or json (default from config)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Output file, `-` for stdout (default: bank_statement_detailed_<date>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse statement text and print the totals
    Summary {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long)]
        bank: Option<BankType>,

        /// Also list every transaction
        #[arg(long)]
        list: bool,
    },

    /// Configuration file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.bankstmt/config.toml with defaults
    Init,
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            input,
            bank,
            format,
            output,
        } => {
            let cfg = config::load_config()?;
            let bank = bank.unwrap_or(cfg.convert.bank);
            let format = format.unwrap_or(cfg.convert.format);
            let result = convert(&cfg, input.as_deref(), bank)?;

            let output = output.unwrap_or_else(|| {
                PathBuf::from(default_export_file_name(
                    chrono::Local::now().date_naive(),
                    format,
                ))
            });
            let writer = open_output(&output)?;
            write_export(writer, &result, format)
                .with_context(|| format!("write {}", output.display()))?;

            if output != Path::new("-") {
                info!(path = %output.display(), %format, "wrote ledger");
            }
            for (header, value) in summary_headers(&result) {
                eprintln!("{}: {}", header, value);
            }
        }

        Command::Summary { input, bank, list } => {
            let cfg = config::load_config()?;
            let bank = bank.unwrap_or(cfg.convert.bank);
            let result = convert(&cfg, input.as_deref(), bank)?;

            if list {
                for t in &result.transactions {
                    println!(
                        "{} {} | {:>14} | {:>14} | {} | {}",
                        t.date, t.time, t.debit_credit, t.balance, t.code, t.name
                    );
                }
                println!();
            }
            for (header, value) in summary_headers(&result) {
                println!("{}: {}", header, value);
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn convert(cfg: &config::Config, input: Option<&Path>, bank: BankType) -> Result<ParseResult> {
    let text = state::read_statement_text(input)?;
    if text.trim().is_empty() {
        bail!("statement text is empty (pass --input <file> or pipe text on stdin)");
    }

    let converter = Converter::new(cfg.convert_options());
    converter
        .convert(&text, bank)
        .with_context(|| format!("converting {} statement", bank))
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}
