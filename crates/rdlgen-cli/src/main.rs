//! rdlgen CLI - Java source generator for RDL schemas
//!
//! Commands:
//! - `rdlgen java` - Generate Java model classes and error artifacts
//! - `rdlgen types` - Show a struct's flattened fields and their Java types
//! - `rdlgen check` - Resolve every type and field of a schema

use clap::{Parser, Subcommand};
use rdlgen_cli::config::Config;
use rdlgen_cli::generate::{self, JavaOptions};
use rdlgen_cli::logging::{LogLevel, init_logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rdlgen")]
#[command(author, version, about = "Java source generator for RDL schemas", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to rdlgen.toml (default: ./rdlgen.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java model classes and error artifacts
    Java {
        /// Path to the RDL schema (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Output directory, or '-' for stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Java namespace (default: schema namespace)
        #[arg(short, long)]
        namespace: Option<String>,

        /// Skip ResourceError, ResourceException and the error body classes
        #[arg(long)]
        no_artifacts: bool,
    },

    /// Show a struct's flattened fields and their Java types
    Types {
        /// Path to the RDL schema (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Struct name
        #[arg(short = 't', long = "type")]
        type_name: String,
    },

    /// Resolve every type and field of a schema
    Check {
        /// Path to the RDL schema (JSON)
        #[arg(short, long)]
        schema: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level()?
    };
    init_logging(level);

    match cli.command {
        Commands::Java {
            schema,
            output,
            namespace,
            no_artifacts,
        } => {
            let opts = JavaOptions {
                schema,
                output,
                namespace,
                no_artifacts,
            };
            let report = generate::run_java(&opts, &config)?;
            if !report.files.is_empty() {
                eprintln!(
                    "✓ Generated {} sources in package {}",
                    report.sources, report.package
                );
            }
        }
        Commands::Types { schema, type_name } => {
            print!("{}", generate::run_types(&schema, &type_name)?);
        }
        Commands::Check { schema } => {
            println!("Checking schema: {}", schema.display());
            let report = generate::run_check(&schema, &config)?;
            println!("{report}");
            println!("\nAll types resolve.");
        }
    }

    Ok(())
}
