use anyhow::Result;
use clap::Parser;
use srcmirror::cli::{Cli, Commands};
use srcmirror::commands::{self, ConvertConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let overrides = cli.command.overrides();

    match cli.command {
        Commands::Convert {
            source,
            destination,
            config,
            format,
            allow_any_dir,
            verbosity,
            ..
        } => {
            init_logging(verbosity);
            let convert_config = ConvertConfig {
                source,
                destination,
                config_file: config,
                overrides: overrides.unwrap_or_default(),
                format,
                allow_any_dir,
            };
            let outcome = commands::handle_convert(convert_config)?;
            if outcome.has_failures() {
                std::process::exit(1);
            }
        }
        Commands::Init { force } => {
            init_logging(0);
            commands::init_config(force)?;
        }
    }

    Ok(())
}

/// `warn` by default, raised by each `-v`; `RUST_LOG` wins when set
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
