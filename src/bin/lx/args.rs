use std::env;
use std::io::Write;
use std::path;

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _lx.yml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,

    /// Site destination folder [default: ./_site]
    #[arg(short, long, value_name = "DIR")]
    destination: Option<path::PathBuf>,

    /// Entries to publish, YAML or JSON
    #[arg(long, value_name = "FILE")]
    entries: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<lx_config::Config> {
        let config_path = self.config.as_deref();

        // Fetch config information if available
        let mut config = if let Some(config_path) = config_path {
            lx_config::Config::from_file(config_path)?
        } else {
            let cwd = env::current_dir().unwrap_or_else(|_| path::PathBuf::from("."));
            lx_config::Config::from_cwd(cwd)?
        };

        // Command-line paths are relative to the cwd, not the config file.
        if let Some(destination) = self.destination.as_deref() {
            config.destination = path::absolute(destination)?;
        }
        if let Some(entries) = self.entries.as_deref() {
            config.entries = Some(path::absolute(entries)?);
        }

        Ok(config)
    }
}

pub(crate) fn init_logging(
    level: &clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
    colored: bool,
) {
    if let Some(level) = level.log_level() {
        let mut builder = env_logger::Builder::new();
        builder.write_style(if colored {
            env_logger::WriteStyle::Always
        } else {
            env_logger::WriteStyle::Never
        });

        builder.filter(None, level.to_level_filter());

        if level == log::Level::Trace {
            builder.format_timestamp_secs();
        } else {
            builder.format(move |f, record| {
                let style = if colored {
                    level_style(record.level())
                } else {
                    anstyle::Style::new()
                };
                let level = record.level().to_string().to_lowercase();
                writeln!(
                    f,
                    "[{}{}{}] {}",
                    style.render(),
                    level,
                    style.render_reset(),
                    record.args()
                )
            });
        }

        builder.init();
    }
}

fn level_style(level: log::Level) -> anstyle::Style {
    let color = match level {
        log::Level::Error => anstyle::AnsiColor::Red,
        log::Level::Warn => anstyle::AnsiColor::Yellow,
        log::Level::Info => anstyle::AnsiColor::Green,
        log::Level::Debug => anstyle::AnsiColor::Blue,
        log::Level::Trace => anstyle::AnsiColor::Cyan,
    };
    anstyle::Style::new().fg_color(Some(color.into())).bold()
}
