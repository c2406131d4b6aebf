use crate::args;
use crate::error::Result;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints post-processed config
    Config {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints the declared feeds and where each is written
    Feeds {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                print!("{config}");
            }
            Self::Feeds { config } => {
                let config = config.load_config()?;
                let feeds = lx::Feeds::from_config(config.feeds.clone())?;
                for feed in &feeds {
                    println!("{feed}");
                }
            }
        }

        Ok(())
    }
}
