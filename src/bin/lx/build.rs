use crate::args;
use crate::error::Result;

/// Validate the config and write every declared feed
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct BuildArgs {
    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl BuildArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        let context = lx::Context::from_config(config)?;

        log::info!(
            "Building {} feed(s) into {}",
            context.feeds.len(),
            context.destination.display()
        );
        lx::build(&context)?;
        log::info!("Build successful");

        Ok(())
    }
}

/// Validate the site config and feed declarations without writing anything
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        let site = lx::SiteConfig::from_config(config.site())?;
        let feeds = lx::Feeds::from_config(config.feeds.clone())?;

        log::info!(
            "{} ({}) declares {} feed(s)",
            site.title.stylized,
            site.url,
            feeds.len()
        );

        Ok(())
    }
}
