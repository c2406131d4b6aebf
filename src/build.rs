use std::path;

use anyhow::Context as _;

use crate::entry::{self, Entry};
use crate::error::Result;
use crate::feed::Feeds;
use crate::files;
use crate::json_feed;
use crate::site::SiteConfig;

/// Everything a build needs, validated up front so that no output is written
/// for a broken configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub site: SiteConfig,
    pub feeds: Feeds,
    pub entries: Vec<Entry>,
    pub destination: path::PathBuf,
}

impl Context {
    pub fn from_config(config: lx_config::Config) -> Result<Self> {
        let site = SiteConfig::from_config(config.site())?;
        let feeds = Feeds::from_config(config.feeds.clone())?;
        let entries = match &config.entries {
            Some(entries) => entry::load(&config.resolve(entries))?,
            None => {
                log::warn!("No `entries` configured; feeds will be empty");
                Vec::new()
            }
        };
        let destination = config.resolve(&config.destination);

        let context = Self {
            site,
            feeds,
            entries,
            destination,
        };
        context.check_links()?;
        Ok(context)
    }

    /// Every feed and entry permalink must resolve against the site URL.
    fn check_links(&self) -> Result<()> {
        for variant in &self.feeds {
            self.site
                .join(&variant.permalink)
                .with_context(|| format!("Invalid permalink for feed `{}`", variant.name))?;
        }
        for entry in &self.entries {
            self.site.join(&entry.permalink).with_context(|| {
                format!(
                    "Invalid permalink `{}` for `{}`",
                    entry.permalink, entry.title
                )
            })?;
        }
        Ok(())
    }
}

/// Write every declared feed to its permalink under the destination.
pub fn build(context: &Context) -> Result<()> {
    log::trace!("Build context: {context:?}");

    // Nothing is written until every feed has rendered.
    let documents = context
        .feeds
        .iter()
        .map(|variant| -> Result<_> {
            log::debug!("Rendering {variant}");
            let feed = json_feed::render(&context.site, variant, &context.entries)
                .with_context(|| format!("Failed to render feed `{}`", variant.name))?;
            let json = json_feed::to_string(&feed)?;
            let dest = variant.output_path().to_logical_path(&context.destination);
            Ok((variant, dest, json))
        })
        .collect::<Result<Vec<_>>>()?;

    for (variant, dest, json) in documents {
        files::write_document_file(json, &dest)?;
        log::info!("Created {} at {}", variant.name, dest.display());
    }

    Ok(())
}
