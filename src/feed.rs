use std::fmt;

use relative_path::{RelativePath, RelativePathBuf};

use crate::error::{PermalinkCollision, ValidationError};

/// One declared JSON Feed output.
///
/// Variants differ from the standard feed only in the fields set here; there
/// is no inheritance between them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FeedVariant {
    pub name: String,
    /// Embed a reply-via-email link in every entry.
    pub include_reply_via_email: bool,
    /// Output path, relative to the site root.
    pub permalink: String,
}

impl FeedVariant {
    pub fn standard() -> Self {
        Self::from_config(lx_config::Feed::standard()).expect("standard feed is valid")
    }

    pub fn without_reply() -> Self {
        Self::from_config(lx_config::Feed::without_reply()).expect("reply-less feed is valid")
    }

    pub fn from_config(config: lx_config::Feed) -> Result<Self, ValidationError> {
        let lx_config::Feed {
            name,
            permalink,
            include_reply_via_email,
        } = config;
        let field = || format!("feeds.{}.permalink", name.as_deref().unwrap_or("?"));

        let permalink = permalink.trim();
        if permalink.contains([':', '?', '#']) {
            return Err(ValidationError::new(
                field(),
                format!("`{permalink}` must be a path on the site, not a URL"),
            ));
        }
        if permalink.split('/').any(|segment| segment == "..") {
            return Err(ValidationError::new(
                field(),
                format!("`{permalink}` escapes the output directory"),
            ));
        }
        let path = RelativePath::new(permalink.trim_start_matches('/')).normalize();
        if path.as_str().is_empty() {
            return Err(ValidationError::new(field(), "must name an output file"));
        }
        let permalink = format!("/{path}");
        let name = name.unwrap_or_else(|| default_name(&permalink));

        Ok(Self {
            name,
            include_reply_via_email,
            permalink,
        })
    }

    /// The permalink as a path relative to the output root.
    pub fn rel_path(&self) -> &str {
        self.permalink.trim_start_matches('/')
    }

    /// The file this variant is written to, relative to the output root.
    pub fn output_path(&self) -> RelativePathBuf {
        RelativePath::new(self.rel_path()).normalize()
    }
}

impl fmt::Display for FeedVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.permalink)?;
        if !self.include_reply_via_email {
            write!(f, " (without reply)")?;
        }
        Ok(())
    }
}

/// `/feed-without-reply.json` -> `feed-without-reply`
fn default_name(permalink: &str) -> String {
    let file = permalink.rsplit('/').next().unwrap_or(permalink);
    let (stem, _ext) = file.rsplit_once('.').unwrap_or((file, ""));
    stem.to_owned()
}

/// Every feed declared for a build, with no two sharing an output path.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Feeds {
    variants: Vec<FeedVariant>,
}

impl Feeds {
    pub fn new(variants: Vec<FeedVariant>) -> Result<Self, PermalinkCollision> {
        let paths: Vec<_> = variants.iter().map(FeedVariant::output_path).collect();
        for (i, later) in variants.iter().enumerate() {
            if let Some(j) = paths[..i].iter().position(|p| *p == paths[i]) {
                let earlier = &variants[j];
                return Err(PermalinkCollision {
                    permalink: paths[i].to_string(),
                    first: earlier.name.clone(),
                    second: later.name.clone(),
                });
            }
        }
        Ok(Self { variants })
    }

    pub fn from_config(configs: Vec<lx_config::Feed>) -> crate::error::Result<Self> {
        let variants = configs
            .into_iter()
            .map(FeedVariant::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        let feeds = Self::new(variants)?;
        log::debug!("Declared feeds: {}", itertools::join(feeds.iter(), ", "));
        Ok(feeds)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedVariant> {
        self.variants.iter()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl Default for Feeds {
    fn default() -> Self {
        Self {
            variants: vec![FeedVariant::standard(), FeedVariant::without_reply()],
        }
    }
}

impl<'a> IntoIterator for &'a Feeds {
    type Item = &'a FeedVariant;
    type IntoIter = std::slice::Iter<'a, FeedVariant>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}
