use itertools::Itertools;

use crate::email::Email;
use crate::error::{ValidationError, ValidationErrors};

/// Validated site identity, shared read-only by everything that renders
/// site metadata.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SiteConfig {
    /// Always ends with `/`.
    pub url: url::Url,
    pub repo: url::Url,
    pub title: Title,
    pub subtitle: String,
    pub description: String,
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Title {
    pub normal: String,
    pub stylized: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Author {
    pub name: String,
    pub email: Email,
    pub links: Vec<url::Url>,
}

static BUILTIN: once_cell::sync::Lazy<SiteConfig> = once_cell::sync::Lazy::new(|| {
    SiteConfig::from_config(lx_config::Site::builtin())
        .unwrap_or_else(|e| panic!("built-in site record is invalid: {e}"))
});

/// The built-in site record, constructed on first use.
pub fn provider() -> &'static SiteConfig {
    &BUILTIN
}

impl SiteConfig {
    pub fn from_config(config: lx_config::Site) -> Result<Self, ValidationErrors> {
        let lx_config::Site {
            url,
            repo,
            title,
            subtitle,
            description,
            author,
        } = config;

        let mut errors = ValidationErrors::new();

        let url = parse_absolute("url", &url, &mut errors);
        if let Some(url) = &url {
            if !url.path().ends_with('/') {
                errors.push(ValidationError::new("url", "must end with `/`"));
            }
        }
        let repo = parse_absolute("repo", &repo, &mut errors);

        let normal = required("title.normal", title.normal, &mut errors);
        let stylized = required("title.stylized", title.stylized, &mut errors);
        let subtitle = required("subtitle", subtitle, &mut errors);
        let description = required("description", description, &mut errors);

        let name = required("author.name", author.name, &mut errors);
        let email = if author.email.trim().is_empty() {
            errors.push(ValidationError::new("author.email", "must not be empty"));
            None
        } else {
            match author.email.parse::<Email>() {
                Ok(email) => Some(email),
                Err(e) => {
                    errors.push(ValidationError::new("author.email", e));
                    None
                }
            }
        };

        let links: Vec<url::Url> = author
            .links
            .iter()
            .enumerate()
            .filter_map(|(i, link)| match url::Url::parse(link) {
                Ok(link) => Some(link),
                Err(e) => {
                    errors.push(ValidationError::new(
                        format!("author.links[{i}]"),
                        format!("`{link}` is not a valid URI: {e}"),
                    ));
                    None
                }
            })
            .collect();
        for duplicate in links.iter().duplicates() {
            log::warn!("`author.links` lists `{duplicate}` more than once");
        }

        match (url, repo, email) {
            (Some(url), Some(repo), Some(email)) => {
                let site = errors.into_result(SiteConfig {
                    url,
                    repo,
                    title: Title { normal, stylized },
                    subtitle,
                    description,
                    author: Author { name, email, links },
                })?;
                log::trace!("Site config: {site:?}");
                Ok(site)
            }
            _ => Err(errors),
        }
    }

    /// Resolve `path` against the site root.
    pub fn join(&self, path: &str) -> Result<url::Url, url::ParseError> {
        self.url.join(path)
    }
}

fn required(field: &str, value: String, errors: &mut ValidationErrors) -> String {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, "must not be empty"));
    }
    value
}

fn parse_absolute(field: &str, value: &str, errors: &mut ValidationErrors) -> Option<url::Url> {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, "must not be empty"));
        return None;
    }
    match url::Url::parse(value) {
        Ok(url) if url.cannot_be_a_base() => {
            errors.push(ValidationError::new(
                field,
                format!("`{value}` is not an absolute URL"),
            ));
            None
        }
        Ok(url) => Some(url),
        Err(e) => {
            errors.push(ValidationError::new(
                field,
                format!("`{value}` is not a valid URL: {e}"),
            ));
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn site() -> lx_config::Site {
        lx_config::Site::builtin()
    }

    #[test]
    fn provider_exposes_literal_record() {
        let site = provider();
        assert_eq!(site.author.email, "hello@chriskrycho.com");
        assert_eq!(site.title.stylized, "Sym·poly·mathesy");
        assert_eq!(site.title.normal, "Sympolymathesy");
        assert_eq!(site.url.as_str(), "https://v5.chriskrycho.com/");
        assert_eq!(site.subtitle, "by Chris Krycho");
        assert_eq!(site.author.name, "Chris Krycho");
    }

    #[test]
    fn provider_is_constructed_once() {
        assert!(std::ptr::eq(provider(), provider()));
    }

    #[test]
    fn every_link_is_a_uri() {
        let schemes: Vec<_> = provider()
            .author
            .links
            .iter()
            .map(|l| l.scheme())
            .unique()
            .collect();
        assert_eq!(schemes, ["mailto", "https"]);
        assert_eq!(provider().author.links.len(), 10);
    }

    #[test]
    fn links_keep_display_order() {
        let links = &provider().author.links;
        assert_eq!(links[0].as_str(), "mailto:hello@chriskrycho.com");
        assert_eq!(links[1].as_str(), "https://github.com/chriskrycho");
    }

    #[test]
    fn rejects_empty_required_fields() {
        let mut config = site();
        config.title.stylized = String::new();
        config.description = "  ".into();
        config.author.name = String::new();
        let errors = SiteConfig::from_config(config).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, ["title.stylized", "description", "author.name"]);
    }

    #[test]
    fn missing_site_reports_every_field() {
        let errors = SiteConfig::from_config(lx_config::Site::default()).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            [
                "url",
                "repo",
                "title.normal",
                "title.stylized",
                "subtitle",
                "description",
                "author.name",
                "author.email",
            ]
        );
    }

    #[test]
    fn rejects_invalid_link() {
        let mut config = site();
        config.author.links.push("not a uri".into());
        let errors = SiteConfig::from_config(config).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, ["author.links[10]"]);
    }

    #[test]
    fn rejects_invalid_email() {
        let mut config = site();
        config.author.email = "hello.chriskrycho.com".into();
        let errors = SiteConfig::from_config(config).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, ["author.email"]);
    }

    #[test]
    fn rejects_url_without_trailing_slash() {
        let mut config = site();
        config.url = "https://v5.chriskrycho.com/blog".into();
        let errors = SiteConfig::from_config(config).unwrap_err();
        assert_eq!(errors.iter().next().unwrap().message, "must end with `/`");
    }

    #[test]
    fn rejects_relative_url() {
        let mut config = site();
        config.repo = "chriskrycho/v5.chriskrycho.com".into();
        let errors = SiteConfig::from_config(config).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, ["repo"]);
    }

    #[test]
    fn allows_duplicate_links() {
        let mut config = site();
        config.author.links.push("https://github.com/chriskrycho".into());
        let site = SiteConfig::from_config(config).unwrap();
        assert_eq!(site.author.links.len(), 11);
    }

    #[test]
    fn joins_against_site_root() {
        let url = provider().join("/feed-without-reply.json").unwrap();
        assert_eq!(
            url.as_str(),
            "https://v5.chriskrycho.com/feed-without-reply.json"
        );
    }
}
