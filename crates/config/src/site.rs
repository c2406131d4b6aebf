/// Identity of the site, as written in the config file.
///
/// Every field defaults to empty so that a missing field surfaces as a
/// validation failure naming the field rather than a bare parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Site {
    pub url: String,
    pub repo: String,
    pub title: Title,
    pub subtitle: String,
    pub description: String,
    pub author: Author,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct Title {
    pub normal: String,
    /// May contain decorative separators, e.g. `Sym·poly·mathesy`.
    pub stylized: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct Author {
    pub name: String,
    pub email: String,
    /// In display order.
    pub links: Vec<String>,
}

impl Site {
    /// The record used when a config file doesn't provide a `site` section.
    pub fn builtin() -> Self {
        Self {
            url: "https://v5.chriskrycho.com/".into(),
            repo: "https://github.com/chriskrycho/v5.chriskrycho.com".into(),
            title: Title {
                normal: "Sympolymathesy".into(),
                stylized: "Sym·poly·mathesy".into(),
            },
            subtitle: "by Chris Krycho".into(),
            description: "Learning in public: on theology, technology, ethics, software, \
                          politics, art, and more."
                .into(),
            author: Author {
                name: "Chris Krycho".into(),
                email: "hello@chriskrycho.com".into(),
                links: [
                    "mailto:hello@chriskrycho.com",
                    "https://github.com/chriskrycho",
                    "https://patreon.com/chriskrycho",
                    "https://soundcloud.com/chriskrycho",
                    "https://vimeo.com/chriskrycho",
                    "https://cash.me/$chriskrycho",
                    "https://micro.blog/chriskrycho",
                    "https://twitter.com/chriskrycho",
                    "https://www.linkedin.com/in/chriskrycho",
                    "https://stackoverflow.com/users/564181/chris-krycho",
                ]
                .into_iter()
                .map(String::from)
                .collect(),
            },
        }
    }
}
