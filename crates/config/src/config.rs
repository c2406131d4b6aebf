use std::fmt;
use std::path;

use super::*;

pub const CONFIG_FILE_NAME: &str = "_lx.yml";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(skip)]
    pub root: path::PathBuf,
    /// Falls back to [`Site::builtin`] when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    pub destination: path::PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<path::PathBuf>,
    pub feeds: Vec<Feed>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            root: Default::default(),
            site: None,
            destination: "./_site".into(),
            entries: None,
            feeds: Feed::defaults(),
        }
    }
}

impl Config {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;

        let mut config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|source| Error::Parse {
                path: path.clone(),
                source,
            })?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, CONFIG_FILE_NAME);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!(
                    "No {CONFIG_FILE_NAME} file found in current directory, using default config."
                );
                let config = Config {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    /// The configured site, or the built-in record when none was given.
    pub fn site(&self) -> Site {
        self.site.clone().unwrap_or_else(Site::builtin)
    }

    /// Paths in the config are relative to the directory holding it.
    pub fn resolve(&self, relative: &path::Path) -> path::PathBuf {
        self.root.join(relative)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
