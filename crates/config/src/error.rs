use std::path;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read config `{}`", .path.display())]
    Read {
        path: path::PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config `{}`", .path.display())]
    Parse {
        path: path::PathBuf,
        source: serde_yaml::Error,
    },
}
