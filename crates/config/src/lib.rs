mod config;
mod error;
mod feed;
mod site;

pub use self::config::*;
pub use self::error::*;
pub use self::feed::*;
pub use self::site::*;

type Result<T, E = Error> = std::result::Result<T, E>;
