pub use crate::build::Context;
pub use crate::build::build;
pub use crate::email::Email;
pub use crate::entry::Entry;
pub use crate::error::Error;
pub use crate::error::PermalinkCollision;
pub use crate::error::ValidationError;
pub use crate::error::ValidationErrors;
pub use crate::feed::FeedVariant;
pub use crate::feed::Feeds;
pub use crate::site::SiteConfig;
pub use crate::site::provider;

pub mod entry;
pub mod error;
pub mod feed;
pub mod json_feed;
pub mod site;

mod build;
mod email;
mod files;
