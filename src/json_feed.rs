//! Serialization of a [`FeedVariant`] into a [JSON Feed](https://jsonfeed.org) document.

use anyhow::Context as _;
use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::entry::Entry;
use crate::error::Result;
use crate::feed::FeedVariant;
use crate::site::SiteConfig;

/// Characters that would break out of a `mailto:` address inside an `href`.
const MAILTO_ADDRESS: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'?')
    .add(b'#');

/// Build the feed document for one variant.
pub fn render(
    site: &SiteConfig,
    variant: &FeedVariant,
    entries: &[Entry],
) -> Result<jsonfeed::Feed> {
    let feed_url = site
        .join(&variant.permalink)
        .with_context(|| format!("Invalid permalink `{}`", variant.permalink))?;

    let items = entries
        .iter()
        .map(|entry| to_item(site, variant, entry))
        .collect::<Result<Vec<_>>>()?;

    let feed = jsonfeed::Feed {
        title: site.title.normal.clone(),
        home_page_url: Some(site.url.to_string()),
        feed_url: Some(feed_url.to_string()),
        description: Some(site.description.clone()),
        author: Some(
            jsonfeed::Author::new()
                .name(site.author.name.as_str())
                .url(site.url.as_str()),
        ),
        items,
        ..Default::default()
    };
    Ok(feed)
}

fn to_item(site: &SiteConfig, variant: &FeedVariant, entry: &Entry) -> Result<jsonfeed::Item> {
    let link = site
        .join(&entry.permalink)
        .with_context(|| {
            format!(
                "Invalid permalink `{}` for `{}`",
                entry.permalink, entry.title
            )
        })?
        .to_string();

    let mut content = entry.content.clone();
    if variant.include_reply_via_email {
        content.push_str(&reply_via_email(site, entry));
    }

    let item = jsonfeed::Item {
        id: link.clone(),
        url: Some(link),
        external_url: entry.external_url.clone(),
        title: Some(entry.title.clone()),
        content: jsonfeed::Content::Html(content),
        summary: entry.summary.clone(),
        date_published: entry.date.map(|date| date.to_rfc3339()),
        date_modified: entry.updated.map(|date| date.to_rfc3339()),
        tags: if entry.tags.is_empty() {
            None
        } else {
            Some(entry.tags.clone())
        },
        ..Default::default()
    };
    Ok(item)
}

/// The `mailto:` link appended to an entry's HTML.
pub fn reply_via_email(site: &SiteConfig, entry: &Entry) -> String {
    let address = utf8_percent_encode(site.author.email.as_str(), MAILTO_ADDRESS);
    let subject = utf8_percent_encode(&entry.title, NON_ALPHANUMERIC);
    format!(r#"<hr/><p><a href="mailto:{address}?subject={subject}">Reply via email</a></p>"#)
}

pub fn to_string(feed: &jsonfeed::Feed) -> Result<String> {
    let json = serde_json::to_string_pretty(feed)?;
    Ok(json)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::site::provider;

    fn sample() -> Entry {
        let mut entry = Entry::new("Reply Paths", "/journal/reply-paths/");
        entry.date =
            Some(chrono::DateTime::parse_from_rfc3339("2020-06-02T09:30:00-06:00").unwrap());
        entry.summary = Some("Letting readers answer by email.".into());
        entry.content = "<p>Write back!</p>".into();
        entry.tags = vec!["feeds".into()];
        entry
    }

    fn render_json(variant: &FeedVariant, entries: &[Entry]) -> serde_json::Value {
        let feed = render(provider(), variant, entries).unwrap();
        serde_json::from_str(&to_string(&feed).unwrap()).unwrap()
    }

    #[test]
    fn reply_link_is_a_mailto() {
        let link = reply_via_email(provider(), &sample());
        assert_eq!(
            link,
            r#"<hr/><p><a href="mailto:hello@chriskrycho.com?subject=Reply%20Paths">Reply via email</a></p>"#
        );
    }

    #[test]
    fn standard_feed_includes_reply_link() {
        let json = render_json(&FeedVariant::standard(), &[sample()]);
        let html = json["items"][0]["content_html"].as_str().unwrap();
        assert!(html.starts_with("<p>Write back!</p>"));
        assert!(html.contains("mailto:hello@chriskrycho.com?subject=Reply%20Paths"));
    }

    #[test]
    fn without_reply_omits_link_and_matches_otherwise() {
        let entries = [sample()];
        let mut standard = render_json(&FeedVariant::standard(), &entries);
        let mut without = render_json(&FeedVariant::without_reply(), &entries);

        let standard_item = standard["items"][0].as_object_mut().unwrap();
        let without_item = without["items"][0].as_object_mut().unwrap();

        let standard_html = standard_item.remove("content_html").unwrap();
        let without_html = without_item.remove("content_html").unwrap();
        assert_eq!(without_html, "<p>Write back!</p>");
        assert!(!without_html.as_str().unwrap().contains("mailto:"));
        assert_eq!(
            standard_html.as_str().unwrap(),
            format!("<p>Write back!</p>{}", reply_via_email(provider(), &entries[0]))
        );

        assert_eq!(standard_item, without_item);
    }

    #[test]
    fn feed_metadata_comes_from_site() {
        let json = render_json(&FeedVariant::without_reply(), &[]);
        assert_eq!(json["title"], "Sympolymathesy");
        assert_eq!(json["home_page_url"], "https://v5.chriskrycho.com/");
        assert_eq!(
            json["feed_url"],
            "https://v5.chriskrycho.com/feed-without-reply.json"
        );
        assert_eq!(json["author"]["name"], "Chris Krycho");
        assert_eq!(json["items"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn item_fields() {
        let json = render_json(&FeedVariant::standard(), &[sample()]);
        let item = &json["items"][0];
        assert_eq!(item["id"], "https://v5.chriskrycho.com/journal/reply-paths/");
        assert_eq!(item["url"], item["id"]);
        assert_eq!(item["title"], "Reply Paths");
        assert_eq!(item["summary"], "Letting readers answer by email.");
        assert_eq!(item["date_published"], "2020-06-02T09:30:00-06:00");
        assert_eq!(item["tags"][0], "feeds");
    }

    #[test]
    fn subject_is_percent_encoded() {
        let entry = Entry::new("Q&A: \"why?\"", "/qa/");
        let link = reply_via_email(provider(), &entry);
        assert!(link.contains("subject=Q%26A%3A%20%22why%3F%22\""));
    }
}
