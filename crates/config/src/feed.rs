/// One JSON Feed output, as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Feed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub permalink: String,
    #[serde(alias = "includeReplyViaEmail")]
    pub include_reply_via_email: bool,
}

impl Default for Feed {
    fn default() -> Self {
        Self {
            name: None,
            permalink: String::new(),
            include_reply_via_email: true,
        }
    }
}

impl Feed {
    pub fn standard() -> Self {
        Self {
            name: Some("feed".into()),
            permalink: "/feed.json".into(),
            include_reply_via_email: true,
        }
    }

    pub fn without_reply() -> Self {
        Self {
            name: Some("feed-without-reply".into()),
            permalink: "/feed-without-reply.json".into(),
            include_reply_via_email: false,
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![Self::standard(), Self::without_reply()]
    }
}
