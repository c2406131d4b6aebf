use std::fmt;
use std::str::FromStr;

static EMAIL_RE: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"^([^@\s]+)@([^@\s]+)$").unwrap());

/// An address of the form `local@host`.
///
/// This only checks the shape of the address; it is not an RFC 5322 parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(into = "String")]
pub struct Email {
    address: String,
    at: usize,
}

impl Email {
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// The part before the `@`.
    pub fn local(&self) -> &str {
        &self.address[..self.at]
    }

    /// The part after the `@`.
    pub fn host(&self) -> &str {
        &self.address[self.at + 1..]
    }
}

impl FromStr for Email {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = EMAIL_RE
            .captures(s)
            .ok_or_else(|| format!("`{s}` is not an email address"))?;
        let local = captures.get(1).expect("unconditional capture");
        Ok(Self {
            address: s.to_owned(),
            at: local.end(),
        })
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.address
    }
}

impl PartialEq<str> for Email {
    fn eq(&self, other: &str) -> bool {
        self.address == other
    }
}

impl PartialEq<&str> for Email {
    fn eq(&self, other: &&str) -> bool {
        self.address == *other
    }
}
