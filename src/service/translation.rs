use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::locales::{self, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ro,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ro => "ro",
        }
    }

    fn table(&self) -> &'static Table {
        match self {
            Locale::En => locales::english(),
            Locale::Ro => locales::romanian(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ro" => Ok(Locale::Ro),
            other => Err(format!("unsupported language {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Absent keys come back as the key itself.
    pub fn t(&self, key: &str) -> String {
        self.t_or(key, key)
    }

    pub fn t_or(&self, key: &str, default: &str) -> String {
        self.locale
            .table()
            .get(key)
            .copied()
            .unwrap_or(default)
            .to_string()
    }

    /// Replaces every `{name}` with its value; placeholders without a value
    /// are left as written.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        substitute(&self.t(key), params)
    }
}

/// Single pass over `template`; substituted values are never rescanned.
pub fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let value = tail.find('}').and_then(|close| {
            let name = &tail[1..close];
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
