// SPDX-License-Identifier: MPL-2.0
//! Cookie storage as seen by page scripts.
//!
//! The jar is built from a `document.cookie`-style string
//! (`name=value; other=value`). Values are percent-decoded the way
//! `decodeURIComponent` does it, so `+` stays a literal plus.

/// Cookie carrying the anti-forgery token.
pub const CSRF_COOKIE: &str = "csrftoken";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    /// Raw `(name, value)` pairs in source order, values still encoded.
    cookies: Vec<(String, String)>,
}

impl CookieJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `document.cookie`-style string. Fragments without `=` are
    /// skipped.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let cookies = source
            .split(';')
            .map(str::trim)
            .filter_map(|pair| pair.split_once('='))
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self { cookies }
    }

    /// Returns the decoded value of the first cookie named exactly `name`.
    ///
    /// A value that is not valid percent-encoded UTF-8 is returned raw.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| match urlencoding::decode(value) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => value.clone(),
            })
    }

    /// Returns the anti-forgery token, if the session has one.
    #[must_use]
    pub fn csrf_token(&self) -> Option<String> {
        self.get(CSRF_COOKIE)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: &str) {
        let name = name.into();
        let encoded = urlencoding::encode(value).into_owned();
        match self.cookies.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = encoded,
            None => self.cookies.push((name, encoded)),
        }
    }

    /// Renders the jar as a `Cookie` request header value, or `None` when
    /// empty.
    #[must_use]
    pub fn header_value(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_csrf_token_among_other_cookies() {
        let jar = CookieJar::parse("sessionid=abc; csrftoken=tok123; theme=dark");
        assert_eq!(jar.csrf_token().as_deref(), Some("tok123"));
    }

    #[test]
    fn name_must_match_exactly() {
        let jar = CookieJar::parse("xcsrftoken=wrong; csrftoken2=also-wrong");
        assert_eq!(jar.csrf_token(), None);
    }

    #[test]
    fn values_are_percent_decoded_without_plus_to_space() {
        let jar = CookieJar::parse("csrftoken=a%20b+c%2Fd");
        assert_eq!(jar.csrf_token().as_deref(), Some("a b+c/d"));
    }

    #[test]
    fn empty_source_yields_empty_jar() {
        let jar = CookieJar::parse("");
        assert!(jar.is_empty());
        assert_eq!(jar.header_value(), None);
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let jar = CookieJar::parse("token=abc==");
        assert_eq!(jar.get("token").as_deref(), Some("abc=="));
    }

    #[test]
    fn header_value_round_trips_source_order() {
        let mut jar = CookieJar::parse("a=1;b=2");
        jar.insert("csrftoken", "x y");
        assert_eq!(jar.header_value().as_deref(), Some("a=1; b=2; csrftoken=x%20y"));
        assert_eq!(jar.csrf_token().as_deref(), Some("x y"));
    }
}
