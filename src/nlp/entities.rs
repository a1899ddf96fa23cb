//! Tweet entities: hashtags, mentions and links found in tweet text,
//! plus clean-up of the HTML anchor in a tweet's `source` field.

use crate::errors::Result;
use crate::nlp::tokenizer::TweetTokenizer;
use crate::table::TweetTable;
use crate::types::TokenShape;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Characters dropped from a cleaned `source` label
const SOURCE_STRIP_PATTERN: &str = r#"[.:;()/!&'*+@$,?^\-\d>"]"#;

/// Unique hashtags, mentions and URLs, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetEntities {
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub urls: Vec<String>,
}

impl TweetEntities {
    /// Collect entities from one tweet
    pub fn extract(text: &str, tokenizer: &TweetTokenizer) -> Self {
        let mut entities = Self::default();
        entities.absorb(text, tokenizer);
        entities
    }

    /// Collect unique entities across a column, skipping null and
    /// non-text cells
    pub fn from_table(table: &TweetTable, column: &str, tokenizer: &TweetTokenizer) -> Result<Self> {
        let mut entities = Self::default();
        for cell in table.column(column)? {
            match cell {
                Ok(Some(text)) => entities.absorb(text, tokenizer),
                Ok(None) => {}
                Err(err) => log::debug!("Skipping row while collecting entities: {err}"),
            }
        }
        Ok(entities)
    }

    /// Check if nothing was found
    pub fn is_empty(&self) -> bool {
        self.hashtags.is_empty() && self.mentions.is_empty() && self.urls.is_empty()
    }

    fn absorb(&mut self, text: &str, tokenizer: &TweetTokenizer) {
        for (token, shape) in tokenizer.tokenize_with_shapes(text) {
            let target = match shape {
                TokenShape::Hashtag => &mut self.hashtags,
                TokenShape::Mention => &mut self.mentions,
                TokenShape::Url => &mut self.urls,
                _ => continue,
            };
            if !target.contains(&token) {
                target.push(token);
            }
        }
    }
}

/// Cleans tweet `source` fields such as
/// `<a href="http://twitter.com/download/iphone" rel="nofollow">Twitter for iPhone</a>`
#[derive(Debug, Clone)]
pub struct SourceCleaner {
    strip: Regex,
}

impl Default for SourceCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceCleaner {
    pub fn new() -> Self {
        Self {
            strip: Regex::new(SOURCE_STRIP_PATTERN).expect("Invalid source strip regex"),
        }
    }

    /// Anchor text of the source link, stripped of punctuation and digits.
    /// `None` when the field holds no anchor.
    pub fn clean(&self, source: &str) -> Option<String> {
        let start = source.find("\">")?;
        let end = source[start..].find("</a")? + start;
        let label = self.strip.replace_all(&source[start..end], "");
        Some(label.trim().to_string())
    }
}

/// One-off [`SourceCleaner::clean`]
pub fn clean_source(source: &str) -> Option<String> {
    SourceCleaner::new().clean(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_entities() {
        let tokenizer = TweetTokenizer::new();
        let entities = TweetEntities::extract(
            "RT @anku5hdilraaj_: I guess #WWIII on its way for #Taiwan #WWIII https://t.co/oomVltBmKF",
            &tokenizer,
        );

        assert_eq!(entities.hashtags, vec!["#WWIII", "#Taiwan"]);
        assert_eq!(entities.mentions, vec!["@anku5hdilraaj_"]);
        assert_eq!(entities.urls, vec!["https://t.co/oomVltBmKF"]);
    }

    #[test]
    fn test_no_entities() {
        let entities = TweetEntities::extract("plain words only", &TweetTokenizer::new());
        assert!(entities.is_empty());
    }

    #[test]
    fn test_from_table_merges_uniques() {
        let table = TweetTable::from_json_str(
            r##"[
                {"full_text": "#Taiwan drills @pla"},
                {"full_text": null},
                {"full_text": 7},
                {"full_text": "more on #Taiwan and #China"}
            ]"##,
        )
        .unwrap();

        let entities = TweetEntities::from_table(&table, "full_text", &TweetTokenizer::new()).unwrap();
        assert_eq!(entities.hashtags, vec!["#Taiwan", "#China"]);
        assert_eq!(entities.mentions, vec!["@pla"]);
    }

    #[test]
    fn test_clean_source() {
        let cleaner = SourceCleaner::new();
        let source =
            r#"<a href="http://twitter.com/download/iphone" rel="nofollow">Twitter for iPhone</a>"#;
        assert_eq!(cleaner.clean(source), Some("Twitter for iPhone".to_string()));

        let source = r#"<a href="https://mobile.twitter.com" rel="nofollow">Twitter Web App 2.0</a>"#;
        assert_eq!(cleaner.clean(source), Some("Twitter Web App".to_string()));

        assert_eq!(cleaner.clean("no anchor here"), None);
        assert_eq!(clean_source(r#"<a href="x">Buffer</a>"#).as_deref(), Some("Buffer"));
    }
}
