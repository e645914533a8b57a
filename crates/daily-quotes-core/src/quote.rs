use serde::{Deserialize, Serialize};

/// A single quote as returned by the quote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl QuoteRecord {
    pub fn new(content: &str, author: &str, tags: &[&str]) -> Self {
        Self {
            content: content.to_string(),
            author: author.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Text handed to the share capability: `"<content>" - <author>`
    pub fn share_text(&self) -> String {
        format!("\"{}\" - {}", self.content, self.author)
    }
}

/// Topic filters offered in the tag bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Wisdom,
    Inspiration,
    Happiness,
    Success,
    Love,
    Life,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Wisdom => "wisdom",
            Tag::Inspiration => "inspiration",
            Tag::Happiness => "happiness",
            Tag::Success => "success",
            Tag::Love => "love",
            Tag::Life => "life",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wisdom" => Some(Tag::Wisdom),
            "inspiration" => Some(Tag::Inspiration),
            "happiness" => Some(Tag::Happiness),
            "success" => Some(Tag::Success),
            "love" => Some(Tag::Love),
            "life" => Some(Tag::Life),
            _ => None,
        }
    }

    /// The catalog in display order
    pub fn all() -> Vec<Tag> {
        vec![
            Tag::Wisdom,
            Tag::Inspiration,
            Tag::Happiness,
            Tag::Success,
            Tag::Love,
            Tag::Life,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tag::Wisdom => "Wisdom",
            Tag::Inspiration => "Inspiration",
            Tag::Happiness => "Happiness",
            Tag::Success => "Success",
            Tag::Love => "Love",
            Tag::Life => "Life",
        }
    }
}
