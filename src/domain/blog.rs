//! Blog posts and authoring defaults

use crate::domain::record::{require, Draft, Record};
use crate::error::Result;
use chrono::{SecondsFormat, Utc};
use pulldown_cmark::{Event, Parser as MdParser, TagEnd};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Cover image used when a post is written without one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1540555700478-4be289fbecef?w=800";

/// Number of characters of body text kept in a generated excerpt.
pub const EXCERPT_LENGTH: usize = 150;

fn html_tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_url: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

impl BlogDraft {
    /// Apply authoring defaults for fields the writer left empty.
    pub fn prepare(mut self) -> Self {
        self.tags = self
            .tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        if self.excerpt.trim().is_empty() {
            self.excerpt = excerpt_from(&self.content);
        }
        if self.date.trim().is_empty() {
            self.date = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        }
        if self.image_url.trim().is_empty() {
            self.image_url = DEFAULT_IMAGE_URL.to_string();
        }
        self
    }

    /// Drop a generated excerpt when the body it summarised has changed.
    /// Excerpts written by hand are kept.
    pub fn refresh_derived(mut self, before: &BlogDraft) -> Self {
        let generated = before.excerpt == excerpt_from(&before.content);
        if generated && self.excerpt == before.excerpt && self.content != before.content {
            self.excerpt.clear();
        }
        self
    }
}

/// Plain-text excerpt of HTML or Markdown content, always ending in `...`.
pub fn excerpt_from(content: &str) -> String {
    let text = plain_text(content);
    let mut excerpt: String = text.chars().take(EXCERPT_LENGTH).collect();
    excerpt.push_str("...");
    excerpt
}

/// Strip HTML tags, then flatten the remaining Markdown to text.
pub fn plain_text(content: &str) -> String {
    let stripped = html_tag_regex().replace_all(content, "");
    let mut blocks: Vec<String> = Vec::new();
    let mut current = String::new();

    for event in MdParser::new(&stripped) {
        match event {
            Event::Text(text) | Event::Code(text) => current.push_str(&text),
            Event::SoftBreak | Event::HardBreak => current.push(' '),
            Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::Item) => {
                if !current.trim().is_empty() {
                    blocks.push(current.trim().to_string());
                }
                current.clear();
            }
            _ => {}
        }
    }
    if !current.trim().is_empty() {
        blocks.push(current.trim().to_string());
    }

    blocks.join(" ")
}

impl Draft for BlogDraft {
    fn name_field(&self) -> &str {
        &self.title
    }

    fn validate(&self) -> Result<()> {
        require(BlogPost::KIND, "title", &self.title)?;
        require(BlogPost::KIND, "content", &self.content)?;
        require(BlogPost::KIND, "author", &self.author)
    }
}

impl Record for BlogPost {
    type Draft = BlogDraft;

    const STORAGE_KEY: &'static str = "blog_posts";
    const KIND: &'static str = "blog post";

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn from_draft(id: String, slug: String, draft: BlogDraft) -> Self {
        BlogPost {
            id,
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            author: draft.author,
            date: draft.date,
            tags: draft.tags,
            image_url: draft.image_url,
            slug,
        }
    }

    fn to_draft(&self) -> BlogDraft {
        BlogDraft {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
            date: self.date.clone(),
            tags: self.tags.clone(),
            image_url: self.image_url.clone(),
        }
    }
}
