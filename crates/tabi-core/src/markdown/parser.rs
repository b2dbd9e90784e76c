//! Markdown prompt parsing.
//!
//! Lexes the document into [`Block`]s, picks the mode from the first heading
//! and hands the blocks to the mode-specific reader. Parsing never fails:
//! anything that does not fit the prompt grammar is skipped.

use tracing::debug;

use crate::plan::{Place, TripPlan};

use super::grammar::SUGGESTION_SENTINEL;
use super::lexer::{self, Block, Inline, ListItem};
use super::{standard, suggestion};

/// Parse a prompt back into a [`TripPlan`].
///
/// Returns `None` only for empty or whitespace-only input.
pub fn parse_markdown(markdown: &str) -> Option<TripPlan> {
    let markdown = markdown.trim();
    if markdown.is_empty() {
        return None;
    }

    let blocks = lexer::lex(markdown);
    let plan = if is_suggestion_document(&blocks) {
        debug!("suggestion-mode document");
        suggestion::read(&blocks)
    } else {
        debug!("standard-mode document");
        standard::read(&blocks)
    };
    Some(plan)
}

/// The first heading is the depth-1 suggestion sentinel.
fn is_suggestion_document(blocks: &[Block]) -> bool {
    blocks
        .iter()
        .find_map(|block| match block {
            Block::Heading { depth, inlines } => Some((*depth, inlines)),
            Block::List(_) => None,
        })
        .is_some_and(|(depth, inlines)| {
            depth == 1 && lexer::plain_text(inlines).trim() == SUGGESTION_SENTINEL
        })
}

// ---------------------------------------------------------------------------
// Bullet helpers shared by both modes
// ---------------------------------------------------------------------------

/// A `**key**：value` bullet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyValue<'a> {
    pub key: String,
    /// Value in Markdown source form, separator and padding removed.
    pub value: String,
    pub item: &'a ListItem,
}

impl<'a> KeyValue<'a> {
    /// Split an item at its first bold span. `None` when there is none.
    pub fn from_item(item: &'a ListItem) -> Option<Self> {
        let position = item
            .lead
            .iter()
            .position(|inline| matches!(inline, Inline::Strong(_)))?;
        let Inline::Strong(key) = &item.lead[position] else {
            return None;
        };
        let value = lexer::source_text(&item.lead[position + 1..]);
        Some(Self {
            key: lexer::plain_text(key).trim().to_owned(),
            value: strip_separator(&value).to_owned(),
            item,
        })
    }

    /// Text of each nested item, in order.
    pub fn sub_texts(&self) -> Vec<String> {
        self.item
            .sub_items()
            .iter()
            .map(|sub| lexer::source_text(&sub.lead).trim().to_owned())
            .collect()
    }

    /// Nested items read as places.
    pub fn sub_places(&self) -> Vec<Place> {
        self.item.sub_items().iter().map(place_from_item).collect()
    }
}

/// `：value` / `: value` → `value`.
fn strip_separator(value: &str) -> &str {
    let value = value.trim_start();
    value
        .strip_prefix(':')
        .or_else(|| value.strip_prefix('：'))
        .unwrap_or(value)
        .trim()
}

/// First link of the item, or its plain text as a place without URL.
fn place_from_item(item: &ListItem) -> Place {
    let link = item.lead.iter().find_map(|inline| match inline {
        Inline::Link { text, href } => Some(Place::new(text.trim(), href.trim())),
        _ => None,
    });
    link.unwrap_or_else(|| Place::new(lexer::plain_text(&item.lead).trim(), ""))
}

/// `北海道 (苫小牧市)` → `("北海道", "苫小牧市")`. Half- and full-width
/// parentheses are accepted. The city runs to the final closing parenthesis
/// when the value ends with one, so `北海道 (札幌市 (中央区))` keeps the inner
/// pair. A value without a usable parenthesised city is returned whole as the
/// area.
pub(crate) fn split_area(value: &str) -> (String, String) {
    let value = value.trim();
    let split = value
        .char_indices()
        .find(|&(i, c)| i > 0 && (c == '(' || c == '（'))
        .and_then(|(open, c)| {
            let rest = &value[open + c.len_utf8()..];
            let close = if rest.ends_with([')', '）']) {
                rest.char_indices().next_back()?.0
            } else {
                rest.find([')', '）'])?
            };
            let area = value[..open].trim();
            let city = rest[..close].trim();
            (!area.is_empty() && !city.is_empty()).then(|| (area.to_owned(), city.to_owned()))
        });
    split.unwrap_or_else(|| (value.to_owned(), String::new()))
}
