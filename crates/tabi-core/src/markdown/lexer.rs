//! Block/inline tree built from `pulldown-cmark` events.
//!
//! Only the structure the prompt format uses is kept: headings, lists with
//! nested lists and the inline spans users type into free text (bold,
//! emphasis, code, links). Block-level paragraphs, code blocks, quotes and
//! rules are dropped.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

/// A top-level or nested block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { depth: u8, inlines: Vec<Inline> },
    List(Vec<ListItem>),
}

/// One list item: its leading inline run plus any nested blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    pub lead: Vec<Inline>,
    pub children: Vec<Block>,
}

impl ListItem {
    /// Items of the first nested list, if any.
    pub fn sub_items(&self) -> &[ListItem] {
        self.children
            .iter()
            .find_map(|block| match block {
                Block::List(items) => Some(items.as_slice()),
                Block::Heading { .. } => None,
            })
            .unwrap_or(&[])
    }
}

/// Inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Code(String),
    Link { text: String, href: String },
}

/// Concatenated text of an inline run. Links contribute their text only.
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(text),
            Inline::Strong(inner) | Inline::Emphasis(inner) => out.push_str(&plain_text(inner)),
            Inline::Code(code) => out.push_str(code),
            Inline::Link { text, .. } => out.push_str(text),
        }
    }
    out
}

/// Inline run written back as Markdown, keeping every span.
pub fn source_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(text),
            Inline::Strong(inner) => {
                out.push_str("**");
                out.push_str(&source_text(inner));
                out.push_str("**");
            }
            Inline::Emphasis(inner) => {
                out.push('*');
                out.push_str(&source_text(inner));
                out.push('*');
            }
            Inline::Code(code) => out.push_str(&code_span(code)),
            Inline::Link { text, href } => out.push_str(&format!("[{text}]({href})")),
        }
    }
    out
}

/// `` `code` ``, with a longer fence when the code itself holds backticks.
fn code_span(code: &str) -> String {
    let longest = code
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest + 1);
    let padded = code.starts_with('`')
        || code.ends_with('`')
        || (code.starts_with(' ') && code.ends_with(' ') && !code.trim().is_empty());
    if padded {
        format!("{fence} {code} {fence}")
    } else {
        format!("{fence}{code}{fence}")
    }
}

/// Tokenize a Markdown document.
pub fn lex(markdown: &str) -> Vec<Block> {
    Lexer {
        events: Parser::new_ext(markdown, Options::empty()),
    }
    .blocks()
}

struct Lexer<'a> {
    events: Parser<'a>,
}

impl<'a> Lexer<'a> {
    fn blocks(&mut self) -> Vec<Block> {
        let mut blocks = Vec::new();
        while let Some(event) = self.events.next() {
            match event {
                Event::Start(Tag::Heading { level, .. }) => blocks.push(Block::Heading {
                    depth: heading_depth(level),
                    inlines: self.inlines(),
                }),
                Event::Start(Tag::List(_)) => blocks.push(Block::List(self.items())),
                Event::Start(_) => self.skip_container(),
                _ => {}
            }
        }
        blocks
    }

    /// Items up to the end of the current list.
    fn items(&mut self) -> Vec<ListItem> {
        let mut items = Vec::new();
        while let Some(event) = self.events.next() {
            match event {
                Event::Start(Tag::Item) => items.push(self.item()),
                Event::Start(_) => self.skip_container(),
                Event::End(_) => break,
                _ => {}
            }
        }
        items
    }

    /// Contents of one item. Tight lists put inline events straight into the
    /// item; loose lists wrap them in a paragraph. Either way the first run
    /// becomes `lead`.
    fn item(&mut self) -> ListItem {
        let mut item = ListItem::default();
        while let Some(event) = self.events.next() {
            match event {
                Event::End(_) => break,
                Event::Start(Tag::Paragraph) => {
                    let inlines = self.inlines();
                    if item.lead.is_empty() && item.children.is_empty() {
                        item.lead = inlines;
                    }
                }
                Event::Start(Tag::List(_)) => item.children.push(Block::List(self.items())),
                Event::Start(Tag::Heading { level, .. }) => item.children.push(Block::Heading {
                    depth: heading_depth(level),
                    inlines: self.inlines(),
                }),
                other => {
                    if let Some(Event::Start(_)) = self.inline(other, &mut item.lead) {
                        self.skip_container();
                    }
                }
            }
        }
        item
    }

    /// Inline run up to the end of the enclosing container.
    fn inlines(&mut self) -> Vec<Inline> {
        let mut out = Vec::new();
        while let Some(event) = self.events.next() {
            match self.inline(event, &mut out) {
                Some(Event::End(_)) => break,
                Some(Event::Start(_)) => self.skip_container(),
                _ => {}
            }
        }
        out
    }

    /// Append an inline event to `out`. Returns the event back when it is
    /// not inline content.
    fn inline(&mut self, event: Event<'a>, out: &mut Vec<Inline>) -> Option<Event<'a>> {
        match event {
            Event::Text(text) | Event::InlineHtml(text) => push_text(out, &text),
            Event::Code(code) => out.push(Inline::Code(code.to_string())),
            Event::SoftBreak | Event::HardBreak => push_text(out, "\n"),
            Event::Start(Tag::Strong) => out.push(Inline::Strong(self.inlines())),
            Event::Start(Tag::Emphasis) => out.push(Inline::Emphasis(self.inlines())),
            Event::Start(Tag::Link { dest_url, .. }) => {
                let text = plain_text(&self.inlines());
                out.push(Inline::Link {
                    text,
                    href: dest_url.to_string(),
                });
            }
            Event::Start(Tag::Strikethrough | Tag::Image { .. }) => {
                for inline in self.inlines() {
                    match inline {
                        Inline::Text(text) => push_text(out, &text),
                        other => out.push(other),
                    }
                }
            }
            Event::Start(_) | Event::End(_) => return Some(event),
            _ => {}
        }
        None
    }

    /// Consume events up to the end of a container whose start was already
    /// consumed.
    fn skip_container(&mut self) {
        let mut depth = 1usize;
        for event in self.events.by_ref() {
            match event {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }
}

/// Adjacent text events are merged so callers see one `Text` per run.
fn push_text(out: &mut Vec<Inline>, text: &str) {
    match out.last_mut() {
        Some(Inline::Text(last)) => last.push_str(text),
        _ => out.push(Inline::Text(text.to_owned())),
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
