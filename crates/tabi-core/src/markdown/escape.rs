//! Writing user text into the prompt so it reads back unchanged.
//!
//! Text goes out as-is when the lexer already reads it back to the same
//! string, so links and bold spans typed into a note still reach the LLM as
//! Markdown. Anything else is backslash-escaped.

use std::borrow::Cow;

use super::lexer::{self, Block, Inline};

/// Free text (do-eat, notes, remarks, bullet values) whose Markdown source
/// form must survive.
pub(crate) fn source_item(text: &str) -> Cow<'_, str> {
    if reads_back(text, lexer::source_text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(escape(text))
    }
}

/// Text whose plain form must survive, e.g. a place name without a URL.
pub(crate) fn plain_item(text: &str) -> Cow<'_, str> {
    if reads_back(text, lexer::plain_text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(escape(text))
    }
}

/// `[label](url)`. Destinations with spaces or parentheses use the `<url>`
/// form; destinations the lexer would still alter are escaped inside it.
pub(crate) fn link(label: &str, url: &str) -> String {
    let label = escape(label);
    let destination = if url.chars().any(|c| c.is_whitespace() || c == '(' || c == ')') {
        format!("<{url}>")
    } else {
        url.to_owned()
    };
    let markdown = format!("[{label}]({destination})");
    if link_href(&markdown).as_deref() == Some(url) {
        return markdown;
    }

    let mut escaped = String::with_capacity(url.len() + 8);
    for c in url.chars() {
        if matches!(c, '\\' | '<' | '>' | '&') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("[{label}](<{escaped}>)")
}

/// Backslash-escape everything CommonMark would read as structure.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);

    // Block markers only count at the start of the line.
    let digits = text.bytes().take_while(|b| b.is_ascii_digit()).count();
    let rest = match text[digits..].chars().next() {
        Some(marker @ ('.' | ')')) if digits > 0 => {
            out.push_str(&text[..digits]);
            out.push('\\');
            out.push(marker);
            &text[digits + 1..]
        }
        Some(marker @ ('#' | '-' | '+' | '>' | '~')) if digits == 0 => {
            out.push('\\');
            out.push(marker);
            &text[1..]
        }
        _ => text,
    };

    for c in rest.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '&') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Whether `text`, written as a list item, lexes to a single item that
/// `render` turns back into `text`.
fn reads_back(text: &str, render: fn(&[Inline]) -> String) -> bool {
    match lexer::lex(&format!("* {text}\n")).as_slice() {
        [Block::List(items)] => match items.as_slice() {
            [item] => item.children.is_empty() && render(&item.lead) == text,
            _ => false,
        },
        _ => false,
    }
}

fn link_href(markdown: &str) -> Option<String> {
    match lexer::lex(&format!("* {markdown}\n")).as_slice() {
        [Block::List(items)] => items.first()?.lead.iter().find_map(|inline| match inline {
            Inline::Link { href, .. } => Some(href.clone()),
            _ => None,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub_source(markdown: &str) -> String {
        match lexer::lex(&format!("* {markdown}\n")).as_slice() {
            [Block::List(items)] => lexer::source_text(&items[0].lead),
            other => panic!("expected one list, got {other:?}"),
        }
    }

    #[test]
    fn markdown_that_reads_back_is_left_alone() {
        for text in [
            "スープカレー",
            "[地下鉄1日券](https://example.com/pass)を買う",
            "**寿司**を食べる",
            "*絶対*行く",
            "`コード`",
            "A & B",
            "3.5時間歩く",
        ] {
            assert_eq!(source_item(text), text, "{text:?}");
        }
    }

    #[test]
    fn text_the_lexer_would_change_is_escaped() {
        assert_eq!(source_item("1. 朝市"), "1\\. 朝市");
        assert_eq!(source_item("# 夜景"), "\\# 夜景");
        assert_eq!(source_item("- 市場"), "\\- 市場");
        assert_eq!(source_item("A &amp; B"), "A \\&amp; B");
        assert_eq!(source_item("a\\*b"), "a\\\\\\*b");
    }

    #[test]
    fn escaped_text_reads_back_exactly() {
        for text in [
            "1. 朝市",
            "2) 夕食",
            "# 夜景",
            "> 引用",
            "+ 追加",
            "~~~",
            "A &amp; B",
            "a\\*b",
            "<b>太字</b>",
            "[x]: https://example.com",
            "末尾\\",
        ] {
            assert_eq!(sub_source(&escape(text)), text, "{text:?}");
        }
    }

    #[test]
    fn plain_items_keep_markup_characters() {
        assert_eq!(plain_item("大通公園"), "大通公園");
        let escaped = plain_item("**大通**公園");
        assert_eq!(escaped, "\\*\\*大通\\*\\*公園");
        assert_eq!(sub_source(&escaped), "**大通**公園");
    }

    #[test]
    fn links_escape_labels_and_odd_destinations() {
        assert_eq!(link("時計台", "https://example.com/a"), "[時計台](https://example.com/a)");
        assert_eq!(
            link("[新] 時計台", "https://example.com/a"),
            "[\\[新\\] 時計台](https://example.com/a)"
        );
        assert_eq!(
            link("時計台", "https://example.com/a (1)"),
            "[時計台](<https://example.com/a (1)>)"
        );
        assert_eq!(
            link("時計台", "https://example.com/?a=1&b=2"),
            "[時計台](https://example.com/?a=1&b=2)"
        );
        for url in ["https://example.com/?q=&amp;", "https://example.com/a\\*b"] {
            assert_eq!(link_href(&link("時計台", url)).as_deref(), Some(url), "{url}");
        }
    }
}
