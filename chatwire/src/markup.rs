//! Markdown-lite to HTML transform for bot replies.
//!
//! DESIGN
//! ======
//! A fixed, ordered list of [`Stage`]s, each rewriting the accumulated string
//! produced by the previous one. Angle brackets are escaped first so raw
//! markup in model text never survives; every later stage emits tags into the
//! partially transformed text and no stage looks at the original input.
//!
//! TRADE-OFFS
//! ==========
//! There is no nesting resolution. Malformed or adversarial input can produce
//! mismatched tags, which is acceptable only because the text comes from our
//! own backend. Single-line stages run in CRLF mode so `.` and `$` stop at
//! `\r` as well as `\n`.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;

static FENCED_CODE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)```(.*?)```"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| compile(r"`([^`]+)`"));
static HEADINGS: LazyLock<[(Regex, &'static str); 3]> = LazyLock::new(|| {
    [
        (compile(r"(?mR)^### (.*)$"), "<h3>${1}</h3>"),
        (compile(r"(?mR)^## (.*)$"), "<h2>${1}</h2>"),
        (compile(r"(?mR)^# (.*)$"), "<h1>${1}</h1>"),
    ]
});
static BOLD_ITALIC: LazyLock<Regex> = LazyLock::new(|| compile(r"(?R)\*\*\*(.*?)\*\*\*"));
static BOLD: LazyLock<Regex> = LazyLock::new(|| compile(r"(?R)\*\*(.*?)\*\*"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| compile(r"(?R)\*(.*?)\*"));
static BULLET_LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?mR)^\* (.*?)$"));
static LIST_SPAN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)(<li>.*</li>)"));
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| compile(r"\n{2,}"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("markup pattern is a valid regex")
}

/// One rewrite step of the formatter, in application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    EscapeAngles,
    FencedCode,
    InlineCode,
    Headings,
    BoldItalic,
    Bold,
    Italic,
    BulletList,
    LineBreaks,
    Paragraph,
}

impl Stage {
    /// Every stage, in the order [`format`] applies them.
    pub const ORDER: [Stage; 10] = [
        Stage::EscapeAngles,
        Stage::FencedCode,
        Stage::InlineCode,
        Stage::Headings,
        Stage::BoldItalic,
        Stage::Bold,
        Stage::Italic,
        Stage::BulletList,
        Stage::LineBreaks,
        Stage::Paragraph,
    ];

    /// Apply this stage to the accumulated text.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::EscapeAngles => text.replace('<', "&lt;").replace('>', "&gt;"),
            Self::FencedCode => FENCED_CODE
                .replace_all(text, "<pre><code>${1}</code></pre>")
                .into_owned(),
            Self::InlineCode => INLINE_CODE.replace_all(text, "<code>${1}</code>").into_owned(),
            Self::Headings => HEADINGS.iter().fold(text.to_owned(), |acc, (re, rep)| {
                re.replace_all(&acc, *rep).into_owned()
            }),
            Self::BoldItalic => BOLD_ITALIC
                .replace_all(text, "<strong><em>${1}</em></strong>")
                .into_owned(),
            Self::Bold => BOLD.replace_all(text, "<strong>${1}</strong>").into_owned(),
            Self::Italic => ITALIC.replace_all(text, "<em>${1}</em>").into_owned(),
            Self::BulletList => {
                let items = BULLET_LINE.replace_all(text, "<li>${1}</li>");
                if items.contains("<li>") {
                    LIST_SPAN.replace_all(&items, "<ul>${1}</ul>").into_owned()
                } else {
                    items.into_owned()
                }
            }
            Self::LineBreaks => PARAGRAPH_BREAK
                .replace_all(text, "</p><p>")
                .replace('\n', "<br>"),
            Self::Paragraph => format!("<p>{text}</p>"),
        }
    }
}

/// Render markdown-lite `text` to HTML. Pure and total.
#[must_use]
pub fn format(text: &str) -> String {
    Stage::ORDER
        .iter()
        .fold(text.to_owned(), |acc, stage| stage.apply(&acc))
}
