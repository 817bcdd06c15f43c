//! Markdown parser for the question bank README.
//!
//! # Format
//! ~~~markdown
//! Preamble (ignored)
//!
//! ---
//!
//! ###### 1. What's the output?
//!
//! ```javascript
//! console.log(typeof null);
//! ```
//!
//! - A: `"null"`
//! - B: `"object"`
//!
//! <details><summary><b>Answer</b></summary>
//! <p>
//!
//! #### Answer: B
//!
//! Explanation text.
//!
//! </p>
//! </details>
//!
//! ---
//! ~~~
//!
//! Parsing runs in stages: the document is split into sections, each
//! section is matched against the question layout, then each choice line
//! is matched on its own. A failure at any stage fails the whole document.

use crate::error::{ParseError, Result};
use crate::language::Language;
use crate::types::{Choice, QuizDocument, QuizItem};
use regex::{Captures, Regex};
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::{debug, info};

const SECTION_DELIMITER: &str = r"---|\* \* \* \* \*";

const SECTION_LAYOUT: &str = r"(?ms)######\s*(.*?)\s*\n\s*(.*?)\s*((?:[-*]\s*[A-Z]: .*?)+)\s*<details>.*?#### .*?: ([A-Z])\n(.*?)</p>\s*</details>";

const CHOICE_LINE: &str = r"^[-*]\s*([A-Z]):\s*(.+?)\s*$";

const ITALIC_SPAN: &str = r"<i>(.*)</i>|<em>(.*)</em>";

const EXCERPT_CHARS: usize = 60;

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern compiles"))
}

fn delimiter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, SECTION_DELIMITER)
}

fn section_layout() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, SECTION_LAYOUT)
}

fn choice_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, CHOICE_LINE)
}

fn italic_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, ITALIC_SPAN)
}

/// Parse a README into an ordered quiz document.
pub fn parse(content: &str, language: Language) -> Result<QuizDocument> {
    let mut items = Vec::new();

    for (idx, section) in split_sections(content).into_iter().enumerate() {
        let number = idx + 1;
        let raw = extract_section(section, number)?;
        let item = raw.build(number)?;
        debug!(
            section = number,
            title = %item.title,
            choices = item.choices.len(),
            "parsed question"
        );
        items.push(item);
    }

    info!(%language, questions = items.len(), "parsed question bank");
    Ok(QuizDocument::new(language, items))
}

/// Split the document on section delimiters.
///
/// The segment before the first delimiter is the preamble and is dropped,
/// as are segments that are empty once trimmed.
pub fn split_sections(content: &str) -> Vec<&str> {
    delimiter()
        .split(content)
        .skip(1)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Captured pieces of one section, before cleanup.
#[derive(Debug)]
struct RawSection<'a> {
    title: &'a str,
    question: &'a str,
    choices: &'a str,
    answer: &'a str,
    explanation: &'a str,
}

fn extract_section(section: &str, number: usize) -> Result<RawSection<'_>> {
    let caps = section_layout()
        .captures(section)
        .ok_or_else(|| ParseError::MalformedSection {
            section: number,
            excerpt: excerpt(section),
        })?;
    let (_, [title, question, choices, answer, explanation]) = caps.extract();

    Ok(RawSection {
        title,
        question,
        choices,
        answer,
        explanation,
    })
}

impl RawSection<'_> {
    fn build(self, number: usize) -> Result<QuizItem> {
        let choices = self
            .choices
            .split('\n')
            .map(|line| parse_choice_line(line, number))
            .collect::<Result<Vec<_>>>()?;

        if choices.len() < 2 {
            return Err(ParseError::TooFewChoices {
                section: number,
                count: choices.len(),
            });
        }

        let mut seen = HashSet::new();
        for choice in &choices {
            if !seen.insert(choice.label) {
                return Err(ParseError::DuplicateChoice {
                    section: number,
                    label: choice.label,
                });
            }
        }

        // The layout only captures a single uppercase letter here.
        let answer = cleanup(self.answer).chars().next().unwrap_or_default();
        if !seen.contains(&answer) {
            return Err(ParseError::UnknownAnswer {
                section: number,
                answer,
            });
        }

        Ok(QuizItem {
            title: cleanup(self.title),
            question: cleanup(self.question),
            choices,
            answer,
            explanation: cleanup(self.explanation),
        })
    }
}

/// Parse one `- A: text` line of a choice block.
pub fn parse_choice_line(line: &str, section: usize) -> Result<Choice> {
    let caps = choice_line()
        .captures(line)
        .ok_or_else(|| ParseError::MalformedChoice {
            section,
            line: line.to_string(),
        })?;
    let (_, [label, text]) = caps.extract();

    Ok(Choice {
        label: label.chars().next().unwrap_or_default(),
        text: cleanup(text),
    })
}

/// Trim `text` and rewrite its first italic span as `*markdown*`.
///
/// Only one match is rewritten and the span is greedy within a line, so
/// `<i>a</i> and <i>b</i>` becomes `*a</i> and <i>b*`. The replacement only
/// reads the `<i>` capture, so an `<em>` span collapses to `**`.
pub fn cleanup(text: &str) -> String {
    italic_span()
        .replace(text.trim(), |caps: &Captures| {
            let inner = caps.get(1).map_or("", |m| m.as_str());
            format!("*{inner}*")
        })
        .into_owned()
}

fn excerpt(section: &str) -> String {
    let first_line = section.lines().next().unwrap_or_default();
    if first_line.chars().count() > EXCERPT_CHARS {
        let cut: String = first_line.chars().take(EXCERPT_CHARS).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}
