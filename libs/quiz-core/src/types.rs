//! Quiz data model.

use crate::language::Language;

/// One answer option of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Single uppercase letter identifying the option.
    pub label: char,
    pub text: String,
}

/// A parsed multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    pub title: String,
    /// Question body, may contain inline markdown.
    pub question: String,
    pub choices: Vec<Choice>,
    /// Label of the correct choice.
    pub answer: char,
    pub explanation: String,
}

impl QuizItem {
    /// Whether `label` is the correct choice.
    pub fn is_correct(&self, label: char) -> bool {
        self.answer == label
    }
}

/// Ordered quiz items of one language edition.
///
/// The position of an item is the index stored in a saved session, so the
/// order must follow the source document exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDocument {
    language: Language,
    items: Vec<QuizItem>,
}

impl QuizDocument {
    pub fn new(language: Language, items: Vec<QuizItem>) -> Self {
        Self { language, items }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuizItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }
}
