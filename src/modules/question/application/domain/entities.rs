use std::fmt;

use serde::{Deserialize, Serialize};

/// The two locales every question must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Es => write!(f, "es"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLocale {
    pub question: String,
    pub options: Vec<QuestionOption>,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLocales {
    pub en: QuestionLocale,
    pub es: QuestionLocale,
}

impl QuestionLocales {
    pub fn locale(&self, locale: Locale) -> &QuestionLocale {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}
