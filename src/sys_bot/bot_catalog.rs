// ----- Imports ----- //

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::{sys_bot::bot_errors::CatalogError, sys_resource::read_resource};

// Shipped with the binary so the service starts without any catalog file
const BUILTIN_CATALOG: &str = include_str!("../../cfg/catalog.json");

const PHONE_KEYWORDS_ENTRY: &str = "phone_keywords";

// ----- Structs ----- //

/// One course or FAQ topic: its canonical answer and the trigger keywords.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordEntry {
    pub name: String,
    pub answer: String,
    pub keywords: Vec<String>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    courses: Vec<KeywordEntry>,
    #[serde(default)]
    faqs: Vec<KeywordEntry>,
    #[serde(default)]
    phone_keywords: Vec<String>,
}

/// Immutable keyword tables. Courses and FAQs keep their file order, which is
/// the match priority: the first entry with a matching keyword wins.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<KeywordEntry>,
    faqs: Vec<KeywordEntry>,
    phone_keywords: BTreeSet<String>,
}

// ----- Implementations ----- //

impl KeywordEntry {
    fn matches(&self, normalized_text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized_text.contains(keyword.as_str()))
    }

    fn normalized(mut self) -> Result<Self, CatalogError> {
        self.keywords = normalize_keywords(&self.name, self.keywords)?;
        Ok(self)
    }
}

impl Catalog {
    pub fn new(
        courses: Vec<KeywordEntry>,
        faqs: Vec<KeywordEntry>,
        phone_keywords: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let courses = courses
            .into_iter()
            .map(KeywordEntry::normalized)
            .collect::<Result<Vec<_>, _>>()?;
        let faqs = faqs
            .into_iter()
            .map(KeywordEntry::normalized)
            .collect::<Result<Vec<_>, _>>()?;
        let phone_keywords = normalize_keywords(PHONE_KEYWORDS_ENTRY, phone_keywords)?
            .into_iter()
            .collect();

        Ok(Self {
            courses,
            faqs,
            phone_keywords,
        })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.courses, file.faqs, file.phone_keywords)
    }

    pub fn from_path(path: &str) -> Result<Self, CatalogError> {
        let contents = read_resource(path).map_err(|source| CatalogError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    // ----- Matchers ----- //

    pub fn find_course(&self, text: &str) -> Option<&KeywordEntry> {
        first_match(&self.courses, text)
    }

    pub fn find_faq(&self, text: &str) -> Option<&KeywordEntry> {
        first_match(&self.faqs, text)
    }

    /// Canonical text of the first course whose keywords occur in `text`.
    pub fn match_course_info(&self, text: &str) -> Option<&str> {
        self.find_course(text).map(|entry| entry.answer.as_str())
    }

    /// Canned answer of the first FAQ topic whose keywords occur in `text`.
    pub fn match_faq(&self, text: &str) -> Option<&str> {
        self.find_faq(text).map(|entry| entry.answer.as_str())
    }

    /// True when the text shows intent to enroll.
    pub fn should_ask_phone(&self, text: &str) -> bool {
        let normalized = normalize(text);
        self.phone_keywords
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn faq_count(&self) -> usize {
        self.faqs.len()
    }

    pub fn phone_keyword_count(&self) -> usize {
        self.phone_keywords.len()
    }
}

// ----- Helpers ----- //

fn first_match<'a>(entries: &'a [KeywordEntry], text: &str) -> Option<&'a KeywordEntry> {
    let normalized = normalize(text);
    entries.iter().find(|entry| entry.matches(&normalized))
}

fn normalize(text: &str) -> String {
    text.to_lowercase()
}

// An empty keyword is a substring of everything, so it is rejected outright
fn normalize_keywords(entry: &str, keywords: Vec<String>) -> Result<Vec<String>, CatalogError> {
    keywords
        .into_iter()
        .map(|keyword| {
            let keyword = normalize(keyword.trim());
            if keyword.is_empty() {
                Err(CatalogError::EmptyKeyword {
                    entry: entry.to_string(),
                })
            } else {
                Ok(keyword)
            }
        })
        .collect()
}

// ----- Tests ----- //
