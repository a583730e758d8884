//! Free-text task extraction
//!
//! Turns an SMS-style message into structured task fields: title, category,
//! priority, and an optional due date. Detection and title stripping share a
//! single keyword table; matching is case-insensitive and word-boundary
//! aware, so "homework" never trips the "home" or "work" keywords.

use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use regex::Regex;

use super::model::{Category, Priority, Task};

/// What a matched keyword group contributes to the extraction.
enum Effect {
    Category(Category),
    Priority(Priority),
    /// Due date as an offset in days from the reference instant.
    DueInDays(i64),
}

/// Detection rules in precedence order. For each field, the first rule with
/// a keyword present in the text wins; later rules for the same field are
/// ignored. High priority therefore beats low, and "today" beats "tomorrow".
const RULES: &[(&[&str], Effect)] = &[
    (&["life", "personal", "home"], Effect::Category(Category::Life)),
    (&["urgent", "important", "asap"], Effect::Priority(Priority::High)),
    (&["low", "whenever"], Effect::Priority(Priority::Low)),
    (&["today"], Effect::DueInDays(0)),
    (&["tomorrow"], Effect::DueInDays(1)),
];

/// Every word stripped from the title. A superset of the detection keywords:
/// "work", "high", and "medium" are removed but never drive detection (the
/// absence of a life keyword is what selects the work category).
const STRIP_WORDS: &[&str] = &[
    "work", "life", "personal", "home", "urgent", "important", "asap", "low",
    "high", "medium", "whenever", "today", "tomorrow",
];

/// Punctuation that keyword removal can leave dangling at either end of the
/// title, e.g. the colon in "Urgent: Buy groceries".
const SEPARATORS: &[char] = &[':', ';', ',', '.', '!', '?', '-'];

fn keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"(?i)\b({})\b", STRIP_WORDS.join("|"));
        Regex::new(&pattern).unwrap()
    })
}

/// Structured fields extracted from one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The trimmed input text.
    pub raw_text: String,
    /// What remains of the message once keywords are stripped.
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    pub due: Option<NaiveDate>,
}

impl Extraction {
    /// True when nothing but keywords remained. An empty extraction is a
    /// valid outcome, not an error; callers must skip task creation.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }

    /// Build a task from the extracted fields, or `None` when empty.
    pub fn into_task(self) -> Option<Task> {
        if self.is_empty() {
            return None;
        }
        let mut task = Task::new(self.title, self.category, self.priority);
        task.due = self.due;
        Some(task)
    }
}

/// Extract task fields from free text.
///
/// `now` resolves the relative date words "today" and "tomorrow"; passing
/// it in rather than reading a clock keeps the function deterministic.
/// The result is the same for the same `(text, now)` pair, and stripping
/// is idempotent: extracting an extracted title changes nothing.
pub fn extract(text: &str, now: DateTime<Utc>) -> Extraction {
    let raw = text.trim();

    let mut seen: HashSet<String> = HashSet::new();
    for m in keyword_re().find_iter(raw) {
        seen.insert(m.as_str().to_lowercase());
    }

    let mut category = None;
    let mut priority = None;
    let mut due = None;

    for (keywords, effect) in RULES {
        if !keywords.iter().any(|k| seen.contains(*k)) {
            continue;
        }
        match effect {
            Effect::Category(c) => {
                category.get_or_insert(*c);
            }
            Effect::Priority(p) => {
                priority.get_or_insert(*p);
            }
            Effect::DueInDays(days) => {
                due.get_or_insert((now + Duration::days(*days)).date_naive());
            }
        }
    }

    let stripped = keyword_re().replace_all(raw, "");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    let title = collapsed
        .trim_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .to_string();

    Extraction {
        raw_text: raw.to_string(),
        title,
        category: category.unwrap_or_default(),
        priority: priority.unwrap_or_default(),
        due,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_high_beats_low() {
        let result = extract("urgent but low effort cleanup", reference());
        assert_eq!(result.priority, Priority::High);
    }

    #[test]
    fn test_today_beats_tomorrow() {
        let result = extract("file taxes today or tomorrow", reference());
        assert_eq!(result.due, Some(reference().date_naive()));
    }

    #[test]
    fn test_default_category_is_work() {
        let result = extract("review the quarterly report", reference());
        assert_eq!(result.category, Category::Work);
    }

    #[test]
    fn test_life_keywords_select_life() {
        for text in ["life admin", "personal errand", "home repair"] {
            let result = extract(text, reference());
            assert_eq!(result.category, Category::Life, "input: {}", text);
        }
    }

    #[test]
    fn test_stripping_is_idempotent() {
        let first = extract("urgent personal: renew passport tomorrow", reference());
        let second = extract(&first.title, reference());
        assert_eq!(second.title, first.title);
    }

    #[test]
    fn test_word_boundaries_are_respected() {
        let result = extract("homework due asap", reference());
        assert_eq!(result.title, "homework due");
        assert_eq!(result.priority, Priority::High);
        assert_eq!(result.category, Category::Work);
    }

    #[test]
    fn test_keywords_only_is_empty() {
        let result = extract("urgent asap", reference());
        assert!(result.is_empty());
        assert!(result.into_task().is_none());
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(extract("", reference()).is_empty());
        assert!(extract("   \t ", reference()).is_empty());
    }

    #[test]
    fn test_groceries_example() {
        let now = reference();
        let result = extract("Urgent: Buy groceries today", now);
        assert_eq!(result.title, "Buy groceries");
        assert_eq!(result.category, Category::Work);
        assert_eq!(result.priority, Priority::High);
        assert_eq!(result.due, Some(now.date_naive()));
    }

    #[test]
    fn test_call_mom_example() {
        let now = reference();
        let result = extract("life: call mom tomorrow whenever", now);
        assert_eq!(result.title, "call mom");
        assert_eq!(result.category, Category::Life);
        assert_eq!(result.priority, Priority::Low);
        assert_eq!(result.due, Some((now + Duration::days(1)).date_naive()));
    }

    #[test]
    fn test_every_occurrence_is_stripped() {
        let result = extract("urgent urgent call the bank urgent", reference());
        assert_eq!(result.title, "call the bank");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = extract("URGENT dentist appointment Tomorrow", reference());
        assert_eq!(result.title, "dentist appointment");
        assert_eq!(result.priority, Priority::High);
        assert!(result.due.is_some());
    }

    #[test]
    fn test_strip_only_words_never_detect() {
        // "work", "high", and "medium" are stripped from the title but do
        // not influence category or priority.
        let result = extract("high work meeting notes", reference());
        assert_eq!(result.title, "meeting notes");
        assert_eq!(result.category, Category::Work);
        assert_eq!(result.priority, Priority::Medium);
    }

    #[test]
    fn test_raw_text_is_trimmed() {
        let result = extract("  buy milk  ", reference());
        assert_eq!(result.raw_text, "buy milk");
        assert_eq!(result.title, "buy milk");
    }

    #[test]
    fn test_no_date_keyword_leaves_due_unset() {
        let result = extract("water the plants", reference());
        assert_eq!(result.due, None);
    }

    #[test]
    fn test_into_task_carries_fields() {
        let now = reference();
        let task = extract("personal: pay rent tomorrow", now)
            .into_task()
            .unwrap();
        assert_eq!(task.title, "pay rent");
        assert_eq!(task.category, Category::Life);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due, Some((now + Duration::days(1)).date_naive()));
        assert!(!task.completed);
    }
}
