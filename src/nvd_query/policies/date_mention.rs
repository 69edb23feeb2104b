use regex::Regex;
use std::sync::LazyLock;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("iso date pattern"));

/// Words that suggest the question is scoped in time.
///
/// Matching is by substring on the lowercased text. Short month
/// abbreviations carry a leading space to cut down on hits inside other
/// words; "apr" and "may" do not, so "maybe" still counts.
const DATE_WORDS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
    " jan",
    " feb",
    " mar",
    "apr",
    " jun",
    " jul",
    " aug",
    " sep",
    " sept",
    " oct",
    " nov",
    " dec",
    "month",
    "year",
    "week",
    " day ",
    "today",
    "tomorrow",
    "yesterday",
];

/// Returns true when the text carries any lexical evidence of a date.
pub fn has_date_mention(text: &str) -> bool {
    let lowered = text.to_lowercase();
    DATE_WORDS.iter().any(|word| lowered.contains(word)) || ISO_DATE.is_match(text)
}
