use super::date_mention::has_date_mention;
use crate::nvd_query::domain::ArgumentMap;

/// A key relates to a date when its name contains "date".
pub fn is_date_argument(key: &str) -> bool {
    key.to_lowercase().contains("date")
}

/// Clears arguments the user never actually said.
///
/// Any value that does not occur (case-insensitively) in `user_text` is
/// replaced with an empty string. Date arguments skip this check when the
/// text shows independent evidence of a date, since the model is expected
/// to rewrite "last week" into ISO dates. Without such evidence they are
/// checked like everything else.
///
/// Returns the keys that were cleared.
pub fn sanitize_arguments(args: &mut ArgumentMap, user_text: &str) -> Vec<String> {
    let lowered_text = user_text.to_lowercase();
    let date_mentioned = has_date_mention(user_text);
    let mut cleared = Vec::new();

    for (key, value) in args.iter_mut() {
        if is_date_argument(key) && date_mentioned {
            continue;
        }

        if !lowered_text.contains(&value.to_lowercase()) {
            tracing::debug!(argument = %key, value = %value, "clearing argument not present in question");
            value.clear();
            cleared.push(key.clone());
        }
    }

    cleared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> ArgumentMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_fabricated_keyword_is_cleared() {
        let mut map = args(&[("keywords", "shellshock")]);
        let cleared = sanitize_arguments(&mut map, "what is heartbleed");

        assert_eq!(map["keywords"], "");
        assert_eq!(cleared, vec!["keywords".to_string()]);
    }

    #[test]
    fn test_present_keyword_is_kept() {
        let mut map = args(&[("keywords", "heartbleed")]);
        let cleared = sanitize_arguments(&mut map, "what is heartbleed");

        assert_eq!(map["keywords"], "heartbleed");
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let mut map = args(&[("cveId", "cve-2014-0160")]);
        sanitize_arguments(&mut map, "Explain CVE-2014-0160");

        assert_eq!(map["cveId"], "cve-2014-0160");
    }

    #[test]
    fn test_dates_trusted_when_question_mentions_a_date() {
        let mut map = args(&[
            ("dateRangeStart", "2024-01-08"),
            ("dateRangeEnd", "2024-01-15"),
            ("keywords", "apache"),
        ]);
        sanitize_arguments(&mut map, "apache bugs from last week");

        assert_eq!(map["dateRangeStart"], "2024-01-08");
        assert_eq!(map["dateRangeEnd"], "2024-01-15");
        assert_eq!(map["keywords"], "apache");
    }

    #[test]
    fn test_dates_checked_when_question_has_no_date() {
        let mut map = args(&[("dateRangeStart", "2023-01-01"), ("dateRangeEnd", "2023-02-01")]);
        let cleared = sanitize_arguments(&mut map, "show me heartbleed bugs");

        assert_eq!(map["dateRangeStart"], "");
        assert_eq!(map["dateRangeEnd"], "");
        assert_eq!(cleared.len(), 2);
    }

    #[test]
    fn test_empty_values_are_left_alone() {
        let mut map = args(&[("cveId", ""), ("keywords", "")]);
        let cleared = sanitize_arguments(&mut map, "anything");

        assert!(cleared.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_filtered_too() {
        let mut map = args(&[("vendor", "microsoft")]);
        sanitize_arguments(&mut map, "tell me about log4j");

        assert_eq!(map["vendor"], "");
    }

    #[test]
    fn test_is_date_argument() {
        assert!(is_date_argument("dateRangeStart"));
        assert!(is_date_argument("lastModEndDate"));
        assert!(!is_date_argument("keywords"));
        assert!(!is_date_argument("cveId"));
    }
}
