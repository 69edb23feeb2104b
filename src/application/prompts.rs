//! Prompt text sent to the language model.

use chrono::NaiveDate;

/// System prompt for one turn.
///
/// Today's date is included so relative phrases ("last week", "this
/// month") can be turned into concrete `YYYY-MM-DD` arguments.
pub fn system_prompt(today: NaiveDate) -> String {
    format!(
        "You are an assistant that answers questions about the National Vulnerability \
Database (NVD). Today's date is {today}.\n\
When a question concerns specific CVEs, products, vendors, weaknesses or time periods, \
call the `{tool}` tool. Fill in only the arguments the user actually asked about and \
leave the others as empty strings. Write dates as YYYY-MM-DD.\n\
Base your answer on the data the tool returns. If it reports no matches or an error, \
say so plainly instead of guessing.",
        today = today.format("%Y-%m-%d"),
        tool = super::tools::NVD_SEARCH_TOOL_NAME,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_includes_date_and_tool() {
        let prompt = system_prompt(NaiveDate::from_ymd_opt(2025, 2, 16).unwrap());
        assert!(prompt.contains("Today's date is 2025-02-16."));
        assert!(prompt.contains("`api-tool`"));
        assert!(prompt.contains("YYYY-MM-DD"));
    }
}
