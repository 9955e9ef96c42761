use itertools::Itertools;

/// Split a log into its identifier and content.
/// A log without a space has empty content.
fn split_log(log: &str) -> (&str, &str) {
    log.split_once(' ').unwrap_or((log, ""))
}

fn is_letter_log(log: &str) -> bool {
    let (_, content) = split_log(log);
    content.chars().next().is_some_and(|c| c.is_alphabetic())
}

/// Letter-logs first, ordered by content then identifier, then digit-logs in
/// their original order.
pub fn reorder_log_files(logs: Vec<String>) -> Vec<String> {
    let (letter_logs, digit_logs): (Vec<String>, Vec<String>) =
        logs.into_iter().partition(|log| is_letter_log(log));

    tracing::trace!(letters = letter_logs.len(), digits = digit_logs.len(), "partitioned logs");

    letter_logs
        .into_iter()
        .sorted_by(|a, b| {
            let (a_id, a_content) = split_log(a);
            let (b_id, b_content) = split_log(b);
            a_content.cmp(b_content).then_with(|| a_id.cmp(b_id))
        })
        .chain(digit_logs)
        .collect()
}
