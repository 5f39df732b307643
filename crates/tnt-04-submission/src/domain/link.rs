//! Status link handling.

use crate::error::SubmitError;

/// Extract the batch id from the `link` returned on submission.
///
/// The link is `.../batch_statuses?id=<batch id>`, possibly relative.
pub fn batch_id_from_link(link: &str) -> Result<String, SubmitError> {
    let query = link
        .split_once('?')
        .map(|(_, query)| query)
        .ok_or_else(|| SubmitError::MalformedLink(link.to_string()))?;

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, value)| *key == "id" && !value.is_empty())
        .map(|(_, value)| value.to_string())
        .ok_or_else(|| SubmitError::MalformedLink(link.to_string()))
}

/// Status URL for `batch_id` on `gateway_url`.
pub fn form_status_url(gateway_url: &str, batch_id: &str) -> String {
    format!(
        "{}/batch_statuses?id={}",
        gateway_url.trim_end_matches('/'),
        batch_id
    )
}

/// Status URL with the long-poll window appended.
pub fn with_wait(status_url: &str, wait_secs: u64) -> String {
    format!("{status_url}&wait={wait_secs}")
}
