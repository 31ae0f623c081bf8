//! Static asset fetches made once at page start.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns an empty list since suggestions are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
fn job_titles_failed_message(status: u16) -> String {
    format!("job titles request failed: {status}")
}

/// Fetch the autocomplete list from `/static/job_titles.txt`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn fetch_job_titles() -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(wire::JOB_TITLES_PATH)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(job_titles_failed_message(resp.status()));
        }
        let text = resp.text().await.map_err(|e| e.to_string())?;
        Ok(wire::parse_job_titles(&text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}
