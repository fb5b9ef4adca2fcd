use reqwest::header::CONTENT_TYPE;
use tracing::debug;

/// POSTs a JSON body and reads the whole reply as text.
///
/// A fresh client is built for every call so its connection and TLS state
/// are released as soon as the reply has been read.
pub async fn post_json(url: &str, body: Vec<u8>) -> reqwest::Result<String> {
    let client = reqwest::Client::builder().build()?;

    let response = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    debug!("{} responded with status {}", url, response.status());
    response.text().await
}
