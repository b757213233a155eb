use std::time::Duration;

use reqwest::Client;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; emaple-watcher/1.0)";
const HTTP_TIMEOUT: Duration = Duration::from_secs(20);

pub fn build_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .build()
        .expect("failed to build http client")
}

pub async fn fetch_html(client: &Client, url: &str) -> anyhow::Result<String> {
    let res = client.get(url).send().await?;

    let status = res.status();
    if !status.is_success() {
        anyhow::bail!("HTTP {} for {}", status, url);
    }

    Ok(res.text().await?)
}
