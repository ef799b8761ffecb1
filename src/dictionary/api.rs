use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::Error;

use super::entry::Entry;

const API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

pub async fn lookup(client: reqwest::Client, word: String) -> Result<Vec<Entry>, Error> {
    let term = word.trim();
    let url = format!("{API_URL}/{}", utf8_percent_encode(term, NON_ALPHANUMERIC));
    tracing::debug!(%term, "looking up word");

    let response = client.get(&url).send().await.map_err(Error::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::NotFound(status));
    }

    response.json::<Vec<Entry>>().await.map_err(Error::Malformed)
}
