#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not fetch the data: {0}")]
    Request(reqwest::Error),
    #[error("no definitions found ({0})")]
    NotFound(reqwest::StatusCode),
    #[error("could not decode the response: {0}")]
    Malformed(reqwest::Error),
}
