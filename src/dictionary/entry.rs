use serde::Deserialize;

/// One dictionary entry as returned by the API. A lookup yields a list of
/// these, commonly of length 1.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default, rename = "sourceUrls")]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}
