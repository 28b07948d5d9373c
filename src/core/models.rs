use serde::{
    Deserialize,
    Serialize,
};

/// One vocabulary entry as the remote store returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub video_url: String,
}

impl WordRecord {
    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image_url)
    }

    pub fn video(&self) -> Option<&str> {
        non_empty(&self.video_url)
    }

    pub fn fields(&self) -> WordFields {
        WordFields {
            word: self.word.clone(),
            definition: self.definition.clone(),
            image_url: self.image_url.clone(),
            video_url: self.video_url.clone(),
        }
    }
}

/// The four editable fields, sent as-is on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFields {
    pub word: String,
    pub definition: String,
    pub image_url: String,
    pub video_url: String,
}

/// Partial update body for `PUT /words/{id}`.
///
/// There is no id field: the identifier travels only in the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl WordPatch {
    pub fn is_empty(&self) -> bool {
        self.word.is_none()
            && self.definition.is_none()
            && self.image_url.is_none()
            && self.video_url.is_none()
    }
}

impl From<WordFields> for WordPatch {
    fn from(fields: WordFields) -> Self {
        Self {
            word: Some(fields.word),
            definition: Some(fields.definition),
            image_url: Some(fields.image_url),
            video_url: Some(fields.video_url),
        }
    }
}

// Drops the record's id on the way through.
impl From<WordRecord> for WordPatch {
    fn from(record: WordRecord) -> Self {
        Self {
            word: Some(record.word),
            definition: Some(record.definition),
            image_url: Some(record.image_url),
            video_url: Some(record.video_url),
        }
    }
}

/// Response envelope of `GET /words`.
#[derive(Debug, Default, Deserialize)]
pub struct WordsEnvelope {
    #[serde(default)]
    pub words: Vec<WordRecord>,
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
