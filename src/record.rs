use serde::{Deserialize, Serialize};

// One labeled prompt. Most records carry `tags`, one carries `completion`
// instead; whichever is absent is left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<Vec<String>>,
}

impl Record {
    pub fn tagged(prompt: &str, tags: &[&str]) -> Self {
        Record {
            prompt: prompt.to_string(),
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            completion: None,
        }
    }

    pub fn completed(prompt: &str, completion: &[&str]) -> Self {
        Record {
            prompt: prompt.to_string(),
            tags: None,
            completion: Some(completion.iter().map(|c| c.to_string()).collect()),
        }
    }

    // Label list regardless of which field holds it
    pub fn labels(&self) -> &[String] {
        self.tags
            .as_deref()
            .or(self.completion.as_deref())
            .unwrap_or(&[])
    }
}
