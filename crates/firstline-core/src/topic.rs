use serde::{Deserialize, Serialize};

/// One entry in the static first-aid knowledge base. Immutable after load.
///
/// `keywords` exists only for matching and is excluded from serialized
/// output; `steps` is an ordered procedure, `dos`/`donts` are unordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstAidTopic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub steps: Vec<String>,
    pub dos: Vec<String>,
    pub donts: Vec<String>,
    pub source: String,
    #[serde(skip_serializing, default)]
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::FirstAidTopic;

    #[test]
    fn keywords_are_not_serialized() {
        let topic = FirstAidTopic {
            id: "cpr".to_string(),
            title: "CPR".to_string(),
            description: "Cardiopulmonary resuscitation".to_string(),
            steps: vec!["Check responsiveness".to_string()],
            dos: Vec::new(),
            donts: Vec::new(),
            source: "test".to_string(),
            keywords: vec!["cardiac arrest".to_string()],
        };
        let value = serde_json::to_value(&topic).expect("serialize topic");
        assert!(value.get("keywords").is_none());
        assert_eq!(value["id"], "cpr");
        assert_eq!(value["steps"][0], "Check responsiveness");
    }
}
