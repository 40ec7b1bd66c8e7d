use indexmap::IndexMap;
use serde::Deserialize;

/// Response body of `GET /breeds/list/all`
///
/// `message` maps each breed to its sub-breeds. An `IndexMap` keeps the
/// document's key order, which is the order the grid shows.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BreedsResponse {
    pub message: IndexMap<String, Vec<String>>,
    pub status: String,
}

impl BreedsResponse {
    /// Top-level breed names, in document order
    pub fn breed_names(&self) -> Vec<String> {
        self.message.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_names_keep_document_order() {
        let json = r#"{"message": {"whippet": [], "akita": []}, "status": "success"}"#;
        let resp: BreedsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.breed_names(), vec!["whippet", "akita"]);
    }

    #[test]
    fn test_breed_names_ignore_sub_breeds() {
        let json = r#"{"message": {"akita": [], "beagle": ["harrier", "walker"]}, "status": "success"}"#;
        let resp: BreedsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.breed_names(), vec!["akita", "beagle"]);
    }

    #[test]
    fn test_missing_status_is_rejected() {
        let json = r#"{"message": {"akita": []}}"#;
        assert!(serde_json::from_str::<BreedsResponse>(json).is_err());
    }

    #[test]
    fn test_non_map_message_is_rejected() {
        let json = r#"{"message": ["akita", "beagle"], "status": "success"}"#;
        assert!(serde_json::from_str::<BreedsResponse>(json).is_err());
    }
}
