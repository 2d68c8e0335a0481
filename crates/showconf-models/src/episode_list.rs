use serde::{Deserialize, Serialize};

/// Flat single-language listing emitted by `showconf episodes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EpisodeList {
    pub entries: Vec<EpisodeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EpisodeEntry {
    pub name: String,
    /// Always serialized, even when TMDB has no overview. This is
    /// deliberately different from the config builder, which drops the key.
    pub overview: String,
    pub season: u32,
    pub episode: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_overview_is_still_serialized() {
        let entry = EpisodeEntry {
            name: "Pilot".to_string(),
            overview: String::new(),
            season: 1,
            episode: 1,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({"name": "Pilot", "overview": "", "season": 1, "episode": 1})
        );
    }
}
