use serde::Deserialize;
use serde_json::Value;

/// A previously emitted configuration, read wholesale so that timing
/// metadata not available from TMDB can be carried forward.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviousConfig {
    #[serde(rename = "commonTimings")]
    pub common_timings: Value,
    pub episodes: Vec<PreviousEpisode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviousEpisode {
    pub season_number: u32,
    pub episode_number: u32,
    pub timings: Value,
}

impl PreviousConfig {
    /// Timing payload recorded for an episode, matched exactly on
    /// (season_number, episode_number).
    pub fn timings_for(&self, season_number: u32, episode_number: u32) -> Option<&Value> {
        self.episodes
            .iter()
            .find(|episode| {
                episode.season_number == season_number && episode.episode_number == episode_number
            })
            .map(|episode| &episode.timings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> PreviousConfig {
        serde_json::from_value(json!({
            "commonTimings": {"introLength": 90},
            "episodes": [
                {"season_number": 1, "episode_number": 1, "timings": {"introStart": 10}},
                {"season_number": 1, "episode_number": 2, "timings": {"introStart": 25}},
                {"season_number": 2, "episode_number": 1, "timings": {"introStart": 0}}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_timings_lookup_exact_match() {
        let config = sample();
        assert_eq!(
            config.timings_for(1, 2),
            Some(&json!({"introStart": 25}))
        );
        assert_eq!(config.timings_for(2, 1), Some(&json!({"introStart": 0})));
    }

    #[test]
    fn test_timings_lookup_miss() {
        let config = sample();
        assert_eq!(config.timings_for(2, 2), None);
        assert_eq!(config.timings_for(3, 1), None);
    }
}
