pub mod episode_list;
pub mod previous_config;
pub mod show_config;

pub use episode_list::{EpisodeEntry, EpisodeList};
pub use previous_config::{PreviousConfig, PreviousEpisode};
pub use show_config::{EpisodeConfig, LocalizedEpisode, LocalizedName, ShowConfig, ShowName};
