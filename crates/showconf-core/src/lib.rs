pub mod build;
pub mod fetch;
pub mod source;

pub use build::{build_episode_list, build_show_config, BuildError};
pub use fetch::{
    canonical_seasons, fetch_episode_listing, fetch_show, flatten_languages, FetchedShow,
};
pub use source::ShowSource;

#[cfg(test)]
mod testing;
