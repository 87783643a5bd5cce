extern crate config as lib_config;

pub mod config;
pub mod evolution;
pub mod fetcher;
pub mod logger;
pub mod render;
pub mod screen;

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

pub use requester;

pub use crate::config::Config;
pub use evolution::{extract, sprite_url, EvolutionSequence};
pub use fetcher::{fetch_details, Details};
pub use render::Renderer;
pub use screen::{DetailsScreen, FetchFailure, ScreenState, Tab, Ticket};

use std::error::Error;
