#[macro_use]
extern crate async_trait;

pub mod error;
pub mod pokeapi;

pub use error::Error;
pub use pokeapi::{PokeApi, PokeApiClient};

pub use reqwest::Client as Reqwest;

pub type Result<T> = std::result::Result<T, Error>;
