use crate::{Error, Reqwest, Result};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const API_ENDPOINT: &str = "https://pokeapi.co/api/v2/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokeApiData {
    pub name: String,
    pub url: String,
}

/// A link without a name, such as `evolution_chain` on a species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokeApiLink {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonData {
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub abilities: Vec<Ability>,
    pub types: Vec<Type>,
    pub sprites: Sprites,
    pub stats: Vec<Stat>,
    pub moves: Vec<Move>,
    pub species: PokeApiData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ability {
    pub ability: PokeApiData,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Move {
    #[serde(rename = "move")]
    pub move_field: PokeApiData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub base_stat: i64,
    #[serde(default)]
    pub effort: i64,
    pub stat: PokeApiData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Type {
    #[serde(default)]
    pub slot: i64,
    #[serde(rename = "type")]
    pub type_field: PokeApiData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesData {
    pub name: String,
    pub evolution_chain: PokeApiLink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChainData {
    pub id: i64,
    pub chain: ChainLink,
}

/// One node of an evolution tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: PokeApiData,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl PokemonData {
    #[inline]
    pub fn ability_names(&self) -> impl Iterator<Item = &str> {
        self.abilities.iter().map(|a| a.ability.name.as_str())
    }

    #[inline]
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.type_field.name.as_str())
    }

    #[inline]
    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(|m| m.move_field.name.as_str())
    }

    /// The first listed type, which decides the colour of the screen
    pub fn main_type(&self) -> Option<&str> {
        self.type_names().next()
    }
}

#[async_trait]
pub trait PokeApi: Sync {
    async fn pokemon(&self, identifier: &str) -> Result<PokemonData>;
    async fn species(&self, url: &str) -> Result<SpeciesData>;
    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChainData>;
}

/// A [`Reqwest`] client bound to a catalog endpoint.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Reqwest,
    endpoint: Url,
}

impl PokeApiClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Reqwest::builder().timeout(timeout).build()?;
        Self::with_client(client, endpoint)
    }

    pub fn with_client(client: Reqwest, endpoint: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason,
        };

        let endpoint = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if endpoint.cannot_be_a_base() {
            return Err(invalid(String::from("not a base url")));
        }

        Ok(Self { client, endpoint })
    }

    #[inline]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// The identifier is a single path segment, so `/`, `?` and `#` get
    /// percent-encoded instead of reshaping the request.
    pub fn pokemon_url(&self, identifier: &str) -> Url {
        let mut url = self.endpoint.clone();

        // checked in `with_client`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("pokemon").push(identifier);
        }

        url
    }
}

#[async_trait]
impl PokeApi for PokeApiClient {
    async fn pokemon(&self, identifier: &str) -> Result<PokemonData> {
        get_json(&self.client, self.pokemon_url(identifier).as_str()).await
    }

    async fn species(&self, url: &str) -> Result<SpeciesData> {
        get_json(&self.client, url).await
    }

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChainData> {
        get_json(&self.client, url).await
    }
}

async fn get_json<T: DeserializeOwned>(client: &Reqwest, url: &str) -> Result<T> {
    log::debug!("GET {}", url);
    let res = client.get(url).send().await?;
    let status = res.status();

    if status == StatusCode::NOT_FOUND {
        return Err(Error::NotFound {
            url: url.to_owned(),
        });
    }

    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }

    let body = res.bytes().await?;
    serde_json::from_slice(&body).map_err(|source| Error::Decode {
        url: url.to_owned(),
        source,
    })
}
