use crate::evolution::{self, EvolutionSequence};
use requester::pokeapi::PokemonData;
use requester::PokeApi;

/// Everything the details screen shows for one creature.
#[derive(Debug, Clone)]
pub struct Details {
    pub pokemon: PokemonData,
    pub evolutions: EvolutionSequence,
}

/// `Tapu Koko` -> `tapu-koko`, the form the catalog expects in its paths.
pub fn normalize_identifier(identifier: &str) -> String {
    identifier
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Pokemon, then its species, then the evolution chain named by the species.
/// Each request needs the previous response, so they run one after another
/// and the first failure ends the whole thing.
pub async fn fetch_details<A>(api: &A, identifier: &str) -> requester::Result<Details>
where
    A: PokeApi + ?Sized,
{
    let identifier = normalize_identifier(identifier);

    let pokemon = api.pokemon(&identifier).await?;
    log::debug!("Got {} (species at {})", pokemon.name, pokemon.species.url);

    let species = api.species(&pokemon.species.url).await?;
    log::debug!(
        "Got species {} (evolution chain at {})",
        species.name,
        species.evolution_chain.url
    );

    let chain = api.evolution_chain(&species.evolution_chain.url).await?;
    let evolutions = evolution::extract(&chain.chain);
    log::debug!(
        "Evolution chain #{}: {}",
        chain.id,
        evolutions.names().join(" -> ")
    );

    Ok(Details {
        pokemon,
        evolutions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert_eq!(normalize_identifier("pikachu"), "pikachu");
        assert_eq!(normalize_identifier("  Pikachu "), "pikachu");
        assert_eq!(normalize_identifier("Mr. Mime"), "mr.-mime");
        assert_eq!(normalize_identifier("25"), "25");
        assert_eq!(normalize_identifier("tapu  koko"), "tapu-koko");
    }
}
