use requester::pokeapi::ChainLink;

pub const SPRITE_ENDPOINT: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/";

/// Species names of an evolution tree, in pre-order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvolutionSequence(Vec<String>);

impl EvolutionSequence {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// 1-based position of the first entry called `name`
    pub fn catalog_index(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|v| v == name).map(|i| i + 1)
    }

    #[inline]
    pub fn sprite_url(&self, name: &str) -> Option<String> {
        sprite_url_with(SPRITE_ENDPOINT, name, &self.0)
    }
}

impl From<Vec<String>> for EvolutionSequence {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl PartialEq<[&str]> for EvolutionSequence {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for EvolutionSequence {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}

/// Flatten an evolution tree depth-first: a node, then each of its branches
/// fully expanded in array order before the next sibling.
///
/// `A -> [B -> [D], C]` becomes `[A, B, D, C]`.
pub fn extract<'a, C: Into<Option<&'a ChainLink>>>(chain: C) -> EvolutionSequence {
    let mut names = Vec::new();

    if let Some(root) = chain.into() {
        let mut stack = vec![root];

        while let Some(link) = stack.pop() {
            names.push(link.species.name.to_owned());
            stack.extend(link.evolves_to.iter().rev());
        }
    }

    EvolutionSequence(names)
}

/// Sprite address of `name`, numbered by its 1-based position in `sequence`.
///
/// The position only matches the sprite repository's numbering by
/// coincidence of how chains are listed upstream. Returns `None` when the
/// name is not part of the sequence instead of pointing at `0.png`.
#[inline]
pub fn sprite_url(name: &str, sequence: &[String]) -> Option<String> {
    sprite_url_with(SPRITE_ENDPOINT, name, sequence)
}

pub fn sprite_url_with(endpoint: &str, name: &str, sequence: &[String]) -> Option<String> {
    let index = sequence.iter().position(|v| v == name)? + 1;
    let sep = if endpoint.ends_with('/') { "" } else { "/" };

    Some(format!("{}{}{}.png", endpoint, sep, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use requester::pokeapi::PokeApiData;

    fn link(name: &str, evolves_to: Vec<ChainLink>) -> ChainLink {
        ChainLink {
            species: PokeApiData {
                name: name.to_owned(),
                url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", name),
            },
            evolves_to,
        }
    }

    fn count(link: &ChainLink) -> usize {
        1 + link.evolves_to.iter().map(count).sum::<usize>()
    }

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn absent_tree_is_empty() {
        assert!(extract(None::<&ChainLink>).is_empty());
    }

    #[test]
    fn single_node() {
        let tree = link("tauros", vec![]);
        assert_eq!(extract(&tree), ["tauros"]);
    }

    #[test]
    fn linear_chain() {
        let tree = link("pichu", vec![link("pikachu", vec![link("raichu", vec![])])]);
        assert_eq!(extract(&tree), ["pichu", "pikachu", "raichu"]);
    }

    #[test]
    fn preorder_not_level_order() {
        let tree = link(
            "A",
            vec![link("B", vec![link("D", vec![])]), link("C", vec![])],
        );

        assert_eq!(extract(&tree), ["A", "B", "D", "C"]);
    }

    #[test]
    fn deep_branches_keep_sibling_order() {
        let tree = link(
            "oddish",
            vec![link(
                "gloom",
                vec![link("vileplume", vec![]), link("bellossom", vec![])],
            )],
        );

        assert_eq!(extract(&tree), ["oddish", "gloom", "vileplume", "bellossom"]);
    }

    #[test]
    fn length_matches_node_count_and_is_stable() {
        let tree = link(
            "eevee",
            ["vaporeon", "jolteon", "flareon", "espeon", "umbreon", "leafeon", "glaceon", "sylveon"]
                .iter()
                .map(|n| link(n, vec![]))
                .collect(),
        );

        let first = extract(&tree);
        assert_eq!(first.len(), count(&tree));
        assert_eq!(first, extract(&tree));
        assert_eq!(first.iter().next(), Some("eevee"));
    }

    #[test]
    fn sprite_url_uses_one_based_position() {
        let seq = names(&["bulbasaur", "ivysaur", "venusaur"]);
        let url = sprite_url("ivysaur", &seq).unwrap();

        assert!(url.ends_with("2.png"));
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/2.png"
        );

        for (i, name) in seq.iter().enumerate() {
            let url = sprite_url(name, &seq).unwrap();
            assert!(url.ends_with(&format!("/{}.png", i + 1)));
        }
    }

    #[test]
    fn sprite_url_absent_name() {
        let seq = names(&["bulbasaur", "ivysaur"]);
        assert_eq!(sprite_url("charmander", &seq), None);
        assert_eq!(sprite_url("bulbasaur", &[]), None);
    }

    #[test]
    fn sprite_url_first_occurrence_wins() {
        let seq = EvolutionSequence::from(names(&["a", "b", "a"]));
        assert_eq!(seq.catalog_index("a"), Some(1));
        assert!(seq.sprite_url("a").unwrap().ends_with("/1.png"));
    }

    #[test]
    fn custom_endpoint_without_slash() {
        let seq = names(&["a", "b"]);
        assert_eq!(
            sprite_url_with("http://localhost/sprites", "b", &seq).as_deref(),
            Some("http://localhost/sprites/2.png")
        );
    }
}
