#![allow(dead_code)]

use serde_json::{json, Value};

pub fn pokemon_json(name: &str, types: &[&str], stats: &[(&str, i64)], species_url: &str) -> Value {
    json!({
        "id": 25,
        "name": name,
        "height": 4,
        "weight": 60,
        "abilities": [
            { "ability": { "name": "static", "url": "" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod", "url": "" }, "is_hidden": true, "slot": 3 }
        ],
        "types": types
            .iter()
            .enumerate()
            .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
            .collect::<Vec<_>>(),
        "sprites": {
            "front_default": format!("https://example.test/front/{}.png", name),
            "back_default": format!("https://example.test/back/{}.png", name)
        },
        "stats": stats
            .iter()
            .map(|(stat, value)| json!({ "base_stat": value, "effort": 0, "stat": { "name": stat, "url": "" } }))
            .collect::<Vec<_>>(),
        "moves": (0..25)
            .map(|i| json!({ "move": { "name": format!("move-{}", i), "url": "" } }))
            .collect::<Vec<_>>(),
        "species": { "name": name, "url": species_url }
    })
}

pub fn species_json(name: &str, chain_url: &str) -> Value {
    json!({
        "name": name,
        "evolution_chain": { "url": chain_url }
    })
}

/// `pichu -> pikachu -> raichu`
pub fn pikachu_chain_json() -> Value {
    json!({
        "id": 10,
        "chain": {
            "species": { "name": "pichu", "url": "" },
            "evolves_to": [{
                "species": { "name": "pikachu", "url": "" },
                "evolves_to": [{
                    "species": { "name": "raichu", "url": "" },
                    "evolves_to": []
                }]
            }]
        }
    })
}

pub const PIKACHU_STATS: [(&str, i64); 6] = [
    ("hp", 35),
    ("attack", 55),
    ("defense", 40),
    ("special-attack", 50),
    ("special-defense", 50),
    ("speed", 90),
];

pub const RAICHU_STATS: [(&str, i64); 6] = [
    ("hp", 60),
    ("attack", 90),
    ("defense", 55),
    ("special-attack", 90),
    ("special-defense", 80),
    ("speed", 110),
];
