//! Text rendering of the details screen.
//!
//! Everything here reads a [`ScreenState`] and produces a `String`; nothing
//! in this module touches the network or mutates state.

use crate::config::Config;
use crate::evolution::{self, SPRITE_ENDPOINT};
use crate::fetcher::Details;
use crate::screen::{ScreenState, Tab};
use colorful::Colorful;
use std::fmt::{self, Write as _};

const STAT_LABEL_WIDTH: usize = 16;
const SKELETON_WIDTH: usize = 24;

const TYPE_COLORS: [(&str, &str); 18] = [
    ("normal", "#A8A77A"),
    ("fire", "#EE8130"),
    ("water", "#6390F0"),
    ("electric", "#F7D02C"),
    ("grass", "#7AC74C"),
    ("ice", "#96D9D6"),
    ("fighting", "#C22E28"),
    ("poison", "#A33EA1"),
    ("ground", "#E2BF65"),
    ("flying", "#A98FF3"),
    ("psychic", "#F95587"),
    ("bug", "#A6B91A"),
    ("rock", "#B6A136"),
    ("ghost", "#735797"),
    ("dragon", "#6F35FC"),
    ("dark", "#705746"),
    ("steel", "#B7B7CE"),
    ("fairy", "#D685AD"),
];

pub fn type_color(name: &str) -> Option<&'static str> {
    TYPE_COLORS
        .iter()
        .find(|(t, _)| *t == name)
        .map(|(_, color)| *color)
}

fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// How much of a bar a base stat fills. Anything above 100 is a full bar.
#[inline]
pub fn display_fraction(value: i64) -> f64 {
    value.min(100).max(0) as f64 / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatBar {
    pub label: String,
    pub value: i64,
    pub fill: usize,
    pub width: usize,
}

impl StatBar {
    pub fn new(label: &str, value: i64, width: usize) -> Self {
        let fill = (display_fraction(value) * width as f64).round() as usize;

        Self {
            label: label.to_uppercase(),
            value,
            fill: fill.min(width),
            width,
        }
    }

    fn filled(&self) -> String {
        "█".repeat(self.fill)
    }

    fn empty(&self) -> String {
        "░".repeat(self.width - self.fill)
    }
}

impl fmt::Display for StatBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<w$}[{}{}] {}",
            self.label,
            self.filled(),
            self.empty(),
            self.value,
            w = STAT_LABEL_WIDTH
        )
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    pub bar_width: usize,
    pub move_limit: usize,
    pub sprite_endpoint: String,
    pub colored: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            bar_width: 30,
            move_limit: 20,
            sprite_endpoint: SPRITE_ENDPOINT.to_owned(),
            colored: false,
        }
    }
}

impl Renderer {
    pub fn from_config(config: &Config) -> Self {
        Self {
            bar_width: config.bar_width,
            move_limit: config.move_limit,
            sprite_endpoint: config.sprite_endpoint.to_owned(),
            colored: config.colored,
        }
    }

    /// Colours only make sense on a terminal; piped output stays plain.
    pub fn for_terminal(mut self, is_tty: bool) -> Self {
        self.colored &= is_tty;
        self
    }

    /// Blank while there is nothing to show, a skeleton while loading.
    pub fn render(&self, state: &ScreenState) -> String {
        if state.loading {
            return self.skeleton();
        }

        match state.details.as_ref() {
            Some(details) => self.details(details, state.tab),
            None => String::new(),
        }
    }

    pub fn skeleton(&self) -> String {
        let block = "▒".repeat(SKELETON_WIDTH);
        let short = "▒".repeat(SKELETON_WIDTH * 6 / 10);

        format!("{0}\n{1}\n{0}\n{0}\n", block, short)
    }

    pub fn stat_bars(&self, details: &Details) -> Vec<StatBar> {
        details
            .pokemon
            .stats
            .iter()
            .map(|s| StatBar::new(&s.stat.name, s.base_stat, self.bar_width))
            .collect()
    }

    fn paint(&self, text: &str, color: Option<&str>) -> String {
        match color.and_then(hex_to_rgb) {
            Some((r, g, b)) if self.colored => text.rgb(r, g, b).to_string(),
            _ => text.to_owned(),
        }
    }

    fn details(&self, details: &Details, tab: Tab) -> String {
        let pokemon = &details.pokemon;
        let main_color = pokemon.main_type().and_then(type_color);
        let mut out = String::new();

        let title = pokemon.name.to_uppercase();
        let _ = writeln!(out, "{}", self.paint(&title, main_color));

        let tabs = Tab::ALL
            .iter()
            .map(|t| {
                let label = t.as_str().to_uppercase();
                if *t == tab {
                    format!("[{}]", label)
                } else {
                    format!(" {} ", label)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{}", tabs);

        let badges = pokemon
            .type_names()
            .map(|t| self.paint(&format!("({})", t), type_color(t)))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{}", badges);

        if let Some(front) = pokemon.sprites.front_default.as_ref() {
            let _ = writeln!(out, "Front: {}", front);
        }

        if let Some(back) = pokemon.sprites.back_default.as_ref() {
            let _ = writeln!(out, "Back: {}", back);
        }

        out.push('\n');

        match tab {
            Tab::Info => self.info_tab(&mut out, details),
            Tab::Stats => self.stats_tab(&mut out, details, main_color),
            Tab::Moves => self.moves_tab(&mut out, details),
        }

        out
    }

    fn info_tab(&self, out: &mut String, details: &Details) {
        let pokemon = &details.pokemon;
        let _ = writeln!(out, "Height: {}", pokemon.height);
        let _ = writeln!(out, "Weight: {}", pokemon.weight);

        out.push_str("\nAbilities\n");
        for ability in pokemon.ability_names() {
            let _ = writeln!(out, "• {}", ability);
        }

        out.push_str("\nEvolution Chain\n");
        if details.evolutions.is_empty() {
            return;
        }

        let _ = writeln!(out, "{}", details.evolutions.names().join(" → "));
        for name in details.evolutions.iter() {
            let sprite = evolution::sprite_url_with(
                &self.sprite_endpoint,
                name,
                details.evolutions.names(),
            );

            let _ = writeln!(out, "• {}: {}", name, sprite.as_deref().unwrap_or("?"));
        }
    }

    fn stats_tab(&self, out: &mut String, details: &Details, color: Option<&str>) {
        out.push_str("Base Stats\n");

        for bar in self.stat_bars(details) {
            let line = format!(
                "{:<w$}[{}{}] {}",
                bar.label,
                self.paint(&bar.filled(), color),
                bar.empty(),
                bar.value,
                w = STAT_LABEL_WIDTH
            );

            let _ = writeln!(out, "{}", line);
        }
    }

    fn moves_tab(&self, out: &mut String, details: &Details) {
        out.push_str("Moves\n");

        for name in details.pokemon.move_names().take(self.move_limit) {
            let _ = writeln!(out, "• {}", name);
        }
    }
}
