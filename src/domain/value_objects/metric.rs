use std::cmp::Ordering;

pub const INFECTED: &str = "infected";
pub const DEATHS: &str = "deaths";
pub const ICU: &str = "icu";
pub const STOCKHOLM: &str = "stockholm";

/// Known metrics in display order, with the labels used by the published source.
const CATALOGUE: &[(&str, &str)] = &[
    (INFECTED, "Bekräftat smittade"),
    (DEATHS, "Avlidna"),
    (ICU, "Intensivvårdade"),
    (STOCKHOLM, "Varav i Stockholm"),
];

/// Human-readable label for a metric; unknown metrics fall back to their name.
#[must_use]
pub fn label(metric: &str) -> &str {
    CATALOGUE
        .iter()
        .find(|(name, _)| *name == metric)
        .map_or(metric, |(_, label)| *label)
}

fn position(metric: &str) -> Option<usize> {
    CATALOGUE.iter().position(|(name, _)| *name == metric)
}

/// Display ordering: catalogue metrics first, then the rest alphabetically.
#[must_use]
pub fn display_order(a: &str, b: &str) -> Ordering {
    match (position(a), position(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
