use std::collections::BTreeSet;

use crate::models::place::Place;
use crate::view::model::PlaceCard;
use crate::view::node::{el, Node};
use crate::view::render::{render_place_card, PLACES_LIST_ID};

pub const ALL_COUNTRIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryFilter {
    All,
    Country(String),
}

impl CountryFilter {
    /// Maps a `<select>` value to a filter; "all" and blank select everything.
    pub fn from_selection(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_COUNTRIES) {
            CountryFilter::All
        } else {
            CountryFilter::Country(value.to_string())
        }
    }

    pub fn matches(&self, location_text: &str) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::Country(country) => location_text.contains(country.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ListingEntry {
    card: PlaceCard,
    visible: bool,
}

/// The rendered listing, kept so the country filter can work without a re-fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceListView {
    entries: Vec<ListingEntry>,
    countries: Vec<String>,
}

impl PlaceListView {
    pub fn new(places: &[Place]) -> Self {
        let countries: BTreeSet<String> = places
            .iter()
            .map(|p| p.country.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        Self {
            entries: places
                .iter()
                .map(|place| ListingEntry {
                    card: PlaceCard::from(place),
                    visible: true,
                })
                .collect(),
            countries: countries.into_iter().collect(),
        }
    }

    /// Distinct countries, sorted, for the filter options.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn apply_filter(&mut self, filter: &CountryFilter) {
        for entry in &mut self.entries {
            entry.visible = filter.matches(&entry.card.location_text);
        }
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.visible).count()
    }

    pub fn render(&self) -> Node {
        el("section")
            .id(PLACES_LIST_ID)
            .children(
                self.entries
                    .iter()
                    .map(|entry| render_place_card(&entry.card, !entry.visible)),
            )
            .build()
    }
}
