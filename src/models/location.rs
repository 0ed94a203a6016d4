//! Location-area DTOs
//!
//! Shapes of the paginated location-area listing and of a single area's
//! encounter table.

use serde::Deserialize;

/// A `{name, url}` reference as PokeAPI embeds them everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of the location-area listing.
///
/// `next` and `previous` are absolute locators, or `None` at either end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of areas across all pages
    #[serde(default)]
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A single location area and the Pokemon that can be encountered there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationAreaDetail {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub pokemon_encounters: Vec<Encounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

impl LocationAreaDetail {
    /// Names of the encounterable Pokemon in server order.
    pub fn pokemon_names(&self) -> Vec<String> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialize() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;
        let page: LocationAreaPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.count, 1089);
        assert!(page.previous.is_none());
        assert_eq!(
            page.next.as_deref(),
            Some("https://pokeapi.co/api/v2/location-area/?offset=20&limit=20")
        );
        assert_eq!(page.results[1].name, "eterna-city-area");
    }

    #[test]
    fn test_page_minimal_shape() {
        let json = r#"{"next": "p2", "previous": null, "results": [{"name": "a"}]}"#;
        let page: LocationAreaPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.count, 0);
        assert_eq!(page.results[0].name, "a");
        assert_eq!(page.results[0].url, "");
    }

    #[test]
    fn test_page_missing_results_is_rejected() {
        let json = r#"{"next": null, "previous": null}"#;
        assert!(serde_json::from_str::<LocationAreaPage>(json).is_err());
    }

    #[test]
    fn test_detail_pokemon_names() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}},
                {"pokemon": {"name": "tentacruel", "url": "https://pokeapi.co/api/v2/pokemon/73/"}}
            ]
        }"#;
        let detail: LocationAreaDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.id, 1);
        assert_eq!(detail.pokemon_names(), vec!["tentacool", "tentacruel"]);
    }
}
