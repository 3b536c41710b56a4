//! Askama templates for the landing page.

use askama::Template;

use crate::models::StationMetadata;

/// Station listing rendered at `/`.
#[derive(Template)]
#[template(path = "stations.html")]
pub struct StationsTemplate {
    pub stations: Vec<StationView>,
}

/// Station view model for the listing table.
#[derive(Debug, Clone)]
pub struct StationView {
    pub staid: String,
    pub name: String,
    pub country: String,
}

impl StationView {
    pub fn from_station(station: &StationMetadata) -> Self {
        Self {
            staid: station.padded_id(),
            name: station.name.clone(),
            country: station.country.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stations_template_renders_listing() {
        let template = StationsTemplate {
            stations: vec![StationView {
                staid: "000001".to_string(),
                name: "VAEXJOE".to_string(),
                country: "SE".to_string(),
            }],
        };

        let html = template.render().unwrap();
        assert!(html.contains("000001"));
        assert!(html.contains("VAEXJOE"));
        assert!(html.contains("SE"));
    }
}
