use foundation::math::stable_total_cmp_f64;

use crate::wire::FeedDocument;

/// How many approaches the demo keeps after sorting by miss distance.
pub const CLOSEST_LIMIT: usize = 5;

/// One near-Earth object close approach, flattened from the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct NeoApproach {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub close_approach_date: String,
    pub miss_distance_km: f64,
    /// Maximum estimated diameter.
    pub estimated_diameter_m: f64,
    pub relative_velocity_kmh: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Transport-level failure (DNS, TLS, timeouts).
    Transport(String),
    /// Non-success HTTP status from the feed endpoint.
    Http { status: u16 },
    /// The response body was not a feed document.
    Parse(String),
    /// A numeric field arrived unparseable.
    BadNumber { object: String, field: &'static str },
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Transport(msg) => write!(f, "feed fetch failed: {msg}"),
            FeedError::Http { status } => write!(f, "feed endpoint returned HTTP {status}"),
            FeedError::Parse(msg) => write!(f, "feed document parse failed: {msg}"),
            FeedError::BadNumber { object, field } => {
                write!(f, "feed object {object:?} has unparseable {field}")
            }
        }
    }
}

impl std::error::Error for FeedError {}

/// Strips the parenthesis decoration NeoWs puts around designations,
/// e.g. `"(2024 PT5)"` -> `"2024 PT5"`.
fn clean_name(name: &str) -> String {
    name.chars().filter(|c| *c != '(' && *c != ')').collect()
}

/// Parses a feed document and flattens every date into one approach list.
///
/// Objects with no close-approach entry are skipped (the feed includes a
/// handful of these); stringly-typed numbers surface as `BadNumber` rather
/// than silently dropping the object.
pub fn parse_feed(json: &str) -> Result<Vec<NeoApproach>, FeedError> {
    let doc: FeedDocument =
        serde_json::from_str(json).map_err(|e| FeedError::Parse(e.to_string()))?;

    let mut approaches = Vec::new();
    for objects in doc.near_earth_objects.into_values() {
        for object in objects {
            let Some(approach) = object.close_approach_data.into_iter().next() else {
                continue;
            };

            let name = clean_name(&object.name);
            let miss_distance_km: f64 =
                approach
                    .miss_distance
                    .kilometers
                    .parse()
                    .map_err(|_| FeedError::BadNumber {
                        object: name.clone(),
                        field: "miss_distance.kilometers",
                    })?;
            let relative_velocity_kmh: f64 = approach
                .relative_velocity
                .kilometers_per_hour
                .parse()
                .map_err(|_| FeedError::BadNumber {
                    object: name.clone(),
                    field: "relative_velocity.kilometers_per_hour",
                })?;

            approaches.push(NeoApproach {
                name,
                close_approach_date: approach.close_approach_date,
                miss_distance_km,
                estimated_diameter_m: object.estimated_diameter.meters.estimated_diameter_max,
                relative_velocity_kmh,
            });
        }
    }

    Ok(approaches)
}

/// Sorts ascending by miss distance and keeps the `limit` closest.
///
/// Ties break by name so the roster order is stable across runs.
pub fn closest_approaches(mut approaches: Vec<NeoApproach>, limit: usize) -> Vec<NeoApproach> {
    approaches.sort_by(|a, b| {
        stable_total_cmp_f64(a.miss_distance_km, b.miss_distance_km)
            .then_with(|| a.name.cmp(&b.name))
    });
    approaches.truncate(limit);
    approaches
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{FeedError, NeoApproach, closest_approaches, parse_feed};

    fn object(name: &str, date: &str, miss_km: &str, diameter_m: f64, vel_kmh: &str) -> String {
        format!(
            r#"{{
                "name": "{name}",
                "estimated_diameter": {{
                    "meters": {{ "estimated_diameter_min": 1.0, "estimated_diameter_max": {diameter_m} }}
                }},
                "close_approach_data": [{{
                    "close_approach_date": "{date}",
                    "miss_distance": {{ "kilometers": "{miss_km}" }},
                    "relative_velocity": {{ "kilometers_per_hour": "{vel_kmh}" }}
                }}]
            }}"#
        )
    }

    fn feed_json(days: &[(&str, Vec<String>)]) -> String {
        let days: Vec<String> = days
            .iter()
            .map(|(date, objects)| format!(r#""{date}": [{}]"#, objects.join(",")))
            .collect();
        format!(r#"{{ "near_earth_objects": {{ {} }} }}"#, days.join(","))
    }

    #[test]
    fn flattens_dates_and_parses_figures() {
        let json = feed_json(&[
            (
                "2026-08-06",
                vec![object("(2024 PT5)", "2026-08-06", "384400.5", 42.5, "25000.0")],
            ),
            (
                "2026-08-07",
                vec![object("433 Eros", "2026-08-07", "120000.25", 16800.0, "90123.75")],
            ),
        ]);

        let approaches = parse_feed(&json).unwrap();
        assert_eq!(
            approaches,
            vec![
                NeoApproach {
                    name: "2024 PT5".to_string(),
                    close_approach_date: "2026-08-06".to_string(),
                    miss_distance_km: 384400.5,
                    estimated_diameter_m: 42.5,
                    relative_velocity_kmh: 25000.0,
                },
                NeoApproach {
                    name: "433 Eros".to_string(),
                    close_approach_date: "2026-08-07".to_string(),
                    miss_distance_km: 120000.25,
                    estimated_diameter_m: 16800.0,
                    relative_velocity_kmh: 90123.75,
                },
            ]
        );
    }

    #[test]
    fn skips_objects_without_close_approach_entries() {
        let json = r#"{
            "near_earth_objects": {
                "2026-08-06": [{
                    "name": "ghost",
                    "estimated_diameter": {
                        "meters": { "estimated_diameter_max": 10.0 }
                    },
                    "close_approach_data": []
                }]
            }
        }"#;
        assert_eq!(parse_feed(json).unwrap(), vec![]);
    }

    #[test]
    fn malformed_numbers_surface_as_errors() {
        let json = feed_json(&[(
            "2026-08-06",
            vec![object("bad", "2026-08-06", "not-a-number", 10.0, "1.0")],
        )]);
        let err = parse_feed(&json).unwrap_err();
        assert_eq!(
            err,
            FeedError::BadNumber {
                object: "bad".to_string(),
                field: "miss_distance.kilometers",
            }
        );
    }

    #[test]
    fn not_a_document_is_a_parse_error() {
        assert!(matches!(parse_feed("[]"), Err(FeedError::Parse(_))));
    }

    fn approach(name: &str, miss_km: f64) -> NeoApproach {
        NeoApproach {
            name: name.to_string(),
            close_approach_date: "2026-08-06".to_string(),
            miss_distance_km: miss_km,
            estimated_diameter_m: 100.0,
            relative_velocity_kmh: 30000.0,
        }
    }

    #[test]
    fn closest_sorts_ascending_and_truncates() {
        let roster = closest_approaches(
            vec![
                approach("f", 600.0),
                approach("a", 500.0),
                approach("e", 100.0),
                approach("d", 400.0),
                approach("c", 300.0),
                approach("b", 200.0),
            ],
            5,
        );
        let names: Vec<&str> = roster.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["e", "b", "c", "d", "a"]);
    }

    #[test]
    fn equal_distances_tie_break_by_name() {
        let roster = closest_approaches(
            vec![approach("b", 100.0), approach("a", 100.0)],
            5,
        );
        let names: Vec<&str> = roster.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
