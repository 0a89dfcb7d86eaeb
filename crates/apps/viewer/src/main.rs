//! Headless viewer: drives one full interaction against the real feed.
//!
//! Loads the brightness map, fetches the week's closest near-Earth objects,
//! casts a pointer ray at the configured target, then flies the first
//! asteroid of the roster into it at a fixed 60 Hz and renders the
//! consequence panel. Rendering proper (GPU, windowing) lives elsewhere;
//! this binary is the reference driver for the core crates.

mod panel;

use std::env;
use std::path::PathBuf;

use chrono::{Days, Utc};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use feed::{closest_approaches, parse_feed, FeedError, NeoApproach, CLOSEST_LIMIT};
use foundation::math::GeoCoordinate;
use impact::{select_consequence, ImpactEvent};
use runtime::{EventBus, Frame};
use scene::{pick_globe, surface_point, Ray};
use sim::{approach_readout, FlightSim, LaunchTarget, TickOutcome, IMPACT_PROGRESS};
use terrain::{BrightnessMap, TerrainClassifier};

struct ViewerConfig {
    terrain_map: PathBuf,
    feed_url: Option<String>,
    api_key: String,
    target_lat: f64,
    target_lon: f64,
}

fn env_var_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn config_from_env() -> ViewerConfig {
    ViewerConfig {
        terrain_map: env::var("TERRAIN_MAP")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("assets/earthspec1k.jpg")),
        feed_url: env::var("NEO_FEED_URL").ok(),
        api_key: env::var("NEO_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string()),
        target_lat: env_var_f64("TARGET_LAT", 30.0),
        target_lon: env_var_f64("TARGET_LON", 45.0),
    }
}

fn feed_url(config: &ViewerConfig) -> String {
    if let Some(url) = &config.feed_url {
        return url.clone();
    }
    let start = Utc::now().date_naive();
    let end = start
        .checked_add_days(Days::new(7))
        .unwrap_or(start);
    format!(
        "https://api.nasa.gov/neo/rest/v1/feed?start_date={}&end_date={}&api_key={}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d"),
        config.api_key,
    )
}

async fn fetch_closest(
    http: &reqwest::Client,
    config: &ViewerConfig,
) -> Result<Vec<NeoApproach>, FeedError> {
    let url = feed_url(config);
    let resp = http
        .get(&url)
        .send()
        .await
        .map_err(|e| FeedError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FeedError::Http {
            status: status.as_u16(),
        });
    }

    let text = resp
        .text()
        .await
        .map_err(|e| FeedError::Transport(e.to_string()))?;
    Ok(closest_approaches(parse_feed(&text)?, CLOSEST_LIMIT))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = config_from_env();

    let mut classifier = TerrainClassifier::new();
    match BrightnessMap::load(&config.terrain_map) {
        Ok(map) => {
            classifier.attach(Box::new(map));
            info!(path = %config.terrain_map.display(), "terrain classifier ready");
        }
        Err(err) => {
            warn!(%err, "terrain map unavailable; targets will read as Unknown");
        }
    }

    let http = reqwest::Client::new();
    let roster = match fetch_closest(&http, &config).await {
        Ok(roster) => roster,
        Err(err) => {
            error!(%err, "asteroid feed unavailable");
            println!("Failed to load the asteroid feed. Reload to retry.");
            return;
        }
    };
    if roster.is_empty() {
        println!("No asteroids approaching this week.");
        return;
    }
    print!("{}", panel::render_roster(&roster));

    // A click is a ray from outside the globe toward the configured target.
    let target = GeoCoordinate::new(config.target_lat, config.target_lon);
    let aim = surface_point(target);
    let Some(hit) = pick_globe(Ray::toward(aim * 3.0, aim)) else {
        info!("pointer ray missed the globe; nothing to do");
        return;
    };

    let label = classifier.classify(hit.geo.lat_deg, hit.geo.lon_deg);
    println!("{}", panel::render_target_line(hit.geo, label));

    let mut flight = FlightSim::new(roster.len());
    let mut bus = EventBus::new();
    let mut frame = Frame::at_60hz();
    let approach = &roster[flight.approach_index()];
    let armed = flight.arm(
        frame,
        &mut bus,
        LaunchTarget {
            point: hit.point,
            geo: hit.geo,
        },
        approach.estimated_diameter_m,
    );
    if !armed {
        error!("launch rejected with an idle flight");
        return;
    }
    info!(name = %approach.name, "meteor launched");

    loop {
        frame = frame.next();
        match flight.tick(frame, &mut bus) {
            TickOutcome::Idle => {}
            TickOutcome::Falling { progress, .. } => {
                // Once a second, the progressive panel figures.
                if frame.index % 60 == 0 {
                    let readout = approach_readout(approach, progress);
                    debug!(
                        "falling: progress={progress:.2} distance_km={:.0} diameter_m={:.1} velocity_kmh={:.0}",
                        readout.distance_km, readout.diameter_m, readout.velocity_kmh
                    );
                }
            }
            TickOutcome::Impact { geo, diameter_m } => {
                let terrain = classifier.classify(geo.lat_deg, geo.lon_deg);
                let record = select_consequence(ImpactEvent::new(diameter_m, terrain));
                let readout = approach_readout(approach, IMPACT_PROGRESS);
                println!();
                print!(
                    "{}",
                    panel::render_panel(record, approach, &readout, geo, terrain)
                );
            }
            TickOutcome::CoolingDown { .. } => {}
            TickOutcome::Reset { next_approach } => {
                info!(next_approach, "ready for the next launch");
                break;
            }
        }
    }

    for event in bus.drain() {
        debug!(frame = event.frame_index, kind = event.kind, "{}", event.message);
    }
}
