// Backend API server for the MaxTrains TGVmax seat finder
// Aggregates the SNCF open-data TGVmax catalog: free-seat search, station
// autocomplete, coordinate lookup, search history and thematic filters

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

mod station_data;
mod tgvmax_api_models;

use station_data::{Coordinates, DestinationType, RegionType};
use tgvmax_api_models::{
    batch_coordinates, current_timestamp, MaxTrainsError, SearchParams, SearchPipeline,
    SearchStore, StationSuggestion, TGVMaxAvailability, ThemePrefs,
};

const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "Service temporairement indisponible, réessayez dans quelques minutes";

#[derive(Clone)]
struct AppState {
    pipeline: Arc<SearchPipeline>,
    store: Arc<Mutex<SearchStore>>,
    theme: Arc<Mutex<ThemePrefs>>,
}

#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
    timestamp: i64,
    sources: Vec<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            timestamp: current_timestamp(),
            sources: vec!["SNCF Open Data".to_string()],
        }
    }

    fn error(message: String) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            timestamp: current_timestamp(),
            sources: vec![],
        }
    }
}

// ============================================================================
// TGVmax Search
// ============================================================================

async fn search_tgvmax(state: web::Data<AppState>, body: web::Json<Value>) -> HttpResponse {
    let departure_station = body
        .get("departureStation")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    let date = body.get("date").and_then(|v| v.as_str()).unwrap_or_default();
    let passengers = body
        .get("passengers")
        .and_then(|v| v.as_u64())
        .map(|p| p as u32);

    // Present but non-string arrival is a caller error, absent is fine
    let arrival_station = match body.get("arrivalStation").filter(|v| !v.is_null()) {
        Some(value) => match value.as_str() {
            Some(name) => Some(name),
            None => {
                return HttpResponse::BadRequest().json(
                    ApiResponse::<Vec<TGVMaxAvailability>>::error(
                        "Gare d'arrivée invalide".to_string(),
                    ),
                )
            }
        },
        None => None,
    };

    match state
        .pipeline
        .search(departure_station, arrival_station, date)
        .await
    {
        Ok(results) => {
            println!(
                "🚄 TGVmax search: {} → {} on {} ({} trains)",
                departure_station,
                arrival_station.unwrap_or("*"),
                date,
                results.len()
            );

            match state.store.lock() {
                Ok(mut store) => {
                    store.replace_results(results.clone());
                    store.record_search(SearchParams {
                        departure_station: departure_station.to_string(),
                        arrival_station: arrival_station.map(String::from),
                        date: date.to_string(),
                        passengers,
                    });
                    if let Err(e) = store.persist() {
                        eprintln!("⚠️  Warning: could not save search history: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("❌ Failed to lock store: {}", e);
                }
            }

            HttpResponse::Ok().json(ApiResponse::success(results))
        }
        Err(MaxTrainsError::InvalidInput(message)) => {
            HttpResponse::BadRequest().json(ApiResponse::<Vec<TGVMaxAvailability>>::error(message))
        }
        Err(e) => {
            eprintln!("❌ Error fetching TGVmax data: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<Vec<TGVMaxAvailability>>::error(
                SERVICE_UNAVAILABLE_MESSAGE.to_string(),
            ))
        }
    }
}

async fn get_results(state: web::Data<AppState>) -> HttpResponse {
    match state.store.lock() {
        Ok(store) => {
            let filtered = store.filtered_view(state.pipeline.directory());
            println!("📊 Filtered results requested: {} trains", filtered.len());
            HttpResponse::Ok().json(ApiResponse::success(filtered))
        }
        Err(e) => {
            eprintln!("❌ Failed to lock store: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<Vec<TGVMaxAvailability>>::error(
                "Failed to retrieve results".to_string(),
            ))
        }
    }
}

// ============================================================================
// Stations
// ============================================================================

#[derive(Deserialize)]
struct StationQuery {
    q: Option<String>,
}

async fn search_stations(
    state: web::Data<AppState>,
    query: web::Query<StationQuery>,
) -> HttpResponse {
    let q = query.q.as_deref().unwrap_or("");

    if q.chars().count() < 2 {
        return HttpResponse::Ok().json(ApiResponse::<Vec<StationSuggestion>>::error(
            "Query too short".to_string(),
        ));
    }

    let suggestions = state.pipeline.suggest_stations(q).await;
    println!("🔍 Station search '{}': {} suggestions", q, suggestions.len());
    HttpResponse::Ok().json(ApiResponse::success(suggestions))
}

async fn station_coordinates(state: web::Data<AppState>, body: web::Json<Value>) -> HttpResponse {
    let Some(stations) = body.get("stations").and_then(|v| v.as_array()) else {
        // Not an array: same answer as "nothing known", not an error
        return HttpResponse::Ok()
            .json(ApiResponse::success(HashMap::<String, Coordinates>::new()));
    };

    match batch_coordinates(state.pipeline.directory(), stations) {
        Ok(coordinates) => {
            println!("📍 Coordinates resolved for {} stations", coordinates.len());
            HttpResponse::Ok().json(ApiResponse::success(coordinates))
        }
        Err(MaxTrainsError::InvalidInput(message)) => HttpResponse::BadRequest()
            .json(ApiResponse::<HashMap<String, Coordinates>>::error(message)),
        Err(e) => {
            eprintln!("❌ Error resolving coordinates: {}", e);
            HttpResponse::InternalServerError().json(
                ApiResponse::<HashMap<String, Coordinates>>::error(
                    "Failed to resolve coordinates".to_string(),
                ),
            )
        }
    }
}

// ============================================================================
// Search History
// ============================================================================

async fn get_history(state: web::Data<AppState>) -> HttpResponse {
    match state.store.lock() {
        Ok(store) => HttpResponse::Ok().json(ApiResponse::success(store.history().to_vec())),
        Err(e) => {
            eprintln!("❌ Failed to lock store: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<Vec<SearchParams>>::error(
                "Failed to retrieve history".to_string(),
            ))
        }
    }
}

async fn clear_history(state: web::Data<AppState>) -> HttpResponse {
    match state.store.lock() {
        Ok(mut store) => {
            store.clear_history();
            if let Err(e) = store.persist() {
                eprintln!("⚠️  Warning: could not save search history: {}", e);
            }
            println!("🗑️  Search history cleared");
            HttpResponse::Ok().json(ApiResponse::success("Search history cleared".to_string()))
        }
        Err(e) => {
            eprintln!("❌ Failed to lock store: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<String>::error(
                "Failed to clear history".to_string(),
            ))
        }
    }
}

async fn remove_history_entry(state: web::Data<AppState>, path: web::Path<usize>) -> HttpResponse {
    let index = path.into_inner();

    match state.store.lock() {
        Ok(mut store) => {
            if store.remove_from_history(index) {
                if let Err(e) = store.persist() {
                    eprintln!("⚠️  Warning: could not save search history: {}", e);
                }
                HttpResponse::Ok().json(ApiResponse::success("History entry removed".to_string()))
            } else {
                HttpResponse::NotFound().json(ApiResponse::<String>::error(format!(
                    "No history entry at index {}",
                    index
                )))
            }
        }
        Err(e) => {
            eprintln!("❌ Failed to lock store: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<String>::error(
                "Failed to update history".to_string(),
            ))
        }
    }
}

// ============================================================================
// Thematic Filters
// ============================================================================

#[derive(Deserialize)]
struct FilterRequest {
    #[serde(default)]
    types: HashSet<DestinationType>,
    #[serde(default)]
    regions: HashSet<RegionType>,
}

async fn set_filters(state: web::Data<AppState>, body: web::Json<FilterRequest>) -> HttpResponse {
    match state.store.lock() {
        Ok(mut store) => {
            let request = body.into_inner();
            store.set_filters(request.types, request.regions);

            let filtered = store.filtered_view(state.pipeline.directory());
            println!("🎯 Filters applied: {} trains match", filtered.len());
            HttpResponse::Ok().json(ApiResponse::success(filtered))
        }
        Err(e) => {
            eprintln!("❌ Failed to lock store: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<Vec<TGVMaxAvailability>>::error(
                "Failed to apply filters".to_string(),
            ))
        }
    }
}

async fn clear_filters(state: web::Data<AppState>) -> HttpResponse {
    match state.store.lock() {
        Ok(mut store) => {
            store.clear_filters();
            let filtered = store.filtered_view(state.pipeline.directory());
            HttpResponse::Ok().json(ApiResponse::success(filtered))
        }
        Err(e) => {
            eprintln!("❌ Failed to lock store: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<Vec<TGVMaxAvailability>>::error(
                "Failed to clear filters".to_string(),
            ))
        }
    }
}

async fn filter_options() -> HttpResponse {
    let types: Vec<_> = DestinationType::all()
        .iter()
        .map(|t| serde_json::json!({ "value": t, "label": t.label() }))
        .collect();
    let regions: Vec<_> = RegionType::all()
        .iter()
        .map(|r| serde_json::json!({ "value": r, "label": r.label() }))
        .collect();

    HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "types": types,
        "regions": regions,
    })))
}

// ============================================================================
// Theme Preference
// ============================================================================

async fn get_theme(state: web::Data<AppState>) -> HttpResponse {
    match state.theme.lock() {
        Ok(theme) => HttpResponse::Ok().json(ApiResponse::success(*theme)),
        Err(e) => {
            eprintln!("❌ Failed to lock theme: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<ThemePrefs>::error(
                "Failed to retrieve theme".to_string(),
            ))
        }
    }
}

async fn set_theme(state: web::Data<AppState>, body: web::Json<ThemePrefs>) -> HttpResponse {
    match state.theme.lock() {
        Ok(mut theme) => {
            *theme = body.into_inner();
            if let Err(e) = theme.save() {
                eprintln!("⚠️  Warning: could not save theme preference: {}", e);
            }
            HttpResponse::Ok().json(ApiResponse::success(*theme))
        }
        Err(e) => {
            eprintln!("❌ Failed to lock theme: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<ThemePrefs>::error(
                "Failed to update theme".to_string(),
            ))
        }
    }
}

// ============================================================================
// Health
// ============================================================================

async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let directory = state.pipeline.directory();

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "MaxTrains TGVmax API",
        "version": "0.1.0",
        "sources": ["SNCF Open Data"],
        "stations_with_coordinates": directory.coordinate_count(),
        "stations_with_metadata": directory.metadata_count(),
        "timestamp": current_timestamp(),
    }))
}

// ============================================================================
// Server Setup
// ============================================================================

async fn run_server(
    pipeline: SearchPipeline,
    store: SearchStore,
    theme: ThemePrefs,
) -> std::io::Result<()> {
    let app_state = AppState {
        pipeline: Arc::new(pipeline),
        store: Arc::new(Mutex::new(store)),
        theme: Arc::new(Mutex::new(theme)),
    };

    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║   🚄 MaxTrains TGVmax Seat Finder API                      ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");
    println!("🌐 Server running on: http://0.0.0.0:8080");
    println!("📡 Upstream: SNCF Open Data (dataset tgvmax)\n");

    println!("📍 Available Routes:");
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ API - TGVmax Search:                                        │");
    println!("│   POST /api/tgvmax/search          - Search free seats      │");
    println!("│   GET  /api/tgvmax/results         - Filtered result view   │");
    println!("├─────────────────────────────────────────────────────────────┤");
    println!("│ API - Stations:                                             │");
    println!("│   GET  /api/stations/search?q=     - Autocomplete           │");
    println!("│   POST /api/stations/coordinates   - Batch coordinates      │");
    println!("├─────────────────────────────────────────────────────────────┤");
    println!("│ API - Session State:                                        │");
    println!("│   GET    /api/history              - Search history         │");
    println!("│   DELETE /api/history              - Clear history          │");
    println!("│   DELETE /api/history/:index       - Remove one entry       │");
    println!("│   POST   /api/filters              - Apply thematic filters │");
    println!("│   DELETE /api/filters              - Clear filters          │");
    println!("│   GET    /api/filters/options      - Filter labels          │");
    println!("│   GET    /api/theme                - Theme preference       │");
    println!("│   POST   /api/theme                - Save theme preference  │");
    println!("├─────────────────────────────────────────────────────────────┤");
    println!("│ Meta:                                                       │");
    println!("│   GET  /health                     - Health check           │");
    println!("└─────────────────────────────────────────────────────────────┘\n");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api/tgvmax")
                    .route("/search", web::post().to(search_tgvmax))
                    .route("/results", web::get().to(get_results)),
            )
            .service(
                web::scope("/api/stations")
                    .route("/search", web::get().to(search_stations))
                    .route("/coordinates", web::post().to(station_coordinates)),
            )
            .service(
                web::scope("/api/history")
                    .route("", web::get().to(get_history))
                    .route("", web::delete().to(clear_history))
                    .route("/{index}", web::delete().to(remove_history_entry)),
            )
            .service(
                web::scope("/api/filters")
                    .route("", web::post().to(set_filters))
                    .route("", web::delete().to(clear_filters))
                    .route("/options", web::get().to(filter_options)),
            )
            .service(
                web::scope("/api/theme")
                    .route("", web::get().to(get_theme))
                    .route("", web::post().to(set_theme)),
            )
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> std::io::Result<()> {
    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║                                                            ║");
    println!("║    🚄 MaxTrains — TGVmax Free Seat Finder                  ║");
    println!("║       SNCF Open Data aggregation server                    ║");
    println!("║                                                            ║");
    println!("║    Version: 0.1.0                                          ║");
    println!("║                                                            ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");

    println!("📡 Preparing SNCF open-data client...");
    let pipeline = match SearchPipeline::with_defaults() {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("❌ Failed to initialize the search pipeline: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "✓ Station directory loaded: {} coordinates, {} metadata entries",
        pipeline.directory().coordinate_count(),
        pipeline.directory().metadata_count()
    );

    let mut store = SearchStore::new();
    store.restore();
    println!("✓ Restored {} search history entries", store.history().len());

    let theme = ThemePrefs::load();

    actix_web::rt::System::new().block_on(run_server(pipeline, store, theme))
}
