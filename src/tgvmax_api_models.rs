// API models, upstream client and search aggregation for the SNCF TGVmax
// free-fare catalog
// SNCF Open Data portal: https://ressources.data.sncf.com/
//
// Upstream endpoints:
// - Record search: https://ressources.data.sncf.com/api/records/1.0/search/?dataset=tgvmax&rows=1000&refine.od_happy_card=OUI
// - Station discovery (facets): same endpoint with rows=0&facet=origine / facet=destination
//
// The catalog only publishes trips that currently have free TGVmax seats, so
// every returned record is "available"; there is no partial-capacity signal.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use crate::station_data::{Coordinates, DestinationType, RegionType, StationDirectory};

// Virtual selector for "all Paris stations" and the concrete upstream origin
// it currently resolves to
pub const PARIS_ALL: &str = "PARIS_ALL";
pub const PARIS_INTRAMUROS: &str = "PARIS (intramuros)";

const MAX_STATION_NAME_LEN: usize = 100;

// ============================================================================
// Data Structures
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub code: String,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Limited,
    Full,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TGVMaxAvailability {
    pub train_id: String,
    pub departure_station: Station,
    pub arrival_station: Station,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub status: AvailabilityStatus,
    pub available_seats: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub departure_station: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_station: Option<String>,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passengers: Option<u32>,
}

impl SearchParams {
    // History equality: origin + destination + date (passenger count ignored)
    pub fn same_search(&self, other: &SearchParams) -> bool {
        self.departure_station == other.departure_station
            && self.arrival_station == other.arrival_station
            && self.date == other.date
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSuggestion {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub city: String,
    pub code: String,
    pub coordinates: Coordinates,
}

// ============================================================================
// Raw Upstream Records (schema owned by SNCF, every field optional)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct TGVMaxSearchResponse {
    #[serde(default)]
    pub records: Vec<TGVMaxRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TGVMaxRecord {
    #[serde(default)]
    pub fields: TGVMaxFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TGVMaxFields {
    pub date: Option<String>,
    pub origine: Option<String>,
    pub destination: Option<String>,
    pub heure_depart: Option<String>,
    pub heure_arrivee: Option<String>,
    pub train_no: Option<String>,
    pub od_happy_card: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacetResponse {
    #[serde(default)]
    pub facet_groups: Vec<FacetGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacetGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub facets: Vec<FacetEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacetEntry {
    pub name: String,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum MaxTrainsError {
    InvalidInput(String),
    UpstreamUnavailable(String),
    ServiceFailure(String),
    FileError(String),
}

impl std::fmt::Display for MaxTrainsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaxTrainsError::InvalidInput(e) => write!(f, "Invalid input: {}", e),
            MaxTrainsError::UpstreamUnavailable(e) => write!(f, "Upstream unavailable: {}", e),
            MaxTrainsError::ServiceFailure(e) => write!(f, "Service failure: {}", e),
            MaxTrainsError::FileError(e) => write!(f, "File error: {}", e),
        }
    }
}

impl std::error::Error for MaxTrainsError {}

pub type Result<T> = std::result::Result<T, MaxTrainsError>;

pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

// ============================================================================
// Upstream Query Client
// ============================================================================

pub struct TGVMaxClient {
    http: reqwest::Client,
    base_url: String,
}

impl TGVMaxClient {
    pub const DEFAULT_BASE_URL: &'static str =
        "https://ressources.data.sncf.com/api/records/1.0/search/";
    const DATASET: &'static str = "tgvmax";
    const MAX_ROWS: &'static str = "1000";
    const REQUEST_TIMEOUT_SECS: u64 = 5;

    pub fn new() -> Result<Self> {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    // Tests and alternate deployments can point the client elsewhere
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(Self::REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                MaxTrainsError::ServiceFailure(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(TGVMaxClient {
            http,
            base_url: base_url.to_string(),
        })
    }

    // Fail-soft: one origin failing must not abort a multi-origin fan-out, so
    // timeouts, transport errors and non-2xx responses all come back as an
    // empty record list.
    pub async fn fetch_availability(
        &self,
        origin: &str,
        destination: Option<&str>,
        date: &str,
    ) -> Vec<TGVMaxRecord> {
        match self.request_availability(origin, destination, date).await {
            Ok(response) => response.records,
            Err(e) => {
                eprintln!("⚠️  TGVmax query failed for {}: {}", origin, e);
                Vec::new()
            }
        }
    }

    async fn request_availability(
        &self,
        origin: &str,
        destination: Option<&str>,
        date: &str,
    ) -> Result<TGVMaxSearchResponse> {
        let mut query: Vec<(&str, &str)> = vec![
            ("dataset", Self::DATASET),
            ("rows", Self::MAX_ROWS),
            ("refine.od_happy_card", "OUI"),
            ("refine.origine", origin),
        ];

        if let Some(destination) = destination.filter(|d| *d != PARIS_ALL) {
            query.push(("refine.destination", destination));
        }

        if !date.is_empty() {
            query.push(("refine.date", date));
        }

        let response = self
            .http
            .get(&self.base_url)
            .query(&query)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| MaxTrainsError::UpstreamUnavailable(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(MaxTrainsError::UpstreamUnavailable(format!(
                "API returned error: {}",
                response.status()
            )));
        }

        response
            .json::<TGVMaxSearchResponse>()
            .await
            .map_err(|e| MaxTrainsError::UpstreamUnavailable(format!("invalid JSON response: {}", e)))
    }

    // Facet discovery: distinct station names without a full record scan
    pub async fn fetch_station_names(&self, facet: &str) -> Vec<String> {
        match self.request_facet(facet).await {
            Ok(names) => names,
            Err(e) => {
                eprintln!("⚠️  TGVmax facet query failed for {}: {}", facet, e);
                Vec::new()
            }
        }
    }

    async fn request_facet(&self, facet: &str) -> Result<Vec<String>> {
        let query = [
            ("dataset", Self::DATASET),
            ("rows", "0"),
            ("refine.od_happy_card", "OUI"),
            ("facet", facet),
        ];

        let response = self
            .http
            .get(&self.base_url)
            .query(&query)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| MaxTrainsError::UpstreamUnavailable(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(MaxTrainsError::UpstreamUnavailable(format!(
                "API returned error: {}",
                response.status()
            )));
        }

        let facets = response
            .json::<FacetResponse>()
            .await
            .map_err(|e| MaxTrainsError::UpstreamUnavailable(format!("invalid JSON response: {}", e)))?;

        Ok(facets
            .facet_groups
            .into_iter()
            .flat_map(|group| group.facets)
            .map(|facet| facet.name)
            .collect())
    }
}

// ============================================================================
// Result Aggregation Pipeline
// ============================================================================

pub struct SearchPipeline {
    client: TGVMaxClient,
    directory: StationDirectory,
}

impl SearchPipeline {
    const SUGGESTION_LIMIT: usize = 12;
    const MIN_QUERY_CHARS: usize = 2;

    pub fn new(client: TGVMaxClient, directory: StationDirectory) -> Self {
        SearchPipeline { client, directory }
    }

    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(TGVMaxClient::new()?, StationDirectory::new()))
    }

    pub fn directory(&self) -> &StationDirectory {
        &self.directory
    }

    // Search entry point: validate, fan out one upstream query per resolved
    // origin, normalize, merge and sort by departure time.
    pub async fn search(
        &self,
        departure_station: &str,
        arrival_station: Option<&str>,
        date: &str,
    ) -> Result<Vec<TGVMaxAvailability>> {
        validate_search_input(departure_station, arrival_station, date)?;

        let origins = resolve_departure_stations(departure_station);

        // Origins are independent: query them concurrently, one result slot
        // each, joined only after all of them settle.
        let queries = origins
            .iter()
            .map(|origin| self.client.fetch_availability(origin, arrival_station, date));
        let per_origin = join_all(queries).await;

        Ok(merge_and_sort(&origins, per_origin, &self.directory))
    }

    // Autocomplete backend: union of the origin and destination facets,
    // filtered by the query, capped at SUGGESTION_LIMIT entries.
    pub async fn suggest_stations(&self, query: &str) -> Vec<StationSuggestion> {
        if query.chars().count() < Self::MIN_QUERY_CHARS {
            return Vec::new();
        }

        let (origins, destinations) = tokio::join!(
            self.client.fetch_station_names("origine"),
            self.client.fetch_station_names("destination"),
        );

        let names: BTreeSet<String> = origins.into_iter().chain(destinations).collect();
        build_suggestions(names, query, &self.directory)
    }
}

fn validate_search_input(
    departure_station: &str,
    arrival_station: Option<&str>,
    date: &str,
) -> Result<()> {
    if departure_station.is_empty() || departure_station.chars().count() > MAX_STATION_NAME_LEN {
        return Err(MaxTrainsError::InvalidInput(
            "Gare de départ invalide".to_string(),
        ));
    }

    if !is_valid_date_format(date) {
        return Err(MaxTrainsError::InvalidInput("Date invalide".to_string()));
    }

    if let Some(arrival) = arrival_station {
        if arrival.chars().count() > MAX_STATION_NAME_LEN {
            return Err(MaxTrainsError::InvalidInput(
                "Gare d'arrivée invalide".to_string(),
            ));
        }
    }

    Ok(())
}

// YYYY-MM-DD pattern check, nothing more: the upstream refine filter owns
// calendar semantics
fn is_valid_date_format(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() })
}

// The "all Paris stations" selector currently maps to the single intramuros
// origin; the fan-out handles a list of any length should the directory grow.
pub fn resolve_departure_stations(departure_station: &str) -> Vec<String> {
    if departure_station == PARIS_ALL {
        vec![PARIS_INTRAMUROS.to_string()]
    } else {
        vec![departure_station.to_string()]
    }
}

pub fn merge_and_sort(
    origins: &[String],
    per_origin: Vec<Vec<TGVMaxRecord>>,
    directory: &StationDirectory,
) -> Vec<TGVMaxAvailability> {
    let mut results = Vec::new();

    for (origin, records) in origins.iter().zip(per_origin) {
        for record in records {
            if let Some(entry) = normalize_record(&record.fields, origin, directory) {
                results.push(entry);
            }
        }
    }

    results.sort_by(|a, b| a.departure_time.cmp(&b.departure_time));
    results
}

// One raw catalog record to one availability entry. Records missing either
// time of day are malformed and contribute nothing.
pub fn normalize_record(
    fields: &TGVMaxFields,
    queried_origin: &str,
    directory: &StationDirectory,
) -> Option<TGVMaxAvailability> {
    let heure_depart = fields.heure_depart.as_deref()?;
    let heure_arrivee = fields.heure_arrivee.as_deref()?;
    let date = fields.date.as_deref()?;

    let trip_date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let departure_tod = NaiveTime::parse_from_str(heure_depart, "%H:%M").ok()?;
    let arrival_tod = NaiveTime::parse_from_str(heure_arrivee, "%H:%M").ok()?;

    let departure = trip_date.and_time(departure_tod);
    let mut arrival = trip_date.and_time(arrival_tod);

    // Both timestamps share the naive trip date upstream: a trip arriving
    // after midnight lands on the next calendar day
    if arrival <= departure {
        arrival = arrival + Duration::days(1);
    }

    let minutes = (arrival - departure).num_minutes();
    let duration = format!("{}h{:02}", minutes / 60, minutes % 60);

    Some(TGVMaxAvailability {
        train_id: fields.train_no.clone().unwrap_or_else(|| "TGV".to_string()),
        departure_station: station_from(
            fields.origine.as_deref(),
            queried_origin,
            queried_origin,
            directory,
        ),
        arrival_station: station_from(
            fields.destination.as_deref(),
            "Destination inconnue",
            "DEST",
            directory,
        ),
        departure_time: format_timestamp(departure),
        arrival_time: format_timestamp(arrival),
        duration,
        status: AvailabilityStatus::Available,
        available_seats: "Disponible".to_string(),
        price: 0.0,
    })
}

fn station_from(
    raw_name: Option<&str>,
    fallback_name: &str,
    fallback_code: &str,
    directory: &StationDirectory,
) -> Station {
    let name = raw_name.unwrap_or(fallback_name);

    Station {
        id: raw_name.map(slugify).unwrap_or_else(|| "unknown".to_string()),
        name: name.to_string(),
        code: raw_name.unwrap_or(fallback_code).to_string(),
        coordinates: directory.coordinates_or_default(name),
        city: None,
        region: None,
    }
}

fn format_timestamp(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
}

// Lowercase, whitespace collapsed to hyphens
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub fn build_suggestions<I>(
    names: I,
    query: &str,
    directory: &StationDirectory,
) -> Vec<StationSuggestion>
where
    I: IntoIterator<Item = String>,
{
    let query_lower = query.to_lowercase();

    names
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&query_lower))
        .take(SearchPipeline::SUGGESTION_LIMIT)
        .map(|name| suggestion_for(&name, directory))
        .collect()
}

fn suggestion_for(name: &str, directory: &StationDirectory) -> StationSuggestion {
    let city = if name.contains("(intramuros)") {
        name.replace(" (intramuros)", "")
    } else {
        name.split_whitespace().next().unwrap_or(name).to_string()
    };

    let code = if name == PARIS_INTRAMUROS {
        PARIS_ALL.to_string()
    } else {
        name.to_string()
    };

    StationSuggestion {
        id: slugify(name).replace(['(', ')'], ""),
        name: name.to_string(),
        full_name: format!("{} - TGVmax", name),
        city,
        code,
        coordinates: directory.coordinates_or_default(name),
    }
}

// ============================================================================
// Coordinate Batch Lookup
// ============================================================================

// Unknown names are silently omitted; a non-string or oversized entry fails
// the whole batch.
pub fn batch_coordinates(
    directory: &StationDirectory,
    values: &[Value],
) -> Result<HashMap<String, Coordinates>> {
    let names = validate_station_names(values)?;

    let mut coordinates = HashMap::new();
    for name in names {
        if let Some(coords) = directory.coordinates_for(name) {
            coordinates.insert(name.to_string(), coords);
        }
    }

    Ok(coordinates)
}

fn validate_station_names(values: &[Value]) -> Result<Vec<&str>> {
    let mut names = Vec::with_capacity(values.len());

    for value in values {
        match value.as_str() {
            Some(name) if name.chars().count() <= MAX_STATION_NAME_LEN => names.push(name),
            _ => {
                return Err(MaxTrainsError::InvalidInput(
                    "Nom de gare invalide".to_string(),
                ))
            }
        }
    }

    Ok(names)
}

// ============================================================================
// Search Store (session state: results, history, filters)
// ============================================================================

pub struct SearchStore {
    history: Vec<SearchParams>,
    results: Vec<TGVMaxAvailability>,
    active_types: HashSet<DestinationType>,
    active_regions: HashSet<RegionType>,
}

impl SearchStore {
    const HISTORY_CAPACITY: usize = 10;
    const HISTORY_FILE: &'static str = "search_history.json";

    pub fn new() -> Self {
        SearchStore {
            history: Vec::new(),
            results: Vec::new(),
            active_types: HashSet::new(),
            active_regions: HashSet::new(),
        }
    }

    // Most-recent-first, duplicates dropped, capacity 10 (oldest evicted)
    pub fn record_search(&mut self, params: SearchParams) {
        let exists = self.history.iter().any(|h| h.same_search(&params));
        if exists {
            return;
        }

        self.history.insert(0, params);
        if self.history.len() > Self::HISTORY_CAPACITY {
            self.history.pop();
        }
    }

    pub fn history(&self) -> &[SearchParams] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn remove_from_history(&mut self, index: usize) -> bool {
        if index < self.history.len() {
            self.history.remove(index);
            true
        } else {
            false
        }
    }

    pub fn replace_results(&mut self, results: Vec<TGVMaxAvailability>) {
        self.results = results;
    }

    pub fn results(&self) -> &[TGVMaxAvailability] {
        &self.results
    }

    pub fn set_filters(
        &mut self,
        types: HashSet<DestinationType>,
        regions: HashSet<RegionType>,
    ) {
        self.active_types = types;
        self.active_regions = regions;
    }

    pub fn clear_filters(&mut self) {
        self.active_types.clear();
        self.active_regions.clear();
    }

    // Derived view, recomputed from current results and filters on every read
    pub fn filtered_view(&self, directory: &StationDirectory) -> Vec<TGVMaxAvailability> {
        self.results
            .iter()
            .filter(|entry| {
                passes_filters(entry, &self.active_types, &self.active_regions, directory)
            })
            .cloned()
            .collect()
    }

    fn storage_path() -> PathBuf {
        let mut path = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("maxtrains");
        fs::create_dir_all(&path).ok();
        path.push(Self::HISTORY_FILE);
        path
    }

    pub fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.history)
            .map_err(|e| MaxTrainsError::FileError(format!("Failed to serialize history: {}", e)))?;

        fs::write(Self::storage_path(), json)
            .map_err(|e| MaxTrainsError::FileError(format!("Failed to write history: {}", e)))?;

        Ok(())
    }

    // Best-effort: a missing or malformed file leaves the history empty
    pub fn restore(&mut self) {
        let path = Self::storage_path();
        if !path.exists() {
            return;
        }

        match fs::read_to_string(&path) {
            Ok(contents) => {
                self.history = history_from_json(&contents);
            }
            Err(e) => {
                println!("⚠️  Failed to read search history ({}), starting empty", e);
            }
        }
    }
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn history_from_json(contents: &str) -> Vec<SearchParams> {
    match serde_json::from_str(contents) {
        Ok(history) => history,
        Err(e) => {
            println!("⚠️  Failed to parse search history ({}), starting empty", e);
            Vec::new()
        }
    }
}

// A result passes when its arrival station matches every non-empty facet of
// the filter; stations the directory does not know fail any non-empty filter.
fn passes_filters(
    entry: &TGVMaxAvailability,
    active_types: &HashSet<DestinationType>,
    active_regions: &HashSet<RegionType>,
    directory: &StationDirectory,
) -> bool {
    if active_types.is_empty() && active_regions.is_empty() {
        return true;
    }

    let Some(metadata) = directory.metadata_for(&entry.arrival_station.name) else {
        return false;
    };

    let type_ok = active_types.is_empty()
        || metadata
            .category
            .map_or(false, |category| active_types.contains(&category));
    let region_ok = active_regions.is_empty() || active_regions.contains(&metadata.region);

    type_ok && region_ok
}

// ============================================================================
// Theme Preference (best-effort persistence)
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePrefs {
    pub dark_mode: bool,
}

impl Default for ThemePrefs {
    fn default() -> Self {
        ThemePrefs { dark_mode: false }
    }
}

impl ThemePrefs {
    const THEME_FILE: &'static str = "theme.json";

    fn storage_path() -> PathBuf {
        let mut path = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("maxtrains");
        fs::create_dir_all(&path).ok();
        path.push(Self::THEME_FILE);
        path
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string(self)
            .map_err(|e| MaxTrainsError::FileError(format!("Failed to serialize theme: {}", e)))?;

        fs::write(Self::storage_path(), json)
            .map_err(|e| MaxTrainsError::FileError(format!("Failed to write theme: {}", e)))?;

        Ok(())
    }

    pub fn load() -> ThemePrefs {
        let path = Self::storage_path();
        if !path.exists() {
            return ThemePrefs::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => ThemePrefs::default(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(
        date: &str,
        heure_depart: Option<&str>,
        heure_arrivee: Option<&str>,
        origine: &str,
        destination: &str,
        train_no: Option<&str>,
    ) -> TGVMaxRecord {
        TGVMaxRecord {
            fields: TGVMaxFields {
                date: Some(date.to_string()),
                origine: Some(origine.to_string()),
                destination: Some(destination.to_string()),
                heure_depart: heure_depart.map(String::from),
                heure_arrivee: heure_arrivee.map(String::from),
                train_no: train_no.map(String::from),
                od_happy_card: Some("OUI".to_string()),
            },
        }
    }

    fn entry_to(arrival_name: &str, departure_time: &str) -> TGVMaxAvailability {
        let directory = StationDirectory::new();
        let fields = TGVMaxFields {
            date: Some(departure_time[..10].to_string()),
            origine: Some(PARIS_INTRAMUROS.to_string()),
            destination: Some(arrival_name.to_string()),
            heure_depart: Some(departure_time[11..16].to_string()),
            heure_arrivee: Some("23:59".to_string()),
            train_no: Some("7000".to_string()),
            od_happy_card: Some("OUI".to_string()),
        };
        normalize_record(&fields, PARIS_INTRAMUROS, &directory).unwrap()
    }

    fn params(departure: &str, arrival: Option<&str>, date: &str) -> SearchParams {
        SearchParams {
            departure_station: departure.to_string(),
            arrival_station: arrival.map(String::from),
            date: date.to_string(),
            passengers: None,
        }
    }

    // ------------------------------------------------------------------
    // Input validation
    // ------------------------------------------------------------------

    #[test]
    fn rejects_empty_departure_station() {
        let err = validate_search_input("", None, "2025-01-01").unwrap_err();
        assert!(matches!(err, MaxTrainsError::InvalidInput(_)));
    }

    #[test]
    fn rejects_oversized_departure_station() {
        let long_name = "X".repeat(101);
        let err = validate_search_input(&long_name, None, "2025-01-01").unwrap_err();
        assert!(matches!(err, MaxTrainsError::InvalidInput(_)));
    }

    #[test]
    fn rejects_wrong_date_format() {
        let err = validate_search_input(PARIS_INTRAMUROS, None, "01-01-2025").unwrap_err();
        assert!(matches!(err, MaxTrainsError::InvalidInput(_)));
    }

    #[test]
    fn rejects_oversized_arrival_station() {
        let long_name = "X".repeat(101);
        let err =
            validate_search_input(PARIS_INTRAMUROS, Some(&long_name), "2025-01-01").unwrap_err();
        assert!(matches!(err, MaxTrainsError::InvalidInput(_)));
    }

    #[test]
    fn accepts_valid_input() {
        assert!(validate_search_input(PARIS_INTRAMUROS, Some("NANTES"), "2025-01-01").is_ok());
        assert!(validate_search_input("RENNES", None, "2025-12-31").is_ok());
    }

    #[test]
    fn date_format_checks_shape_only() {
        assert!(is_valid_date_format("2025-01-01"));
        assert!(!is_valid_date_format("2025-1-1"));
        assert!(!is_valid_date_format("01-01-2025"));
        assert!(!is_valid_date_format("2025-01-0a"));
        assert!(!is_valid_date_format("2025-01-01 "));
    }

    // ------------------------------------------------------------------
    // Origin resolution
    // ------------------------------------------------------------------

    #[test]
    fn paris_all_resolves_to_intramuros() {
        assert_eq!(
            resolve_departure_stations(PARIS_ALL),
            vec![PARIS_INTRAMUROS.to_string()]
        );
    }

    #[test]
    fn concrete_station_resolves_to_itself() {
        assert_eq!(
            resolve_departure_stations("NANTES"),
            vec!["NANTES".to_string()]
        );
    }

    // ------------------------------------------------------------------
    // Record normalization
    // ------------------------------------------------------------------

    #[test]
    fn drops_record_missing_departure_time() {
        let directory = StationDirectory::new();
        let rec = record("2025-06-01", None, Some("09:00"), "NANTES", "RENNES", None);
        assert!(normalize_record(&rec.fields, "NANTES", &directory).is_none());
    }

    #[test]
    fn drops_record_missing_arrival_time() {
        let directory = StationDirectory::new();
        let rec = record("2025-06-01", Some("06:44"), None, "NANTES", "RENNES", None);
        assert!(normalize_record(&rec.fields, "NANTES", &directory).is_none());
    }

    #[test]
    fn computes_duration_and_timestamps() {
        let directory = StationDirectory::new();
        let rec = record(
            "2025-06-01",
            Some("06:44"),
            Some("09:00"),
            PARIS_INTRAMUROS,
            "BORDEAUX ST JEAN",
            Some("8531"),
        );

        let entry = normalize_record(&rec.fields, PARIS_INTRAMUROS, &directory).unwrap();
        assert_eq!(entry.departure_time, "2025-06-01T06:44:00");
        assert_eq!(entry.arrival_time, "2025-06-01T09:00:00");
        assert_eq!(entry.duration, "2h16");
        assert_eq!(entry.train_id, "8531");
        assert_eq!(entry.status, AvailabilityStatus::Available);
        assert_eq!(entry.price, 0.0);
    }

    #[test]
    fn overnight_arrival_rolls_to_next_day() {
        let directory = StationDirectory::new();
        let rec = record(
            "2025-06-01",
            Some("23:50"),
            Some("00:10"),
            PARIS_INTRAMUROS,
            "NANTES",
            None,
        );

        let entry = normalize_record(&rec.fields, PARIS_INTRAMUROS, &directory).unwrap();
        assert_eq!(entry.departure_time, "2025-06-01T23:50:00");
        assert_eq!(entry.arrival_time, "2025-06-02T00:10:00");
        assert_eq!(entry.duration, "0h20");
    }

    #[test]
    fn missing_train_number_falls_back_to_generic_id() {
        let directory = StationDirectory::new();
        let rec = record(
            "2025-06-01",
            Some("06:44"),
            Some("09:00"),
            "NANTES",
            "RENNES",
            None,
        );

        let entry = normalize_record(&rec.fields, "NANTES", &directory).unwrap();
        assert_eq!(entry.train_id, "TGV");
    }

    #[test]
    fn stations_get_slug_ids_and_directory_coordinates() {
        let directory = StationDirectory::new();
        let rec = record(
            "2025-06-01",
            Some("06:44"),
            Some("09:00"),
            PARIS_INTRAMUROS,
            "BORDEAUX ST JEAN",
            None,
        );

        let entry = normalize_record(&rec.fields, PARIS_INTRAMUROS, &directory).unwrap();
        assert_eq!(entry.departure_station.id, "paris-(intramuros)");
        assert_eq!(entry.arrival_station.id, "bordeaux-st-jean");
        assert_eq!(entry.arrival_station.code, "BORDEAUX ST JEAN");
        assert!((entry.arrival_station.coordinates.lat - 44.825932).abs() < 1e-9);
    }

    #[test]
    fn unknown_station_gets_center_of_france_coordinates() {
        let directory = StationDirectory::new();
        let rec = record(
            "2025-06-01",
            Some("06:44"),
            Some("09:00"),
            "NANTES",
            "GARE FANTOME",
            None,
        );

        let entry = normalize_record(&rec.fields, "NANTES", &directory).unwrap();
        assert_eq!(
            entry.arrival_station.coordinates,
            crate::station_data::FRANCE_CENTER
        );
    }

    #[test]
    fn serializes_with_camel_case_keys_and_lowercase_status() {
        let entry = entry_to("NANTES", "2025-06-01T10:00");
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["status"], "available");
        assert_eq!(value["availableSeats"], "Disponible");
        assert!(value.get("trainId").is_some());
        assert!(value.get("departureStation").is_some());
        assert!(value["departureStation"].get("city").is_none());
    }

    // ------------------------------------------------------------------
    // Fan-out merge
    // ------------------------------------------------------------------

    #[test]
    fn merges_origin_slots_sorted_by_departure_time() {
        let directory = StationDirectory::new();
        let origins = vec![PARIS_INTRAMUROS.to_string(), "NANTES".to_string()];

        let per_origin = vec![
            vec![
                record("2025-06-01", Some("14:00"), Some("16:00"), PARIS_INTRAMUROS, "RENNES", None),
                record("2025-06-01", Some("06:00"), Some("08:00"), PARIS_INTRAMUROS, "RENNES", None),
            ],
            vec![record("2025-06-01", Some("10:00"), Some("12:00"), "NANTES", "RENNES", None)],
        ];

        let merged = merge_and_sort(&origins, per_origin, &directory);
        let departures: Vec<_> = merged.iter().map(|e| e.departure_time.as_str()).collect();
        assert_eq!(
            departures,
            vec![
                "2025-06-01T06:00:00",
                "2025-06-01T10:00:00",
                "2025-06-01T14:00:00",
            ]
        );
    }

    #[test]
    fn failed_origin_yields_empty_slot_without_aborting_the_merge() {
        let directory = StationDirectory::new();
        let origins = vec![PARIS_INTRAMUROS.to_string(), "NANTES".to_string()];

        // First origin timed out upstream: its slot is empty
        let per_origin = vec![
            Vec::new(),
            vec![
                record("2025-06-01", Some("10:00"), Some("12:00"), "NANTES", "RENNES", None),
                record("2025-06-01", Some("07:00"), Some("09:00"), "NANTES", "RENNES", None),
            ],
        ];

        let merged = merge_and_sort(&origins, per_origin, &directory);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].departure_time, "2025-06-01T07:00:00");
        assert_eq!(merged[1].departure_time, "2025-06-01T10:00:00");
    }

    #[test]
    fn malformed_records_are_dropped_from_the_merge() {
        let directory = StationDirectory::new();
        let origins = vec!["NANTES".to_string()];

        let per_origin = vec![vec![
            record("2025-06-01", Some("10:00"), Some("12:00"), "NANTES", "RENNES", None),
            record("2025-06-01", None, Some("12:00"), "NANTES", "RENNES", None),
            record("2025-06-01", Some("11:00"), None, "NANTES", "RENNES", None),
        ]];

        let merged = merge_and_sort(&origins, per_origin, &directory);
        assert_eq!(merged.len(), 1);
    }

    // ------------------------------------------------------------------
    // Slugs & suggestions
    // ------------------------------------------------------------------

    #[test]
    fn slugify_collapses_whitespace_to_hyphens() {
        assert_eq!(slugify("BORDEAUX ST JEAN"), "bordeaux-st-jean");
        assert_eq!(slugify("NANTES"), "nantes");
        assert_eq!(slugify("LE  MANS"), "le-mans");
    }

    #[test]
    fn builds_suggestions_for_matching_names() {
        let directory = StationDirectory::new();
        let names = vec![
            PARIS_INTRAMUROS.to_string(),
            "BORDEAUX ST JEAN".to_string(),
            "NANTES".to_string(),
        ];

        let suggestions = build_suggestions(names, "par", &directory);
        assert_eq!(suggestions.len(), 1);

        let paris = &suggestions[0];
        assert_eq!(paris.id, "paris-intramuros");
        assert_eq!(paris.name, PARIS_INTRAMUROS);
        assert_eq!(paris.full_name, "PARIS (intramuros) - TGVmax");
        assert_eq!(paris.city, "PARIS");
        assert_eq!(paris.code, PARIS_ALL);
    }

    #[test]
    fn suggestion_city_takes_first_word_for_plain_names() {
        let directory = StationDirectory::new();
        let names = vec!["BORDEAUX ST JEAN".to_string()];

        let suggestions = build_suggestions(names, "bordeaux", &directory);
        assert_eq!(suggestions[0].city, "BORDEAUX");
        assert_eq!(suggestions[0].code, "BORDEAUX ST JEAN");
    }

    #[test]
    fn suggestions_are_capped() {
        let directory = StationDirectory::new();
        let names: Vec<String> = (0..20).map(|i| format!("GARE {:02}", i)).collect();

        let suggestions = build_suggestions(names, "gare", &directory);
        assert_eq!(suggestions.len(), 12);
    }

    // ------------------------------------------------------------------
    // Coordinate batch lookup
    // ------------------------------------------------------------------

    #[test]
    fn batch_lookup_omits_unknown_stations() {
        let directory = StationDirectory::new();
        let values = vec![json!("UNKNOWN STATION")];

        let coordinates = batch_coordinates(&directory, &values).unwrap();
        assert!(coordinates.is_empty());
    }

    #[test]
    fn batch_lookup_rejects_non_string_entries() {
        let directory = StationDirectory::new();
        let values = vec![json!(123)];

        let err = batch_coordinates(&directory, &values).unwrap_err();
        assert!(matches!(err, MaxTrainsError::InvalidInput(_)));
    }

    #[test]
    fn batch_lookup_rejects_oversized_names() {
        let directory = StationDirectory::new();
        let values = vec![json!("X".repeat(101))];

        let err = batch_coordinates(&directory, &values).unwrap_err();
        assert!(matches!(err, MaxTrainsError::InvalidInput(_)));
    }

    #[test]
    fn batch_lookup_returns_known_coordinates() {
        let directory = StationDirectory::new();
        let values = vec![json!("RENNES"), json!("UNKNOWN STATION")];

        let coordinates = batch_coordinates(&directory, &values).unwrap();
        assert_eq!(coordinates.len(), 1);
        assert!((coordinates["RENNES"].lat - 48.103754).abs() < 1e-9);
    }

    // ------------------------------------------------------------------
    // Search history
    // ------------------------------------------------------------------

    #[test]
    fn history_deduplicates_identical_searches() {
        let mut store = SearchStore::new();
        store.record_search(params("A", Some("B"), "2025-01-01"));
        store.record_search(params("A", Some("B"), "2025-01-01"));

        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn history_equality_ignores_passenger_count() {
        let mut store = SearchStore::new();
        let mut first = params("A", Some("B"), "2025-01-01");
        first.passengers = Some(1);
        let mut second = params("A", Some("B"), "2025-01-01");
        second.passengers = Some(4);

        store.record_search(first);
        store.record_search(second);
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn history_keeps_the_ten_most_recent_searches() {
        let mut store = SearchStore::new();
        for day in 1..=11 {
            store.record_search(params("A", Some("B"), &format!("2025-01-{:02}", day)));
        }

        assert_eq!(store.history().len(), 10);
        // Most recent first, oldest evicted
        assert_eq!(store.history()[0].date, "2025-01-11");
        assert!(store.history().iter().all(|h| h.date != "2025-01-01"));
    }

    #[test]
    fn history_entries_can_be_removed_by_index() {
        let mut store = SearchStore::new();
        store.record_search(params("A", None, "2025-01-01"));
        store.record_search(params("B", None, "2025-01-02"));

        assert!(store.remove_from_history(0));
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.history()[0].departure_station, "A");

        assert!(!store.remove_from_history(5));
    }

    #[test]
    fn clearing_history_empties_the_log() {
        let mut store = SearchStore::new();
        store.record_search(params("A", None, "2025-01-01"));
        store.clear_history();
        assert!(store.history().is_empty());
    }

    #[test]
    fn malformed_persisted_history_decodes_to_empty() {
        assert!(history_from_json("not json at all").is_empty());
        assert!(history_from_json("{\"oops\": true}").is_empty());
    }

    #[test]
    fn persisted_history_round_trips_through_json() {
        let mut store = SearchStore::new();
        store.record_search(params(PARIS_ALL, Some("NANTES"), "2025-01-01"));

        let json = serde_json::to_string(store.history()).unwrap();
        let restored = history_from_json(&json);
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].departure_station, PARIS_ALL);
        assert_eq!(restored[0].arrival_station.as_deref(), Some("NANTES"));
    }

    // ------------------------------------------------------------------
    // Thematic filters
    // ------------------------------------------------------------------

    #[test]
    fn empty_filters_pass_everything() {
        let directory = StationDirectory::new();
        let mut store = SearchStore::new();
        store.replace_results(vec![
            entry_to("NICE VILLE", "2025-06-01T10:00"),
            entry_to("GRENOBLE", "2025-06-01T11:00"),
        ]);

        assert_eq!(store.results().len(), 2);
        assert_eq!(store.filtered_view(&directory).len(), 2);
    }

    #[test]
    fn type_filter_keeps_only_matching_destinations() {
        let directory = StationDirectory::new();
        let mut store = SearchStore::new();
        store.replace_results(vec![
            entry_to("NICE VILLE", "2025-06-01T10:00"),
            entry_to("GRENOBLE", "2025-06-01T11:00"),
        ]);

        let mut types = HashSet::new();
        types.insert(DestinationType::Plage);
        store.set_filters(types, HashSet::new());

        let filtered = store.filtered_view(&directory);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].arrival_station.name, "NICE VILLE");
    }

    #[test]
    fn region_filter_keeps_only_matching_destinations() {
        let directory = StationDirectory::new();
        let mut store = SearchStore::new();
        store.replace_results(vec![
            entry_to("NICE VILLE", "2025-06-01T10:00"),
            entry_to("RENNES", "2025-06-01T11:00"),
        ]);

        let mut regions = HashSet::new();
        regions.insert(RegionType::Bretagne);
        store.set_filters(HashSet::new(), regions);

        let filtered = store.filtered_view(&directory);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].arrival_station.name, "RENNES");
    }

    #[test]
    fn unknown_arrival_station_fails_non_empty_filters() {
        let directory = StationDirectory::new();
        let mut store = SearchStore::new();
        store.replace_results(vec![entry_to("GARE FANTOME", "2025-06-01T10:00")]);

        let mut types = HashSet::new();
        types.insert(DestinationType::Plage);
        store.set_filters(types, HashSet::new());

        assert!(store.filtered_view(&directory).is_empty());
    }

    #[test]
    fn clearing_filters_restores_the_full_view() {
        let directory = StationDirectory::new();
        let mut store = SearchStore::new();
        store.replace_results(vec![
            entry_to("NICE VILLE", "2025-06-01T10:00"),
            entry_to("GRENOBLE", "2025-06-01T11:00"),
        ]);

        let mut types = HashSet::new();
        types.insert(DestinationType::Plage);
        store.set_filters(types, HashSet::new());
        assert_eq!(store.filtered_view(&directory).len(), 1);

        store.clear_filters();
        assert_eq!(store.filtered_view(&directory).len(), 2);
    }

    #[test]
    fn uncategorized_station_fails_type_filter_but_passes_region_filter() {
        let directory = StationDirectory::new();
        let mut store = SearchStore::new();
        // RENNES has a region but no destination category
        store.replace_results(vec![entry_to("RENNES", "2025-06-01T10:00")]);

        let mut types = HashSet::new();
        types.insert(DestinationType::Plage);
        store.set_filters(types, HashSet::new());
        assert!(store.filtered_view(&directory).is_empty());

        let mut regions = HashSet::new();
        regions.insert(RegionType::Bretagne);
        store.set_filters(HashSet::new(), regions);
        assert_eq!(store.filtered_view(&directory).len(), 1);
    }
}
