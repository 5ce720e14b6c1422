use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// National Weather Service API Models
// ============================================================================

/// Body of `/alerts/active/area/{state}`
#[derive(Debug, Deserialize)]
pub struct AlertCollection {
    pub features: Option<Vec<AlertFeature>>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: AlertProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    pub event: Option<String>,
    #[serde(rename = "areaDesc")]
    pub area_desc: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
}

/// Body of `/points/{lat},{lon}`
#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: Option<PointsProperties>,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    /// Absolute URL of the forecast for this grid cell
    pub forecast: Option<String>,
}

impl PointsResponse {
    pub fn forecast_url(&self) -> Option<&str> {
        self.properties.as_ref()?.forecast.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: Option<ForecastProperties>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Option<Vec<ForecastPeriod>>,
}

impl ForecastResponse {
    pub fn into_periods(self) -> Option<Vec<ForecastPeriod>> {
        self.properties?.periods
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastPeriod {
    pub name: Option<String>,
    pub temperature: Option<serde_json::Number>,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: Option<String>,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<String>,
    #[serde(rename = "windDirection")]
    pub wind_direction: Option<String>,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state code (e.g. CA, NY)
    pub state: String,
}

impl GetAlertsRequest {
    /// Uppercased state code, or `None` unless it is exactly two ASCII letters
    pub fn region_code(&self) -> Option<String> {
        let state = self.state.as_str();
        if state.len() == 2 && state.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(state.to_ascii_uppercase())
        } else {
            None
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}

impl GetForecastRequest {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}
