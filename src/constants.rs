/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Accept header value the NWS API expects
pub const ACCEPT_GEO_JSON: &str = "application/geo+json";

/// Per-request deadline in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Line placed between formatted alerts or forecast periods
pub const ALERT_SEPARATOR: &str = "\n---\n";

/// Number of forecast periods included in a forecast reply
pub const MAX_FORECAST_PERIODS: usize = 5;

// ============================================================================
// User-facing messages
// ============================================================================

pub const INVALID_STATE_MSG: &str =
    "Invalid state code. Please provide a two-letter US state code.";
pub const INVALID_COORDINATES_MSG: &str = "Invalid latitude or longitude.";
pub const ALERTS_UNAVAILABLE_MSG: &str = "Unable to fetch alerts or no alerts found.";
pub const NO_ACTIVE_ALERTS_MSG: &str = "No active alerts for this state.";
pub const POINTS_UNAVAILABLE_MSG: &str = "Unable to fetch forecast data for this location.";
pub const FORECAST_UNAVAILABLE_MSG: &str = "Unable to fetch detailed forecast.";
pub const NO_FORECAST_PERIODS_MSG: &str = "No forecast periods available for this location.";

// ============================================================================
// Placeholders for absent fields
// ============================================================================

pub const UNKNOWN: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_INSTRUCTIONS: &str = "No specific instructions provided";
