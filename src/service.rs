use std::sync::Arc;

use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde::de::DeserializeOwned;

use crate::client::{JsonFetcher, NwsClient};
use crate::config::WeatherConfig;
use crate::constants::{
    ALERTS_UNAVAILABLE_MSG, FORECAST_UNAVAILABLE_MSG, INVALID_COORDINATES_MSG, INVALID_STATE_MSG,
    NO_ACTIVE_ALERTS_MSG, NO_FORECAST_PERIODS_MSG, POINTS_UNAVAILABLE_MSG,
};
use crate::formatters::{format_alerts, format_forecast};
use crate::models::{
    AlertCollection, ForecastResponse, GetAlertsRequest, GetForecastRequest, PointsResponse,
};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    fetcher: Arc<dyn JsonFetcher>,
    config: WeatherConfig,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service backed by the NWS HTTP client
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = NwsClient::new(&config)?;
        Ok(Self::with_fetcher(config, Arc::new(client)))
    }

    /// Creates a Weather service that reads documents through `fetcher`
    pub fn with_fetcher(config: WeatherConfig, fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self {
            fetcher,
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Fetches `url` and maps the body onto `T`. A body of the wrong shape
    /// is treated like a failed fetch.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        let body = self.fetcher.get_json(url, None).await?;
        match serde_json::from_value(body) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Unexpected response shape from {}: {}", url, e);
                None
            }
        }
    }

    /// Active alerts for a two-letter state code, as plain text
    pub async fn alerts(&self, state: &str) -> String {
        let request = GetAlertsRequest {
            state: state.to_string(),
        };
        let Some(code) = request.region_code() else {
            tracing::warn!("Rejected state code: {:?}", state);
            return INVALID_STATE_MSG.to_string();
        };

        let url = format!("{}/alerts/active/area/{}", self.config.api_base, code);

        let Some(features) = self
            .fetch::<AlertCollection>(&url)
            .await
            .and_then(|collection| collection.features)
        else {
            return ALERTS_UNAVAILABLE_MSG.to_string();
        };

        if features.is_empty() {
            return NO_ACTIVE_ALERTS_MSG.to_string();
        }

        format_alerts(&features)
    }

    /// Forecast for a coordinate pair, as plain text
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> String {
        let request = GetForecastRequest {
            latitude,
            longitude,
        };
        if !request.is_valid() {
            tracing::warn!("Rejected coordinates: {}, {}", latitude, longitude);
            return INVALID_COORDINATES_MSG.to_string();
        }

        let points_url = format!("{}/points/{},{}", self.config.api_base, latitude, longitude);

        let points = self.fetch::<PointsResponse>(&points_url).await;
        let Some(forecast_url) = points.as_ref().and_then(PointsResponse::forecast_url) else {
            return POINTS_UNAVAILABLE_MSG.to_string();
        };

        let Some(periods) = self
            .fetch::<ForecastResponse>(forecast_url)
            .await
            .and_then(ForecastResponse::into_periods)
        else {
            return FORECAST_UNAVAILABLE_MSG.to_string();
        };

        if periods.is_empty() {
            return NO_FORECAST_PERIODS_MSG.to_string();
        }

        format_forecast(&periods)
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather alerts by US state and forecasts by coordinate, \
                from the National Weather Service API."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get weather alerts for a US state. Provide a two-letter US state code (e.g. CA, NY).")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let text = self.alerts(&request.state).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets the weather forecast for a location
    #[tool(description = "Get weather forecast for a location. Provide latitude and longitude of the location.")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text = self.forecast(request.latitude, request.longitude).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
