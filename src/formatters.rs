use crate::constants::{ALERT_SEPARATOR, MAX_FORECAST_PERIODS, NO_DESCRIPTION, NO_INSTRUCTIONS, UNKNOWN};
use crate::models::{AlertFeature, AlertProperties, ForecastPeriod};

/// Formats a single alert into a readable block
pub fn format_alert(props: &AlertProperties) -> String {
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}\n",
        props.event.as_deref().unwrap_or(UNKNOWN),
        props.area_desc.as_deref().unwrap_or(UNKNOWN),
        props.severity.as_deref().unwrap_or(UNKNOWN),
        props.description.as_deref().unwrap_or(NO_DESCRIPTION),
        props.instruction.as_deref().unwrap_or(NO_INSTRUCTIONS),
    )
}

/// Formats every alert, separated by `---` lines
pub fn format_alerts(features: &[AlertFeature]) -> String {
    features
        .iter()
        .map(|feature| format_alert(&feature.properties))
        .collect::<Vec<_>>()
        .join(ALERT_SEPARATOR)
}

/// Formats a single forecast period
pub fn format_period(period: &ForecastPeriod) -> String {
    let temperature = period
        .temperature
        .as_ref()
        .map_or_else(|| UNKNOWN.to_string(), ToString::to_string);

    format!(
        "{}:\nTemperature: {}\u{00b0}{}\nWind: {} {}\nForecast: {}\n",
        period.name.as_deref().unwrap_or(UNKNOWN),
        temperature,
        period.temperature_unit.as_deref().unwrap_or(UNKNOWN),
        period.wind_speed.as_deref().unwrap_or(UNKNOWN),
        period.wind_direction.as_deref().unwrap_or(UNKNOWN),
        period.detailed_forecast.as_deref().unwrap_or(UNKNOWN),
    )
}

/// Formats the leading forecast periods in their original order
pub fn format_forecast(periods: &[ForecastPeriod]) -> String {
    periods
        .iter()
        .take(MAX_FORECAST_PERIODS)
        .map(format_period)
        .collect::<Vec<_>>()
        .join(ALERT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(name: &str) -> ForecastPeriod {
        ForecastPeriod {
            name: Some(name.to_string()),
            temperature: Some(72i64.into()),
            temperature_unit: Some("F".to_string()),
            wind_speed: Some("10 mph".to_string()),
            wind_direction: Some("SW".to_string()),
            detailed_forecast: Some("Sunny.".to_string()),
        }
    }

    #[test]
    fn test_format_alert_full() {
        let props = AlertProperties {
            event: Some("Flood Warning".to_string()),
            area_desc: Some("Travis, TX".to_string()),
            severity: Some("Severe".to_string()),
            description: Some("River rising.".to_string()),
            instruction: Some("Move to higher ground.".to_string()),
        };
        assert_eq!(
            format_alert(&props),
            "Event: Flood Warning\nArea: Travis, TX\nSeverity: Severe\n\
             Description: River rising.\nInstructions: Move to higher ground.\n"
        );
    }

    #[test]
    fn test_format_alert_placeholders() {
        assert_eq!(
            format_alert(&AlertProperties::default()),
            "Event: Unknown\nArea: Unknown\nSeverity: Unknown\n\
             Description: No description available\n\
             Instructions: No specific instructions provided\n"
        );
    }

    #[test]
    fn test_format_alerts_joins_with_separator() {
        let features = vec![
            AlertFeature {
                properties: AlertProperties {
                    event: Some("A".to_string()),
                    ..Default::default()
                },
            },
            AlertFeature {
                properties: AlertProperties {
                    event: Some("B".to_string()),
                    ..Default::default()
                },
            },
        ];
        let text = format_alerts(&features);
        let parts: Vec<&str> = text.split(ALERT_SEPARATOR).collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].starts_with("Event: A\n"));
        assert!(parts[1].starts_with("Event: B\n"));
    }

    #[test]
    fn test_format_period() {
        assert_eq!(
            format_period(&period("Tonight")),
            "Tonight:\nTemperature: 72\u{00b0}F\nWind: 10 mph SW\nForecast: Sunny.\n"
        );
    }

    #[test]
    fn test_format_period_placeholders() {
        assert_eq!(
            format_period(&ForecastPeriod::default()),
            "Unknown:\nTemperature: Unknown\u{00b0}Unknown\nWind: Unknown Unknown\nForecast: Unknown\n"
        );
    }

    #[test]
    fn test_format_forecast_takes_first_five_in_order() {
        let periods: Vec<ForecastPeriod> = (1..=7).map(|i| period(&format!("P{i}"))).collect();
        let text = format_forecast(&periods);
        let names: Vec<&str> = text
            .split(ALERT_SEPARATOR)
            .map(|block| block.lines().next().unwrap())
            .collect();
        assert_eq!(names, ["P1:", "P2:", "P3:", "P4:", "P5:"]);
    }

    #[test]
    fn test_format_forecast_fewer_than_five() {
        let periods = vec![period("Today"), period("Tonight")];
        assert_eq!(format_forecast(&periods).matches(ALERT_SEPARATOR).count(), 1);
    }
}
