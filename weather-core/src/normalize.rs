//! Raw provider payload to display-ready weather.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

use crate::{
    clock::{clock_time, date_info_at},
    icon::weather_icon_class,
    model::{DisplayWeather, RawMain, RawWeatherPayload},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizationError {
    #[error("weather payload is missing `{0}`")]
    MissingField(&'static str),
    #[error("weather payload field `{field}` holds an unrepresentable timestamp {value}")]
    InvalidTimestamp { field: &'static str, value: i64 },
}

/// Normalize against the server's local clock and zone.
pub fn normalize(raw: RawWeatherPayload) -> Result<DisplayWeather, NormalizationError> {
    normalize_at(raw, &Local::now())
}

/// Normalize with `now` as the current instant. Sunrise and sunset are
/// rendered in `now`'s zone.
pub fn normalize_at<Tz>(
    raw: RawWeatherPayload,
    now: &DateTime<Tz>,
) -> Result<DisplayWeather, NormalizationError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let condition = raw
        .weather
        .into_iter()
        .next()
        .ok_or(NormalizationError::MissingField("weather[0]"))?;
    let main = raw.main.ok_or(NormalizationError::MissingField("main"))?;
    let sys = raw.sys.ok_or(NormalizationError::MissingField("sys"))?;

    let (temperature, temp_min, temp_max, feels_like) = temperatures(&main)?;

    let tz = now.timezone();
    let sunrise = sys
        .sunrise
        .ok_or(NormalizationError::MissingField("sys.sunrise"))?;
    let sunset = sys
        .sunset
        .ok_or(NormalizationError::MissingField("sys.sunset"))?;

    Ok(DisplayWeather {
        location: raw.name.unwrap_or_default(),
        country: sys.country,
        weather_icon_class: weather_icon_class(condition.icon.as_deref()),
        condition: condition.main,
        description: condition.description,
        temperature,
        temp_min,
        temp_max,
        feels_like,
        humidity: main.humidity,
        pressure: main.pressure,
        wind_speed: raw.wind.and_then(|w| w.speed),
        visibility_km: raw.visibility.map(meters_to_km),
        sunrise: clock_time(sunrise, &tz).ok_or(NormalizationError::InvalidTimestamp {
            field: "sys.sunrise",
            value: sunrise,
        })?,
        sunset: clock_time(sunset, &tz).ok_or(NormalizationError::InvalidTimestamp {
            field: "sys.sunset",
            value: sunset,
        })?,
        utc_offset_secs: raw.timezone,
        date_info: date_info_at(now),
    })
}

fn temperatures(
    main: &RawMain,
) -> Result<(String, String, String, String), NormalizationError> {
    let field = |value: Option<f64>, name| {
        value
            .map(round_tenths)
            .ok_or(NormalizationError::MissingField(name))
    };

    Ok((
        field(main.temp, "main.temp")?,
        field(main.temp_min, "main.temp_min")?,
        field(main.temp_max, "main.temp_max")?,
        field(main.feels_like, "main.feels_like")?,
    ))
}

pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

/// Round to one decimal place, ties away from zero, and format with exactly
/// one fractional digit. Negative zero prints as `0.0`.
pub fn round_tenths(value: f64) -> String {
    // Adding 0.0 turns -0.0 into 0.0.
    let rounded = (value * 10.0).round() / 10.0 + 0.0;
    format!("{rounded:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DayStatus, RawCondition, RawSys, RawWind};
    use chrono::Utc;

    fn payload() -> RawWeatherPayload {
        RawWeatherPayload {
            weather: vec![RawCondition {
                icon: Some("10n".into()),
                main: Some("Rain".into()),
                description: Some("light rain".into()),
            }],
            main: Some(RawMain {
                temp: Some(15.249),
                temp_min: Some(15.25),
                temp_max: Some(-2.25),
                feels_like: Some(14.0),
                humidity: Some(81),
                pressure: Some(1012.0),
            }),
            visibility: Some(8500.0),
            wind: Some(RawWind { speed: Some(4.1) }),
            sys: Some(RawSys {
                country: Some("GB".into()),
                sunrise: Some(1_700_000_000),
                sunset: Some(1_700_030_000),
            }),
            name: Some("London".into()),
            timezone: Some(0),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 5, 14, 45, 0).unwrap()
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_tenths(15.249), "15.2");
        assert_eq!(round_tenths(15.25), "15.3");
        assert_eq!(round_tenths(-2.25), "-2.3");
        assert_eq!(round_tenths(0.05), "0.1");
        assert_eq!(round_tenths(21.0), "21.0");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(round_tenths(-0.04), "0.0");
        assert_eq!(round_tenths(-0.0), "0.0");
    }

    #[test]
    fn visibility_is_converted_without_rounding() {
        assert!((meters_to_km(8500.0) - 8.5).abs() < f64::EPSILON);
        assert!((meters_to_km(1234.0) - 1.234).abs() < 1e-12);
        assert_eq!(meters_to_km(0.0), 0.0);
    }

    #[test]
    fn normalizes_complete_payload() {
        let display = normalize_at(payload(), &now()).expect("payload is complete");

        assert_eq!(display.location, "London");
        assert_eq!(display.country.as_deref(), Some("GB"));
        assert_eq!(display.weather_icon_class, "wi-night-alt-rain");
        assert_eq!(display.description.as_deref(), Some("light rain"));
        assert_eq!(display.temperature, "15.2");
        assert_eq!(display.temp_min, "15.3");
        assert_eq!(display.temp_max, "-2.3");
        assert_eq!(display.feels_like, "14.0");
        assert_eq!(display.visibility_km, Some(8.5));
        assert_eq!(display.sunrise, "10:13 PM");
        assert_eq!(display.sunset, "6:33 AM");
        assert_eq!(display.date_info.date, "June 5, 2024");
        assert_eq!(display.date_info.day_status, DayStatus::Day);
    }

    #[test]
    fn missing_icon_falls_back_but_missing_condition_fails() {
        let mut raw = payload();
        raw.weather[0].icon = None;
        let display = normalize_at(raw, &now()).expect("icon is optional");
        assert_eq!(display.weather_icon_class, crate::icon::FALLBACK_ICON);

        let mut raw = payload();
        raw.weather.clear();
        assert_eq!(
            normalize_at(raw, &now()).unwrap_err(),
            NormalizationError::MissingField("weather[0]")
        );
    }

    #[test]
    fn missing_required_fields_are_reported_by_path() {
        let mut raw = payload();
        raw.main = None;
        assert_eq!(
            normalize_at(raw, &now()).unwrap_err(),
            NormalizationError::MissingField("main")
        );

        let mut raw = payload();
        if let Some(main) = raw.main.as_mut() {
            main.feels_like = None;
        }
        assert_eq!(
            normalize_at(raw, &now()).unwrap_err(),
            NormalizationError::MissingField("main.feels_like")
        );

        let mut raw = payload();
        if let Some(sys) = raw.sys.as_mut() {
            sys.sunset = None;
        }
        assert_eq!(
            normalize_at(raw, &now()).unwrap_err(),
            NormalizationError::MissingField("sys.sunset")
        );
    }

    #[test]
    fn absent_visibility_is_not_an_error() {
        let mut raw = payload();
        raw.visibility = None;
        let display = normalize_at(raw, &now()).expect("visibility is optional");
        assert_eq!(display.visibility_km, None);
    }

    #[test]
    fn out_of_range_sunrise_is_rejected() {
        let mut raw = payload();
        if let Some(sys) = raw.sys.as_mut() {
            sys.sunrise = Some(i64::MAX);
        }
        assert_eq!(
            normalize_at(raw, &now()).unwrap_err(),
            NormalizationError::InvalidTimestamp {
                field: "sys.sunrise",
                value: i64::MAX
            }
        );
    }

    #[test]
    fn normalization_is_repeatable_for_same_input() {
        let a = normalize_at(payload(), &now()).expect("first");
        let b = normalize_at(payload(), &now()).expect("second");
        assert_eq!(a, b);
    }

    #[test]
    fn decodes_provider_json() {
        let body = serde_json::json!({
            "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
            "main": { "temp": 18.04, "feels_like": 17.6, "temp_min": 16.9, "temp_max": 19.2,
                      "pressure": 1019, "humidity": 63 },
            "visibility": 10000,
            "wind": { "speed": 3.6, "deg": 250 },
            "sys": { "country": "GB", "sunrise": 1700000000, "sunset": 1700030000 },
            "timezone": 0,
            "name": "London",
            "cod": 200
        });
        let raw: RawWeatherPayload = serde_json::from_value(body).expect("valid payload");
        let display = normalize_at(raw, &now()).expect("complete");

        assert_eq!(display.weather_icon_class, "wi-day-sunny");
        assert_eq!(display.temperature, "18.0");
        assert_eq!(display.visibility_km, Some(10.0));
        assert_eq!(display.pressure, Some(1019.0));
    }
}
