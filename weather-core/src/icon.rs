//! OpenWeather condition codes to Weather Icons CSS classes.

/// Class used for any code outside the table.
pub const FALLBACK_ICON: &str = "wi-na";

/// Map a provider condition code (e.g. `"10d"`) to a Weather Icons class.
///
/// Total over its input: unknown, malformed and absent codes all yield
/// [`FALLBACK_ICON`].
pub fn weather_icon_class(code: Option<&str>) -> &'static str {
    match code {
        Some("01d") => "wi-day-sunny",
        Some("01n") => "wi-night-clear",
        Some("02d") => "wi-day-cloudy",
        Some("02n") => "wi-night-alt-cloudy",
        Some("03d" | "03n") => "wi-cloud",
        Some("04d" | "04n") => "wi-cloudy",
        Some("09d" | "09n") => "wi-showers",
        Some("10d") => "wi-day-rain",
        Some("10n") => "wi-night-alt-rain",
        Some("11d" | "11n") => "wi-thunderstorm",
        Some("13d" | "13n") => "wi-snow",
        Some("50d" | "50n") => "wi-fog",
        _ => FALLBACK_ICON,
    }
}
