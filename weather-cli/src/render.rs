use std::fmt::Write;

use weather_core::{ViewState, WeatherReport};

const EMPTY_STATE: &str = "\u{1F324}\u{FE0F}  Enter a city to get started";

/// Multi-line card for one report.
pub fn report(r: &WeatherReport) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}  {}", r.icon_key.glyph(), r.location);
    let _ = writeln!(out, "   {}", capitalize(&r.condition_description));
    let _ = writeln!(out);
    let _ = writeln!(out, "   {}°C   feels like {}°C", r.temperature, r.feels_like);
    let _ = writeln!(out, "   max {}°C / min {}°C", r.temp_max, r.temp_min);
    let _ = writeln!(out, "   sunrise {}   sunset {}", r.sunrise, r.sunset);
    let _ = writeln!(out);
    let _ = writeln!(out, "   {:<12}{} m/s", "Wind", r.wind_speed);
    let _ = writeln!(out, "   {:<12}{}%", "Humidity", r.humidity);
    let _ = writeln!(out, "   {:<12}{} hPa", "Pressure", r.pressure);
    let _ = writeln!(out, "   {:<12}{}", "Visibility", visibility_km(r.visibility_meters));
    let _ = writeln!(out, "   {:<12}{}%", "Clouds", r.clouds_percent);
    let _ = write!(out, "   {:<12}{} mm", "Rain (1h)", r.rain_last_hour_mm);

    out
}

/// Whatever is currently on screen: notice banner, then the report or the empty state.
pub fn view(state: &ViewState) -> String {
    let mut out = String::new();

    if let Some(notice) = state.notice() {
        let _ = writeln!(out, "\u{2714} {notice}");
        let _ = writeln!(out);
    }

    match state.report() {
        Some(r) => out.push_str(&report(r)),
        None => out.push_str(EMPTY_STATE),
    }

    out
}

fn visibility_km(meters: i64) -> String {
    format!("{:.1} km", meters as f64 / 1000.0)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
