//! Mapping from the raw OpenWeather payload onto [`WeatherReport`].

use chrono::NaiveTime;

use crate::model::{IconKey, ProviderPayload, WeatherReport};

const SECONDS_PER_DAY: i64 = 86_400;

/// Build a report from a successful payload.
///
/// Pure and total: callers only hand over bodies that already passed the
/// success check, and an empty `weather` list degrades to blank condition text
/// with the default icon.
pub fn normalize(raw: &ProviderPayload) -> WeatherReport {
    let primary = raw.weather.first();

    let icon_key = primary
        .map(|w| IconKey::from_code(&w.icon))
        .unwrap_or_default();

    let rain_last_hour_mm = raw
        .rain
        .as_ref()
        .and_then(|r| r.one_hour)
        .unwrap_or(0.0);

    WeatherReport {
        location: raw.name.clone(),
        temperature: floor_celsius(raw.main.temp),
        feels_like: floor_celsius(raw.main.feels_like),
        temp_min: floor_celsius(raw.main.temp_min),
        temp_max: floor_celsius(raw.main.temp_max),
        humidity: raw.main.humidity,
        wind_speed: raw.wind.speed,
        pressure: raw.main.pressure,
        visibility_meters: raw.visibility,
        clouds_percent: raw.clouds.all,
        rain_last_hour_mm,
        condition_main: primary.map(|w| w.main.clone()).unwrap_or_default(),
        condition_description: primary.map(|w| w.description.clone()).unwrap_or_default(),
        icon_key,
        sunrise: local_time_of_day(raw.sys.sunrise, raw.timezone),
        sunset: local_time_of_day(raw.sys.sunset, raw.timezone),
    }
}

/// Floor toward negative infinity, so `-0.3` becomes `-1`.
pub fn floor_celsius(value: f64) -> i32 {
    // `as` saturates on overflow and maps NaN to 0.
    value.floor() as i32
}

/// `HH:MM` of `UTC(timestamp + offset)`.
///
/// Plain epoch shifting, no tz database: the provider's offset already encodes DST.
pub fn local_time_of_day(timestamp: i64, offset_seconds: i64) -> String {
    let shifted = timestamp.saturating_add(offset_seconds);
    let secs = shifted.rem_euclid(SECONDS_PER_DAY) as u32;

    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
        .unwrap_or(NaiveTime::MIN)
        .format("%H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IconFamily, OwClouds, OwCondition, OwMain, OwRain, OwSys, OwWind};

    fn london(icon: &str) -> ProviderPayload {
        ProviderPayload {
            name: "London".to_string(),
            main: OwMain {
                temp: 11.8,
                feels_like: 10.2,
                temp_min: 9.5,
                temp_max: 13.9,
                humidity: 87,
                pressure: 1008,
            },
            wind: OwWind { speed: 4.63 },
            visibility: 9000,
            clouds: OwClouds { all: 90 },
            weather: vec![OwCondition {
                main: "Rain".to_string(),
                description: "moderate rain".to_string(),
                icon: icon.to_string(),
            }],
            rain: None,
            sys: OwSys { sunrise: 1700000000, sunset: 1700032000 },
            timezone: 0,
        }
    }

    #[test]
    fn london_rain_scenario() {
        let report = normalize(&london("10d"));

        assert_eq!(report.location, "London");
        assert_eq!(report.icon_key, IconKey::RainDay);
        assert_eq!(report.icon_key.family(), IconFamily::Rain);
        assert_eq!(report.temperature, 11);
        assert_eq!(report.feels_like, 10);
        assert_eq!(report.temp_min, 9);
        assert_eq!(report.temp_max, 13);
        assert_eq!(report.humidity, 87);
        assert_eq!(report.pressure, 1008);
        assert_eq!(report.visibility_meters, 9000);
        assert_eq!(report.clouds_percent, 90);
        assert_eq!(report.condition_main, "Rain");
        assert_eq!(report.condition_description, "moderate rain");
        assert_eq!(report.wind_speed, 4.63);
    }

    #[test]
    fn missing_rain_defaults_to_zero() {
        let report = normalize(&london("10d"));
        assert_eq!(report.rain_last_hour_mm, 0.0);

        let mut raw = london("10d");
        raw.rain = Some(OwRain { one_hour: None });
        assert_eq!(normalize(&raw).rain_last_hour_mm, 0.0);
    }

    #[test]
    fn present_rain_passes_through() {
        let mut raw = london("10d");
        raw.rain = Some(OwRain { one_hour: Some(0.37) });
        assert_eq!(normalize(&raw).rain_last_hour_mm, 0.37);
    }

    #[test]
    fn unknown_icon_resolves_to_default() {
        assert_eq!(normalize(&london("11n")).icon_key, IconKey::ClearDay);
        assert_eq!(normalize(&london("50d")).icon_key, IconKey::ClearDay);
    }

    #[test]
    fn empty_condition_list_is_tolerated() {
        let mut raw = london("10d");
        raw.weather.clear();

        let report = normalize(&raw);
        assert_eq!(report.icon_key, IconKey::ClearDay);
        assert!(report.condition_main.is_empty());
        assert!(report.condition_description.is_empty());
    }

    #[test]
    fn temperatures_floor_toward_negative_infinity() {
        assert_eq!(floor_celsius(-0.3), -1);
        assert_eq!(floor_celsius(-0.5), -1);
        assert_eq!(floor_celsius(-4.0), -4);
        assert_eq!(floor_celsius(0.0), 0);
        assert_eq!(floor_celsius(21.99), 21);

        let mut raw = london("01n");
        raw.main.temp = -0.3;
        raw.main.feels_like = -5.01;
        let report = normalize(&raw);
        assert_eq!(report.temperature, -1);
        assert_eq!(report.feels_like, -6);
    }

    #[test]
    fn local_time_applies_offset() {
        // 2023-11-14 22:13:20 UTC shifted by +05:30.
        assert_eq!(local_time_of_day(1700000000, 19800), "03:43");
        assert_eq!(local_time_of_day(1700000000, 0), "22:13");
        assert_eq!(local_time_of_day(1700000000, -18000), "17:13");
    }

    #[test]
    fn local_time_is_zero_padded_and_total() {
        assert_eq!(local_time_of_day(0, 0), "00:00");
        assert_eq!(local_time_of_day(3660, 0), "01:01");
        assert_eq!(local_time_of_day(-60, 0), "23:59");
        assert_eq!(local_time_of_day(i64::MAX, i64::MAX).len(), 5);
    }

    #[test]
    fn normalize_is_deterministic() {
        let raw = london("04n");
        assert_eq!(normalize(&raw), normalize(&raw));
    }

    #[test]
    fn sun_times_use_payload_timezone() {
        let mut raw = london("01d");
        raw.timezone = 19800;
        let report = normalize(&raw);
        assert_eq!(report.sunrise, "03:43");
        // 1700032000 = 2023-11-15 07:06:40 UTC
        assert_eq!(report.sunset, "12:36");
    }
}
