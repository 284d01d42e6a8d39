use serde::{Deserialize, Serialize};

/// Decoded body of a successful OpenWeather `/data/2.5/weather` response.
///
/// Only the fields the normalizer reads are declared; serde ignores the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderPayload {
    pub name: String,
    pub main: OwMain,
    pub wind: OwWind,
    pub visibility: i64,
    pub clouds: OwClouds,
    pub weather: Vec<OwCondition>,
    #[serde(default)]
    pub rain: Option<OwRain>,
    pub sys: OwSys,
    /// Shift from UTC in seconds.
    pub timezone: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwWind {
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwClouds {
    pub all: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwCondition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwRain {
    #[serde(rename = "1h", default)]
    pub one_hour: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwSys {
    pub sunrise: i64,
    pub sunset: i64,
}

/// Body OpenWeather sends alongside a failure, e.g. `{"cod":"404","message":"city not found"}`.
///
/// `cod` is a string on some endpoints and a number on others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub cod: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Broad weather family a pictogram belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconFamily {
    Clear,
    FewClouds,
    Clouds,
    BrokenClouds,
    Rain,
    Snow,
}

/// Provider condition codes that have a dedicated pictogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IconKey {
    #[default]
    #[serde(rename = "01d")]
    ClearDay,
    #[serde(rename = "01n")]
    ClearNight,
    #[serde(rename = "02d")]
    FewCloudsDay,
    #[serde(rename = "02n")]
    FewCloudsNight,
    #[serde(rename = "03d")]
    CloudsDay,
    #[serde(rename = "03n")]
    CloudsNight,
    #[serde(rename = "04d")]
    BrokenCloudsDay,
    #[serde(rename = "04n")]
    BrokenCloudsNight,
    #[serde(rename = "09d")]
    ShowerRainDay,
    #[serde(rename = "09n")]
    ShowerRainNight,
    #[serde(rename = "10d")]
    RainDay,
    #[serde(rename = "10n")]
    RainNight,
    #[serde(rename = "13d")]
    SnowDay,
    #[serde(rename = "13n")]
    SnowNight,
}

impl IconKey {
    /// Resolve a provider code. Codes without a pictogram (thunderstorm, mist, ...)
    /// fall back to [`IconKey::ClearDay`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "01d" => IconKey::ClearDay,
            "01n" => IconKey::ClearNight,
            "02d" => IconKey::FewCloudsDay,
            "02n" => IconKey::FewCloudsNight,
            "03d" => IconKey::CloudsDay,
            "03n" => IconKey::CloudsNight,
            "04d" => IconKey::BrokenCloudsDay,
            "04n" => IconKey::BrokenCloudsNight,
            "09d" => IconKey::ShowerRainDay,
            "09n" => IconKey::ShowerRainNight,
            "10d" => IconKey::RainDay,
            "10n" => IconKey::RainNight,
            "13d" => IconKey::SnowDay,
            "13n" => IconKey::SnowNight,
            _ => IconKey::default(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            IconKey::ClearDay => "01d",
            IconKey::ClearNight => "01n",
            IconKey::FewCloudsDay => "02d",
            IconKey::FewCloudsNight => "02n",
            IconKey::CloudsDay => "03d",
            IconKey::CloudsNight => "03n",
            IconKey::BrokenCloudsDay => "04d",
            IconKey::BrokenCloudsNight => "04n",
            IconKey::ShowerRainDay => "09d",
            IconKey::ShowerRainNight => "09n",
            IconKey::RainDay => "10d",
            IconKey::RainNight => "10n",
            IconKey::SnowDay => "13d",
            IconKey::SnowNight => "13n",
        }
    }

    pub fn family(&self) -> IconFamily {
        match self {
            IconKey::ClearDay | IconKey::ClearNight => IconFamily::Clear,
            IconKey::FewCloudsDay | IconKey::FewCloudsNight => IconFamily::FewClouds,
            IconKey::CloudsDay | IconKey::CloudsNight => IconFamily::Clouds,
            IconKey::BrokenCloudsDay | IconKey::BrokenCloudsNight => IconFamily::BrokenClouds,
            IconKey::ShowerRainDay
            | IconKey::ShowerRainNight
            | IconKey::RainDay
            | IconKey::RainNight => IconFamily::Rain,
            IconKey::SnowDay | IconKey::SnowNight => IconFamily::Snow,
        }
    }

    /// Emoji shown for this condition.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKey::ClearDay => "\u{2600}\u{FE0F}",
            IconKey::ClearNight => "\u{1F319}",
            IconKey::FewCloudsDay => "\u{26C5}",
            IconKey::FewCloudsNight | IconKey::CloudsDay | IconKey::CloudsNight => {
                "\u{2601}\u{FE0F}"
            }
            IconKey::BrokenCloudsDay | IconKey::BrokenCloudsNight => "\u{1F326}\u{FE0F}",
            IconKey::ShowerRainDay
            | IconKey::ShowerRainNight
            | IconKey::RainDay
            | IconKey::RainNight => "\u{1F327}\u{FE0F}",
            IconKey::SnowDay | IconKey::SnowNight => "\u{2744}\u{FE0F}",
        }
    }

    pub const fn all() -> &'static [IconKey] {
        &[
            IconKey::ClearDay,
            IconKey::ClearNight,
            IconKey::FewCloudsDay,
            IconKey::FewCloudsNight,
            IconKey::CloudsDay,
            IconKey::CloudsNight,
            IconKey::BrokenCloudsDay,
            IconKey::BrokenCloudsNight,
            IconKey::ShowerRainDay,
            IconKey::ShowerRainNight,
            IconKey::RainDay,
            IconKey::RainNight,
            IconKey::SnowDay,
            IconKey::SnowNight,
        ]
    }
}

impl std::fmt::Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Display-ready snapshot of one successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature: i32,
    pub feels_like: i32,
    pub temp_min: i32,
    pub temp_max: i32,
    pub humidity: u8,
    /// Passed through in the provider's unit (m/s for metric requests).
    pub wind_speed: f64,
    pub pressure: i64,
    pub visibility_meters: i64,
    pub clouds_percent: u8,
    pub rain_last_hour_mm: f64,
    pub condition_main: String,
    pub condition_description: String,
    pub icon_key: IconKey,
    /// Local `HH:MM`.
    pub sunrise: String,
    pub sunset: String,
}
