use footballsim_core::ServiceSettings;
use footballsim_core::league::{DEFAULT_PREDICTION_MIN_WEEK, EARLIEST_PREDICTION_WEEK};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::{env, fmt};

pub const DEFAULT_PORT: u16 = 18000;

#[derive(Debug, PartialEq, Eq)]
pub struct SettingsError {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value '{}' for {}", self.value, self.key)
    }
}

impl std::error::Error for SettingsError {}

/// Process settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    /// Fixed seed for reproducible seasons; random when unset.
    pub simulation_seed: Option<u64>,
    pub prediction_min_week: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            port: DEFAULT_PORT,
            simulation_seed: None,
            prediction_min_week: DEFAULT_PREDICTION_MIN_WEEK,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Settings::default();

        let prediction_min_week: u8 =
            parse(&lookup, "PREDICTION_MIN_WEEK")?.unwrap_or(defaults.prediction_min_week);
        if prediction_min_week < EARLIEST_PREDICTION_WEEK {
            return Err(SettingsError {
                key: "PREDICTION_MIN_WEEK",
                value: prediction_min_week.to_string(),
            });
        }

        Ok(Settings {
            port: parse(&lookup, "PORT")?.unwrap_or(defaults.port),
            simulation_seed: parse(&lookup, "SIMULATION_SEED")?,
            prediction_min_week,
        })
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            prediction_min_week: self.prediction_min_week,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.simulation_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

fn parse<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, SettingsError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SettingsError { key, value }),
        _ => Ok(None),
    }
}
