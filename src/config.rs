/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub building: BuildingConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BuildingConfig {
    pub n_floors: u8,
    pub elevator_capacities: Vec<u32>,
}

/**
 * Strategy selection for the dispatcher.
 *
 * Every axis is resolved once at startup. Handlers match on these enums and never on
 * loose boolean flags.
 */
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DispatchConfig {
    #[serde(default)]
    pub call_matching: CallMatching,
    #[serde(default)]
    pub idle_pickup: IdlePickup,
    #[serde(default)]
    pub zoning: Zoning,
    #[serde(default)]
    pub large_car: LargeCar,
    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Which cars may answer a fresh hall call.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CallMatching {
    /// Idle cars, or nearby lightly loaded cars heading the caller's way.
    #[default]
    NearbyDetour,
    /// Idle cars, or cars with room heading the caller's way that have not passed them.
    SameDirection,
}

/// How an idle car picks from the pending pool.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdlePickup {
    #[default]
    Fifo,
    Closest,
    Highest,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Zoning {
    #[default]
    None,
    /// Upper half of the fleet parks at the top and skips lower-half calls.
    StickToTop,
}

/// Special treatment for high capacity cars.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LargeCar {
    Standard,
    /// Wait at the ground floor and batch car-button requests.
    #[default]
    BatchBoarding,
    /// Batch boarding, and run straight down without picking anyone up.
    ExpressDown,
}

impl LargeCar {
    pub fn batches_boarding(&self) -> bool {
        matches!(self, LargeCar::BatchBoarding | LargeCar::ExpressDown)
    }

    pub fn skips_downward_stops(&self) -> bool {
        *self == LargeCar::ExpressDown
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Thresholds {
    pub detour_max_load: f64,
    pub detour_max_distance: u8,
    pub pickup_max_load: f64,
    pub competing_max_distance: u8,
    pub boarding_max_load: f64,
    pub large_car_min_capacity: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            detour_max_load: 0.4,
            detour_max_distance: 3,
            pickup_max_load: 0.6,
            competing_max_distance: 2,
            boarding_max_load: 0.4,
            large_car_min_capacity: 6,
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    pub fn new(n_floors: u8, elevator_capacities: Vec<u32>) -> Config {
        Config {
            building: BuildingConfig {
                n_floors,
                elevator_capacities,
            },
            dispatch: DispatchConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.building.n_floors < 2 {
            return Err(ConfigError::Invalid(format!(
                "building needs at least 2 floors, got {}",
                self.building.n_floors
            )));
        }
        if self.building.elevator_capacities.is_empty() {
            return Err(ConfigError::Invalid("building has no elevators".into()));
        }
        if self.building.elevator_capacities.contains(&0) {
            return Err(ConfigError::Invalid("elevator capacity must be positive".into()));
        }

        let thresholds = &self.dispatch.thresholds;
        for (name, value) in [
            ("detour_max_load", thresholds.detour_max_load),
            ("pickup_max_load", thresholds.pickup_max_load),
            ("boarding_max_load", thresholds.boarding_max_load),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be within 0.0..=1.0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Highest floor number. An unvalidated building without floors still has floor 0.
    pub fn top_floor(&self) -> u8 {
        self.building.n_floors.saturating_sub(1)
    }
}
