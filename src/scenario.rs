/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::controller::HostEvent;
use crate::error::ScenarioError;

/***************************************/
/*             Public API              */
/***************************************/

/// Reads a scripted event sequence: a JSON array of host events.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Vec<HostEvent>, ScenarioError> {
    let path = path.as_ref();
    let scenario_str = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scenario(&scenario_str)
}

pub fn parse_scenario(scenario_str: &str) -> Result<Vec<HostEvent>, ScenarioError> {
    Ok(serde_json::from_str(scenario_str)?)
}
