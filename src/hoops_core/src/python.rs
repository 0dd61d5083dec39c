//! Python bindings via PyO3 (feature `python`).

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::config::{RankingOrientation, SimulationConfig};
use crate::constants::{BASE_SCORE, ELO_SCALE, MAX_MARGIN};
use crate::error::TournamentError;
use crate::tournament::Tournament;
use crate::win_prob::logistic;

impl From<TournamentError> for PyErr {
    fn from(err: TournamentError) -> PyErr {
        if err.is_internal() {
            PyRuntimeError::new_err(err.to_string())
        } else {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// Probability that a team ranked `ranking1` beats one ranked `ranking2`.
#[pyfunction]
#[pyo3(signature = (ranking1, ranking2, higher_is_stronger = false, scale = ELO_SCALE))]
fn win_probability(ranking1: f64, ranking2: f64, higher_is_stronger: bool, scale: f64) -> f64 {
    let orientation = if higher_is_stronger {
        RankingOrientation::HigherIsStronger
    } else {
        RankingOrientation::LowerIsStronger
    };
    logistic(orientation.advantage(ranking1, ranking2), scale)
}

/// Simulate one tournament from a groups JSON document.
///
/// Returns the full result serialized as JSON.
#[pyfunction]
#[pyo3(signature = (groups_json, seed = None, config_toml = None))]
fn simulate_tournament(
    groups_json: &str,
    seed: Option<u64>,
    config_toml: Option<&str>,
) -> PyResult<String> {
    let config = match config_toml {
        Some(toml) => SimulationConfig::from_toml_str(toml)?,
        None => SimulationConfig::default(),
    };
    let result = Tournament::from_json(groups_json, config)?.simulate(seed)?;
    serde_json::to_string(&result).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// Python module definition
#[pymodule]
fn hoops_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(win_probability, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_tournament, m)?)?;

    m.add("BASE_SCORE", BASE_SCORE)?;
    m.add("MAX_MARGIN", MAX_MARGIN)?;
    m.add("ELO_SCALE", ELO_SCALE)?;

    Ok(())
}
