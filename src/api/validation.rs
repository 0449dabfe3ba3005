use crate::error::{ChartError, ChartResult};

use super::EditorConfig;

pub(super) fn validate_editor_config(config: EditorConfig) -> ChartResult<EditorConfig> {
    if let Some(epsilon) = config.epsilon {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ChartError::InvalidData(
                "hit epsilon must be finite and > 0".to_owned(),
            ));
        }
    }
    if !config.sync_tolerance.is_finite() || config.sync_tolerance <= 0.0 {
        return Err(ChartError::InvalidData(
            "sync tolerance must be finite and > 0".to_owned(),
        ));
    }
    if let Some(bounds) = config.bounds {
        bounds.validate()?;
    }
    Ok(config)
}

pub(super) fn validate_index(index: usize, len: usize) -> ChartResult<usize> {
    if index >= len {
        return Err(ChartError::InvalidData(format!(
            "point index {index} out of range for {len} points"
        )));
    }
    Ok(index)
}
