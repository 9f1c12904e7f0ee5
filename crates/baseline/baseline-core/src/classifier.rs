//! Latest-change classification.

use baseline_spi::{BaselineError, ChangeVerdict, Direction, Result, Significance, TimeSeries};

/// Classify the change between the last two observations.
///
/// Both tests are strict: a zero delta is a `Decrease`, and a delta whose
/// magnitude equals `std_dev` is `NotSignificant`.
pub fn classify_change(series: &TimeSeries, std_dev: f64) -> Result<ChangeVerdict> {
    let observations = series.observations();
    let (last, previous) = match observations {
        [.., previous, last] => (last.value, previous.value),
        _ => {
            return Err(BaselineError::InsufficientData {
                required: 2,
                actual: observations.len(),
            })
        }
    };

    let delta = last - previous;
    let direction = if delta > 0.0 {
        Direction::Increase
    } else {
        Direction::Decrease
    };
    let significance = if delta.abs() > std_dev {
        Significance::Significant
    } else {
        Significance::NotSignificant
    };

    Ok(ChangeVerdict {
        direction,
        significance,
        delta,
    })
}
