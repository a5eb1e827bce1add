//! Solar-term instant search.
//!
//! Solves `apparent_solar_longitude(t) = target` by Newton iteration, using the
//! mean solar motion (360° per tropical year) as the derivative. The solution
//! is in TT; ΔT turns it into UT, which is rounded to whole seconds.

use bazi_base::SolarTerm;
use bazi_time::{Epoch, calendar_to_jd, delta_t_seconds, jd_to_calendar};
use tracing::trace;

use crate::error::JieqiError;
use crate::sun::apparent_solar_longitude_deg;

/// Mean tropical year in days.
const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Convergence threshold on the Newton step, in days (~1 ms).
const STEP_TOLERANCE_DAYS: f64 = 1e-8;

const MAX_ITERATIONS: usize = 50;

/// Normalize an angle to [-180, +180].
pub(crate) fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Julian Ephemeris Day (TT) at which `term` of `solar_year` begins.
///
/// The solar year starts at 立春 (around Feb 4 of `solar_year`); 小寒 and
/// 大寒 of a solar year fall in January of the following civil year.
pub fn solar_term_jd_tt(solar_year: i32, term: SolarTerm) -> Result<f64, JieqiError> {
    let target = term.longitude_deg();
    let mut jd = calendar_to_jd(solar_year, 2, 4.0)
        + term.index() as f64 * TROPICAL_YEAR_DAYS / 24.0;

    for iteration in 0..MAX_ITERATIONS {
        let lon = apparent_solar_longitude_deg(jd);
        let step = normalize_to_pm180(target - lon) * TROPICAL_YEAR_DAYS / 360.0;
        jd += step;
        if step.abs() < STEP_TOLERANCE_DAYS {
            trace!(solar_year, term = term.name(), iteration, jd, "solar term converged");
            return Ok(jd);
        }
    }
    Err(JieqiError::NoConvergence {
        year: solar_year,
        term,
    })
}

/// UT instant of `term` of `solar_year`, rounded to the whole second.
pub fn solar_term_epoch(solar_year: i32, term: SolarTerm) -> Result<Epoch, JieqiError> {
    let jd_tt = solar_term_jd_tt(solar_year, term)?;
    let (year, month, _) = jd_to_calendar(jd_tt);
    let decimal_year = year as f64 + (month as f64 - 0.5) / 12.0;
    let jd_ut = jd_tt - delta_t_seconds(decimal_year) / 86_400.0;
    Ok(Epoch::from_jd(jd_ut).round_to_second())
}
