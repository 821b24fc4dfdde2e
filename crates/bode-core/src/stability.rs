//! Stability classification from gain and phase margins

use std::fmt;

use crate::transfer_function::Crossover;

/// Stability verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    MarginallyStable,
    PossiblyUnstable,
    Unstable,
}

impl Stability {
    /// Short machine-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::MarginallyStable => "marginally_stable",
            Stability::PossiblyUnstable => "possibly_unstable",
            Stability::Unstable => "unstable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gain/phase margins and the resulting verdict
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityMargins {
    /// Phase margin in degrees (+inf if there is no gain crossover)
    pub phase_margin_deg: f64,
    /// Gain margin in dB (+inf if there is no phase crossover)
    pub gain_margin_db: f64,
    /// Stability verdict
    pub verdict: Stability,
    /// Sample where |H| crossed 0 dB
    pub gain_crossover: Option<Crossover>,
    /// Sample where the phase crossed -180°
    pub phase_crossover: Option<Crossover>,
}

impl StabilityMargins {
    /// True if the phase margin is infinite (no gain crossover found)
    pub fn phase_margin_is_infinite(&self) -> bool {
        self.phase_margin_deg == f64::INFINITY
    }

    /// True if the gain margin is infinite (no phase crossover found)
    pub fn gain_margin_is_infinite(&self) -> bool {
        self.gain_margin_db == f64::INFINITY
    }
}

/// Classify stability from the margins and a magnitude trace (dB)
///
/// The rules are checked in order and the first match wins:
///
/// 1. PM > 0 and GM > 0: stable
/// 2. PM = +inf and GM > 0: stable if every magnitude is below 0 dB,
///    possibly unstable if every magnitude is above 0 dB, otherwise
///    fall through to the next rules
/// 3. GM = +inf and PM > 0: stable
/// 4. GM = +inf and PM = +inf: stable
/// 5. PM = 0 or GM = 0: marginally stable
/// 6. anything else: unstable
///
/// Infinite margins already satisfy rule 1 when the other margin is
/// positive, so rules 2-4 only matter to callers that reorder them.
/// NaN margins compare false everywhere and land on rule 6.
pub fn classify(phase_margin_deg: f64, gain_margin_db: f64, magnitude_db: &[f64]) -> Stability {
    let pm = phase_margin_deg;
    let gm = gain_margin_db;

    if pm > 0.0 && gm > 0.0 {
        return Stability::Stable;
    }
    if pm == f64::INFINITY && gm > 0.0 {
        if magnitude_db.iter().all(|&m| m < 0.0) {
            return Stability::Stable;
        }
        if magnitude_db.iter().all(|&m| m > 0.0) {
            return Stability::PossiblyUnstable;
        }
    }
    if gm == f64::INFINITY && pm > 0.0 {
        return Stability::Stable;
    }
    if gm == f64::INFINITY && pm == f64::INFINITY {
        return Stability::Stable;
    }
    if pm == 0.0 || gm == 0.0 {
        return Stability::MarginallyStable;
    }
    Stability::Unstable
}
