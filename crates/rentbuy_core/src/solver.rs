//! Break-even rent search
//!
//! Finds the rent at which a monotonically increasing cost function meets a
//! target. No bracket is needed up front: the search walks the guess up or
//! down by a fixed step until the target is bracketed, then bisects.
//!
//! ```text
//! residual = target - cost(guess)
//!
//! residual > 0   guess too low   lower = guess; no upper yet? guess += step
//! residual <= 0  guess too high  upper = guess; no lower yet? guess -= step
//! both bounds known              guess = midpoint(lower, upper)
//! ```

use serde::Serialize;

use crate::error::SolveError;

/// Observer called once per iteration with the iteration number and the
/// search state. `state.guess` is the rent just evaluated and `state.residual`
/// its residual; the bounds are the ones that guess was chosen from.
pub type ProgressCallback<'a> = &'a mut dyn FnMut(usize, &BisectionState);

/// Tuning for the break-even search
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Iteration budget; running out is an error
    pub max_iterations: usize,
    /// Converged once |residual| is at most this (currency units)
    pub tolerance: f64,
    /// Amount the guess moves while still looking for a bracket
    pub step: f64,
    /// First guess is the home price divided by this
    pub initial_guess_divisor: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            tolerance: 1.0,
            step: 100.0,
            initial_guess_divisor: 250.0,
        }
    }
}

impl SolverConfig {
    pub fn initial_guess(&self, home_value: f64) -> f64 {
        home_value / self.initial_guess_divisor
    }
}

/// Which bounds the search has found so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Nothing evaluated yet
    Initial,
    /// Lower bound known, still stepping up for an upper one
    UnbracketedHigh,
    /// Upper bound known, still stepping down for a lower one
    UnbracketedLow,
    Bracketed,
}

/// Mutable search state. Once both bounds are set, `guess` is their midpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct BisectionState {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub guess: f64,
    pub residual: f64,
    pub iterations_remaining: usize,
}

impl BisectionState {
    pub fn new(initial_guess: f64, max_iterations: usize) -> Self {
        Self {
            lower: None,
            upper: None,
            guess: initial_guess,
            residual: f64::INFINITY,
            iterations_remaining: max_iterations,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        match (self.lower, self.upper) {
            (None, None) => SearchPhase::Initial,
            (Some(_), None) => SearchPhase::UnbracketedHigh,
            (None, Some(_)) => SearchPhase::UnbracketedLow,
            (Some(_), Some(_)) => SearchPhase::Bracketed,
        }
    }

    /// Record `residual` for the current guess and move to the next guess.
    pub fn advance(&mut self, residual: f64, step: f64) {
        self.residual = residual;
        if residual > 0.0 {
            self.lower = Some(self.guess);
            if self.upper.is_none() {
                self.guess += step;
                return;
            }
        } else {
            self.upper = Some(self.guess);
            if self.lower.is_none() {
                self.guess -= step;
                return;
            }
        }
        if let (Some(lower), Some(upper)) = (self.lower, self.upper) {
            self.guess = f64::midpoint(lower, upper);
        }
    }
}

/// A converged break-even point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakEven {
    /// Monthly rent at which both sides cost the same
    pub rent: f64,
    /// `target - cost(rent)`, within tolerance
    pub residual: f64,
    /// Cost evaluations used
    pub iterations: usize,
}

/// Find the rent where `cost(rent)` meets `target`.
///
/// `cost` must be increasing in rent. Running out of iterations, or a cost
/// that turns NaN or infinite, is an error rather than a best guess.
pub fn solve_break_even<F>(
    target: f64,
    initial_guess: f64,
    config: &SolverConfig,
    mut cost: F,
    mut progress: Option<ProgressCallback>,
) -> Result<BreakEven, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let mut state = BisectionState::new(initial_guess, config.max_iterations);
    let mut iterations = 0;

    while state.iterations_remaining > 0 {
        state.iterations_remaining -= 1;
        iterations += 1;

        let residual = target - cost(state.guess);
        if !residual.is_finite() {
            return Err(SolveError::NonFiniteResidual {
                guess: state.guess,
                residual,
            });
        }

        state.residual = residual;
        if let Some(observe) = progress.as_deref_mut() {
            observe(iterations, &state);
        }

        if residual.abs() <= config.tolerance {
            return Ok(BreakEven {
                rent: state.guess,
                residual,
                iterations,
            });
        }

        state.advance(residual, config.step);
    }

    Err(SolveError::NoConvergence {
        iterations,
        last_guess: state.guess,
        residual: state.residual,
    })
}
