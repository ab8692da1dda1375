//! Nelder–Mead downhill simplex search.
//!
//! A direct-search method: it keeps `n + 1` vertices in an `n`-dimensional
//! parameter space and moves the worst vertex by reflection, expansion,
//! contraction or a shrink of the whole simplex toward the best vertex. Only
//! objective values are compared, so kinks in the objective are harmless.
//!
//! The search is fully deterministic. Ties between equal objective values are
//! resolved by a stable sort, so identical inputs always walk the same path.

use crate::loss::Objective;
use crate::model::ParamOps;
use crate::optimizer::{Minimizer, Minimum};
use std::cell::Cell;

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Nelder–Mead minimizer with restarts.
///
/// Defaults:
/// - `max_iterations`: 1000 (per run)
/// - `max_evaluations`: 4000 (per run)
/// - `xatol`: 1e-8
/// - `fatol`: 1e-10
/// - `initial_step`: 0.05 (relative)
/// - `zero_step`: 0.00025 (absolute, for zero components)
/// - `restarts`: 3
///
/// A run converges when every vertex lies within `xatol` of the best one in
/// every coordinate *and* every vertex value lies within `fatol` of the best
/// value. After a converged run the simplex is rebuilt around the incumbent
/// and the search repeats, up to `restarts` times, stopping as soon as a
/// restart fails to improve by more than `fatol`. Restarting recovers from
/// the simplex collapsing along a kink of a non-smooth objective.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NelderMead {
    pub(crate) max_iterations: usize,
    pub(crate) max_evaluations: usize,
    pub(crate) xatol: f64,
    pub(crate) fatol: f64,
    pub(crate) initial_step: f64,
    pub(crate) zero_step: f64,
    pub(crate) restarts: usize,
}

impl Default for NelderMead {
    fn default() -> Self {
        NelderMeadBuilder::new().build()
    }
}

impl NelderMead {
    /// Starts the builder with default settings.
    pub fn builder() -> NelderMeadBuilder {
        NelderMeadBuilder::new()
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn max_evaluations(&self) -> usize {
        self.max_evaluations
    }

    pub fn xatol(&self) -> f64 {
        self.xatol
    }

    pub fn fatol(&self) -> f64 {
        self.fatol
    }

    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Vertices of the starting simplex around `x0`.
    ///
    /// Vertex `i + 1` perturbs coordinate `i` by `initial_step` relative to its
    /// value, or by `zero_step` when the value is zero.
    fn initial_simplex<P: ParamOps>(&self, x0: &P) -> Vec<P> {
        let mut vertices = Vec::with_capacity(x0.dim() + 1);
        vertices.push(x0.clone());
        for axis in 0..x0.dim() {
            let v = x0.get(axis);
            let moved = if v != 0.0 {
                (1.0 + self.initial_step) * v
            } else {
                self.zero_step
            };
            vertices.push(x0.with(axis, moved));
        }
        vertices
    }

    /// One simplex run from `x0`, whose value `f0` is already known.
    fn run<P, F>(&self, objective: &F, x0: P, f0: f64) -> Minimum<P>
    where
        P: ParamOps,
        F: Objective<P> + ?Sized,
    {
        let evaluations = Cell::new(0usize);
        let eval = |p: &P| {
            evaluations.set(evaluations.get() + 1);
            let v = objective.evaluate(p);
            if v.is_nan() {
                f64::INFINITY
            } else {
                v
            }
        };

        let mut simplex: Vec<(P, f64)> = Vec::with_capacity(x0.dim() + 1);
        for (i, vertex) in self.initial_simplex(&x0).into_iter().enumerate() {
            let value = if i == 0 { f0 } else { eval(&vertex) };
            simplex.push((vertex, value));
        }
        let n = simplex.len() - 1;

        let mut iterations = 0;
        let converged = loop {
            simplex.sort_by(|a, b| a.1.total_cmp(&b.1));

            let (best, f_best) = (&simplex[0].0, simplex[0].1);
            let x_spread = simplex[1..]
                .iter()
                .map(|(p, _)| p.max_abs_diff(best))
                .fold(0.0, f64::max);
            let f_spread = simplex[1..]
                .iter()
                .map(|(_, f)| (f - f_best).abs())
                .fold(0.0, f64::max);
            if x_spread <= self.xatol && f_spread <= self.fatol {
                break true;
            }
            if iterations >= self.max_iterations || evaluations.get() >= self.max_evaluations {
                break false;
            }
            iterations += 1;

            // centroid of every vertex except the worst
            let centroid = simplex[1..n]
                .iter()
                .fold(simplex[0].0.clone(), |acc, (p, _)| acc.add(p))
                .scale(1.0 / n as f64);
            let (worst, f_worst) = simplex[n].clone();
            let f_second_worst = simplex[n - 1].1;

            let reflected = centroid.add(&centroid.sub(&worst).scale(REFLECTION));
            let f_reflected = eval(&reflected);

            let step = if f_reflected < f_best {
                let expanded = centroid.add(&reflected.sub(&centroid).scale(EXPANSION));
                let f_expanded = eval(&expanded);
                if f_expanded < f_reflected {
                    simplex[n] = (expanded, f_expanded);
                    "expand"
                } else {
                    simplex[n] = (reflected, f_reflected);
                    "reflect"
                }
            } else if f_reflected < f_second_worst {
                simplex[n] = (reflected, f_reflected);
                "reflect"
            } else {
                let (contracted, f_contracted, accept) = if f_reflected < f_worst {
                    let c = centroid.add(&reflected.sub(&centroid).scale(CONTRACTION));
                    let fc = eval(&c);
                    (c, fc, fc <= f_reflected)
                } else {
                    let c = centroid.add(&worst.sub(&centroid).scale(CONTRACTION));
                    let fc = eval(&c);
                    (c, fc, fc < f_worst)
                };
                if accept {
                    simplex[n] = (contracted, f_contracted);
                    "contract"
                } else {
                    let anchor = simplex[0].0.clone();
                    for vertex in simplex[1..].iter_mut() {
                        let p = anchor.add(&vertex.0.sub(&anchor).scale(SHRINK));
                        let f = eval(&p);
                        *vertex = (p, f);
                    }
                    "shrink"
                }
            };

            log::trace!(
                "nelder-mead iteration {}: {} (best = {:.6e})",
                iterations,
                step,
                simplex[0].1.min(simplex[n].1)
            );
        };

        let (params, value) = simplex.swap_remove(0);
        Minimum {
            params,
            value,
            initial_value: f0,
            iterations,
            evaluations: evaluations.get(),
            restarts: 0,
            converged,
        }
    }
}

impl<P: ParamOps> Minimizer<P> for NelderMead {
    fn minimize<F>(&self, objective: &F, x0: P) -> Minimum<P>
    where
        F: Objective<P> + ?Sized,
    {
        let initial_value = objective.evaluate(&x0);
        let mut best = self.run(objective, x0, initial_value);
        best.evaluations += 1;

        while best.converged && best.restarts < self.restarts {
            let next = self.run(objective, best.params.clone(), best.value);
            let improvement = absorb_restart(&mut best, next);

            log::debug!(
                "nelder-mead restart {}: value = {:.6e}, improvement = {:.3e}",
                best.restarts,
                best.value,
                improvement
            );
            if improvement <= self.fatol {
                break;
            }
        }

        best.initial_value = initial_value;
        log::debug!(
            "nelder-mead {} after {} iterations, {} evaluations, {} restarts (value = {:.6e})",
            if best.converged {
                "converged"
            } else {
                "exhausted its budget"
            },
            best.iterations,
            best.evaluations,
            best.restarts,
            best.value
        );
        best
    }
}

/// Folds a restart run into the incumbent and returns the improvement.
///
/// Budget counters always accumulate. The restart's point, value and
/// convergence flag are only taken over when it strictly improved, so a
/// rejected restart never downgrades a converged incumbent.
fn absorb_restart<P>(best: &mut Minimum<P>, next: Minimum<P>) -> f64 {
    let improvement = best.value - next.value;
    best.iterations += next.iterations;
    best.evaluations += next.evaluations;
    best.restarts += 1;
    if improvement > 0.0 {
        best.params = next.params;
        best.value = next.value;
        best.converged = next.converged;
    }
    improvement
}

/// Fluent builder for [`NelderMead`].
#[derive(Debug, Clone)]
pub struct NelderMeadBuilder {
    max_iterations: usize,
    max_evaluations: usize,
    xatol: f64,
    fatol: f64,
    initial_step: f64,
    zero_step: f64,
    restarts: usize,
}

impl NelderMeadBuilder {
    pub fn new() -> Self {
        Self {
            max_iterations: 1000,
            max_evaluations: 4000,
            xatol: 1e-8,
            fatol: 1e-10,
            initial_step: 0.05,
            zero_step: 0.00025,
            restarts: 3,
        }
    }

    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    pub fn max_evaluations(mut self, evaluations: usize) -> Self {
        self.max_evaluations = evaluations;
        self
    }

    /// Convergence tolerance on the simplex extent (per coordinate).
    pub fn xatol(mut self, tol: f64) -> Self {
        self.xatol = tol;
        self
    }

    /// Convergence tolerance on the spread of objective values.
    pub fn fatol(mut self, tol: f64) -> Self {
        self.fatol = tol;
        self
    }

    /// Relative size of the initial simplex along non-zero coordinates.
    pub fn initial_step(mut self, step: f64) -> Self {
        self.initial_step = step;
        self
    }

    /// Absolute size of the initial simplex along zero coordinates.
    pub fn zero_step(mut self, step: f64) -> Self {
        self.zero_step = step;
        self
    }

    pub fn restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    pub fn build(self) -> NelderMead {
        NelderMead {
            max_iterations: self.max_iterations,
            max_evaluations: self.max_evaluations,
            xatol: self.xatol,
            fatol: self.fatol,
            initial_step: self.initial_step,
            zero_step: self.zero_step,
            restarts: self.restarts,
        }
    }
}

impl Default for NelderMeadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineParams;

    fn rosenbrock(p: &[f64; 2]) -> f64 {
        (1.0 - p[0]).powi(2) + 100.0 * (p[1] - p[0] * p[0]).powi(2)
    }

    // === Builder Tests ===

    #[test]
    fn test_builder_default_values() {
        let nm = NelderMead::default();
        assert_eq!(nm.max_iterations(), 1000);
        assert_eq!(nm.max_evaluations(), 4000);
        assert_eq!(nm.xatol(), 1e-8);
        assert_eq!(nm.fatol(), 1e-10);
        assert_eq!(nm.restarts(), 3);
        assert_eq!(nm.initial_step, 0.05);
        assert_eq!(nm.zero_step, 0.00025);
    }

    #[test]
    fn test_builder_chaining() {
        let nm = NelderMead::builder()
            .max_iterations(50)
            .max_evaluations(200)
            .xatol(1e-4)
            .fatol(1e-6)
            .initial_step(0.1)
            .zero_step(0.01)
            .restarts(0)
            .build();

        assert_eq!(nm.max_iterations(), 50);
        assert_eq!(nm.max_evaluations(), 200);
        assert_eq!(nm.xatol(), 1e-4);
        assert_eq!(nm.fatol(), 1e-6);
        assert_eq!(nm.initial_step, 0.1);
        assert_eq!(nm.zero_step, 0.01);
        assert_eq!(nm.restarts(), 0);
    }

    // === Simplex Tests ===

    #[test]
    fn test_initial_simplex_relative_and_zero_steps() {
        let nm = NelderMead::default();
        let simplex = nm.initial_simplex(&[2.0, 0.0]);
        assert_eq!(simplex.len(), 3);
        assert_eq!(simplex[0], [2.0, 0.0]);
        assert!((simplex[1][0] - 2.1).abs() < 1e-12);
        assert_eq!(simplex[1][1], 0.0);
        assert_eq!(simplex[2], [2.0, 0.00025]);
    }

    // === Minimization Tests ===

    #[test]
    fn test_minimize_quadratic() {
        let f = |p: &[f64; 2]| (p[0] - 3.0).powi(2) + 2.0 * (p[1] + 1.0).powi(2);
        let min = NelderMead::default().minimize(&f, [0.0, 0.0]);

        assert!(min.converged);
        assert!((min.params[0] - 3.0).abs() < 1e-5, "x = {:?}", min.params);
        assert!((min.params[1] + 1.0).abs() < 1e-5, "x = {:?}", min.params);
        assert!(min.value < 1e-9);
    }

    #[test]
    fn test_minimize_rosenbrock() {
        let min = NelderMead::default().minimize(&rosenbrock, [-1.2, 1.0]);

        assert!(min.converged);
        assert!((min.params[0] - 1.0).abs() < 1e-4, "x = {:?}", min.params);
        assert!((min.params[1] - 1.0).abs() < 1e-4, "x = {:?}", min.params);
    }

    #[test]
    fn test_minimize_non_smooth() {
        // |x - 1| + 2|y + 0.5| has a kink at its minimum
        let f = |p: &[f64; 2]| (p[0] - 1.0).abs() + 2.0 * (p[1] + 0.5).abs();
        let min = NelderMead::default().minimize(&f, [0.0, 0.0]);

        assert!((min.params[0] - 1.0).abs() < 1e-4, "x = {:?}", min.params);
        assert!((min.params[1] + 0.5).abs() < 1e-4, "x = {:?}", min.params);
    }

    #[test]
    fn test_minimize_line_params() {
        let f = |p: &LineParams| (p.slope - 0.6).powi(2) + (p.intercept - 4.0).powi(2);
        let min = NelderMead::default().minimize(&f, LineParams::default());

        assert!((min.params.slope - 0.6).abs() < 1e-4);
        assert!((min.params.intercept - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_value_never_exceeds_initial() {
        let starts = [[-1.2, 1.0], [0.0, 0.0], [5.0, -3.0], [1.0, 1.0]];
        for x0 in starts {
            let min = NelderMead::default().minimize(&rosenbrock, x0);
            assert_eq!(min.initial_value, rosenbrock(&x0));
            assert!(min.value <= min.initial_value, "start {:?}", x0);
        }
    }

    #[test]
    fn test_iteration_budget_reports_non_convergence() {
        let nm = NelderMead::builder().max_iterations(3).build();
        let min = nm.minimize(&rosenbrock, [-1.2, 1.0]);

        assert!(!min.converged);
        assert_eq!(min.iterations, 3);
        assert_eq!(min.restarts, 0);
        assert!(min.into_result().is_err());
    }

    #[test]
    fn test_evaluation_budget_is_enforced() {
        let calls = Cell::new(0usize);
        let f = |p: &[f64; 2]| {
            calls.set(calls.get() + 1);
            rosenbrock(p)
        };
        let nm = NelderMead::builder().max_evaluations(20).build();
        let min = nm.minimize(&f, [-1.2, 1.0]);

        assert!(!min.converged);
        assert_eq!(min.evaluations, calls.get());
        // one iteration may overshoot by at most a shrink (n evaluations) plus two
        assert!(calls.get() <= 20 + 4, "calls = {}", calls.get());
    }

    // === Restart Tests ===

    fn run_result(value: f64, converged: bool) -> Minimum<[f64; 2]> {
        Minimum {
            params: [value, value],
            value,
            initial_value: 10.0,
            iterations: 5,
            evaluations: 9,
            restarts: 0,
            converged,
        }
    }

    #[test]
    fn test_rejected_restart_keeps_convergence() {
        let mut best = run_result(1.0, true);
        let improvement = absorb_restart(&mut best, run_result(1.0, false));

        assert_eq!(improvement, 0.0);
        assert!(best.converged);
        assert_eq!(best.params, [1.0, 1.0]);
        assert_eq!(best.iterations, 10);
        assert_eq!(best.evaluations, 18);
        assert_eq!(best.restarts, 1);
    }

    #[test]
    fn test_improving_restart_is_adopted() {
        let mut best = run_result(1.0, true);
        let improvement = absorb_restart(&mut best, run_result(0.25, false));

        assert!((improvement - 0.75).abs() < 1e-12);
        assert_eq!(best.value, 0.25);
        assert_eq!(best.params, [0.25, 0.25]);
        assert!(!best.converged);
    }

    #[test]
    fn test_kinked_objective_restarts() {
        let f = |p: &[f64; 2]| (p[0] - 1.0).abs() + 2.0 * (p[1] + 0.5).abs();
        let min = NelderMead::default().minimize(&f, [0.0, 0.0]);

        assert!(min.restarts >= 1, "restarts = {}", min.restarts);
        assert!(min.restarts <= 3);
        assert!(min.converged);
        assert!(min.value <= min.initial_value);

        let once = NelderMead::builder().restarts(0).build().minimize(&f, [0.0, 0.0]);
        assert_eq!(once.restarts, 0);
        assert!(min.value <= once.value);
    }

    #[test]
    fn test_flat_objective_terminates() {
        let f = |_: &[f64; 2]| 0.0;
        let min = NelderMead::default().minimize(&f, [1.0, 1.0]);

        assert!(min.converged);
        assert_eq!(min.value, 0.0);
        assert!(min.params.max_abs_diff(&[1.0, 1.0]) < 0.1);
    }

    #[test]
    fn test_nan_values_are_treated_as_worst() {
        // NaN outside the unit disc
        let f = |p: &[f64; 2]| {
            if p[0] * p[0] + p[1] * p[1] > 1.0 {
                f64::NAN
            } else {
                (p[0] - 0.5).powi(2) + p[1] * p[1]
            }
        };
        let min = NelderMead::default().minimize(&f, [0.0, 0.0]);
        assert!(min.value.is_finite());
        assert!((min.params[0] - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_deterministic() {
        let a = NelderMead::default().minimize(&rosenbrock, [-1.2, 1.0]);
        let b = NelderMead::default().minimize(&rosenbrock, [-1.2, 1.0]);
        assert_eq!(a, b);
    }
}
