//! Margin and stability tests
//!
//! Runs full analyses on systems with known crossovers.

use approx::assert_relative_eq;
use bode_core::input::parse_transfer_function;
use bode_core::{
    Analysis, Analyzer, Crossover, FrequencyRange, MarginSearch, Stability, TransferFunction,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Search settings fine enough for the systems below but much faster
/// than the default million-point sweeps
fn fast_analyzer(start: f64, stop: f64) -> Analyzer {
    Analyzer::new().with_search(MarginSearch::new(start, stop, 200_000).with_tolerance(1e-2))
}

/// K / (s + a)^3 with a = 10/sqrt(3): phase crosses -180° at w = 10 where
/// the magnitude is +6.02 dB
fn unstable_third_order() -> TransferFunction {
    let a = 10.0 / 3.0_f64.sqrt();
    let k = 2.0 * (100.0 + a * a).powf(1.5);
    TransferFunction::new(vec![k], vec![1.0, 3.0 * a, 3.0 * a * a, a * a * a]).unwrap()
}

fn bits(values: &[f64]) -> Vec<u64> {
    values.iter().map(|v| v.to_bits()).collect()
}

fn crossover_bits(crossover: Option<Crossover>) -> Option<[u64; 3]> {
    crossover.map(|c| [c.w.to_bits(), c.magnitude_db.to_bits(), c.phase_deg.to_bits()])
}

/// Bitwise equality, so NaN samples at a pole on the grid compare equal
fn assert_same_analysis(first: &Analysis, second: &Analysis) {
    assert_eq!(
        bits(first.response.frequency.w()),
        bits(second.response.frequency.w())
    );
    assert_eq!(
        bits(&first.response.magnitude_db.to_vec()),
        bits(&second.response.magnitude_db.to_vec())
    );
    assert_eq!(
        bits(&first.response.phase_deg.to_vec()),
        bits(&second.response.phase_deg.to_vec())
    );

    let (a, b) = (&first.margins, &second.margins);
    assert_eq!(a.phase_margin_deg.to_bits(), b.phase_margin_deg.to_bits());
    assert_eq!(a.gain_margin_db.to_bits(), b.gain_margin_db.to_bits());
    assert_eq!(a.verdict, b.verdict);
    assert_eq!(crossover_bits(a.gain_crossover), crossover_bits(b.gain_crossover));
    assert_eq!(crossover_bits(a.phase_crossover), crossover_bits(b.phase_crossover));
}

// ============================================================================
// Reference systems
// ============================================================================

#[test]
fn test_integrator_default_search() {
    init_logger();
    let tf = TransferFunction::new(vec![1.0], vec![1.0, 0.0]).unwrap();
    let search = MarginSearch::default();

    // Phase is -90° everywhere, |H| = 1 near w = 1
    assert_eq!(tf.gain_margin(&search), f64::INFINITY);
    let crossover = tf.find_gain_crossover(&search).expect("gain crossover");
    assert_relative_eq!(crossover.w, 1.0, max_relative = 2e-4);
    assert_relative_eq!(tf.phase_margin(&search), 90.0, epsilon = 1e-9);
}

#[test]
fn test_unstable_third_order() {
    init_logger();
    let tf = unstable_third_order();
    let range = FrequencyRange::new(0.1, 1000.0).unwrap();

    let analysis = fast_analyzer(0.1, 1000.0).analyze(&tf, &range);
    let margins = &analysis.margins;

    let phase_crossover = margins.phase_crossover.expect("phase crossover");
    assert_relative_eq!(phase_crossover.w, 10.0, max_relative = 1e-3);
    assert_relative_eq!(margins.gain_margin_db, -6.0206, epsilon = 1e-2);
    assert!(margins.phase_margin_deg < 0.0);
    assert_eq!(margins.verdict, Stability::Unstable);
}

#[test]
fn test_stable_third_order() {
    // Same plant with a quarter of the gain: |H(j10)| = 0.5, GM = +6.02 dB
    let a = 10.0 / 3.0_f64.sqrt();
    let k = 0.5 * (100.0 + a * a).powf(1.5);
    let tf = TransferFunction::new(vec![k], vec![1.0, 3.0 * a, 3.0 * a * a, a * a * a]).unwrap();
    let range = FrequencyRange::new(0.1, 1000.0).unwrap();

    let margins = fast_analyzer(0.1, 1000.0).analyze(&tf, &range).margins;

    assert_relative_eq!(margins.gain_margin_db, 6.0206, epsilon = 1e-2);
    assert!(margins.phase_margin_deg > 0.0);
    assert_eq!(margins.verdict, Stability::Stable);
}

#[test]
fn test_no_crossovers_is_stable() {
    // 0.1 / (s + 1): below 0 dB, phase never below -90°
    let tf = TransferFunction::new(vec![0.1], vec![1.0, 1.0]).unwrap();
    let range = FrequencyRange::new(0.01, 100.0).unwrap();

    let margins = fast_analyzer(0.01, 100.0).analyze(&tf, &range).margins;

    assert!(margins.phase_margin_is_infinite());
    assert!(margins.gain_margin_is_infinite());
    assert!(margins.gain_crossover.is_none());
    assert_eq!(margins.verdict, Stability::Stable);
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_analysis_is_idempotent() {
    let tf = parse_transfer_function("40", "1, 6, 11, 6").unwrap();
    let range = FrequencyRange::new(0.01, 100.0).unwrap();
    let analyzer = fast_analyzer(0.01, 100.0);

    let first = analyzer.analyze(&tf, &range);
    let second = analyzer.analyze(&tf, &range);

    assert_eq!(first, second);
}

#[test]
fn test_analysis_is_idempotent_with_pole_on_grid() {
    // 1 / (s^2 + 100): plotting sample 100 is exactly 10 rad/s
    let tf = TransferFunction::new(vec![1.0], vec![1.0, 0.0, 100.0]).unwrap();
    let range = FrequencyRange::new(1.0, 100.0).unwrap();
    let analyzer = fast_analyzer(1.0, 100.0).with_plot_points(201);

    let first = analyzer.analyze(&tf, &range);
    let second = analyzer.analyze(&tf, &range);

    assert!(first.response.phase_deg[100].is_nan());
    assert_same_analysis(&first, &second);
}

#[test]
fn test_plot_resolution_does_not_change_margins() {
    let tf = unstable_third_order();
    let range = FrequencyRange::new(1.0, 100.0).unwrap();

    let coarse = fast_analyzer(0.1, 1000.0).with_plot_points(20).analyze(&tf, &range);
    let fine = fast_analyzer(0.1, 1000.0).with_plot_points(2000).analyze(&tf, &range);

    assert_eq!(coarse.response.len(), 20);
    assert_eq!(fine.response.len(), 2000);
    assert_eq!(coarse.margins, fine.margins);
}
