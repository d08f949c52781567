use sort_trace_rs::{run_comparison, Comparison, ComparisonConfig, PivotPolicy, TraceError};
use trace_test_tools::patterns;

#[test]
fn both_runs_sort_their_own_copy() {
    let input = patterns::random_zipf(80, 1.0);
    let comparison = run_comparison(&input, Some(3)).unwrap();

    let mut expected = input.clone();
    expected.sort_unstable();

    assert_eq!(comparison.fixed().policy(), PivotPolicy::Fixed);
    assert_eq!(comparison.randomized().policy(), PivotPolicy::Randomized);
    assert_eq!(comparison.fixed().sorted(), expected);
    assert_eq!(comparison.randomized().sorted(), expected);

    // Both traces start from the same untouched input.
    assert_eq!(comparison.fixed().trace().frames()[0].values(), input);
    assert_eq!(comparison.randomized().trace().frames()[0].values(), input);
}

#[test]
fn same_seed_same_comparison() {
    let input = patterns::random(50);

    let a = run_comparison(&input, Some(2024)).unwrap();
    let b = run_comparison(&input, Some(2024)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn parallel_matches_sequential() {
    let input = patterns::pipe_organ(90);
    let config = ComparisonConfig::default().with_seed(77);

    let sequential = Comparison::run(&input, &config).unwrap();
    let parallel = Comparison::run(&input, &config.with_parallel(true)).unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn playback_pads_shorter_trace() {
    let input = patterns::descending(40);
    let comparison = run_comparison(&input, Some(11)).unwrap();

    let fixed_len = comparison.fixed().trace().len();
    let randomized_len = comparison.randomized().trace().len();
    assert!(fixed_len > randomized_len);
    assert_eq!(comparison.max_frames(), fixed_len);

    let ticks: Vec<_> = comparison.playback().collect();
    assert_eq!(ticks.len(), fixed_len);
    assert!(ticks.iter().all(|(fixed, _)| fixed.is_some()));
    assert_eq!(
        ticks.iter().filter(|(_, randomized)| randomized.is_some()).count(),
        randomized_len
    );
    assert!(ticks[randomized_len..].iter().all(|(_, r)| r.is_none()));
}

#[test]
fn empty_comparison() {
    let comparison = run_comparison::<i32>(&[], None).unwrap();

    assert_eq!(comparison.max_frames(), 1);
    assert_eq!(comparison.playback().count(), 1);

    let (fixed, randomized) = comparison.into_parts();
    let (sorted, trace) = fixed.into_parts();
    assert!(sorted.is_empty());
    assert_eq!(trace.len(), 1);
    assert_eq!(randomized.trace().len(), 1);
}

#[test]
fn config_from_lookup() {
    let config = ComparisonConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, ComparisonConfig::default());

    let config = ComparisonConfig::from_lookup(|key| match key {
        "SORT_TRACE_SEED" => Some(" 42 ".to_owned()),
        "SORT_TRACE_PARALLEL" => Some("true".to_owned()),
        _ => None,
    })
    .unwrap();
    assert_eq!(
        config,
        ComparisonConfig {
            seed: Some(42),
            parallel: true
        }
    );
}

#[test]
fn config_rejects_garbage() {
    let err = ComparisonConfig::from_lookup(|key| {
        (key == "SORT_TRACE_SEED").then(|| "forty-two".to_owned())
    })
    .unwrap_err();
    assert!(matches!(
        err,
        TraceError::InvalidConfig { key: "SORT_TRACE_SEED", ref value } if value == "forty-two"
    ));

    let err = ComparisonConfig::from_lookup(|key| {
        (key == "SORT_TRACE_PARALLEL").then(|| "sometimes".to_owned())
    })
    .unwrap_err();
    assert!(matches!(
        err,
        TraceError::InvalidConfig { key: "SORT_TRACE_PARALLEL", .. }
    ));
}
