// File: crates/stream-core/tests/smoothing.rs
// Purpose: Moving average, cubic interpolation and method dispatch.

use stream_core::smoothing::{interpolate_with_density, INTERPOLATION, MOVING_AVERAGE};
use stream_core::{interpolate, moving_average, smooth_data, Smoothing, SmoothingConfig, StreamError};

fn assert_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len(), "length differs");
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!((x - y).abs() < 1e-9, "index {i}: {x} vs {y}");
    }
}

#[test]
fn moving_average_valid_region_means() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 10.0];
    for w in 1..=data.len() {
        let out = moving_average(&data, w).expect("valid window");
        assert_eq!(out.len(), data.len() - w + 1);
        for (i, v) in out.iter().enumerate() {
            let mean = data[i..i + w].iter().sum::<f64>() / w as f64;
            assert!((v - mean).abs() < 1e-12);
        }
    }
}

#[test]
fn moving_average_rejects_bad_windows() {
    let data = [1.0, 2.0, 3.0];
    assert!(matches!(moving_average(&data, 0), Err(StreamError::InvalidWindow { window: 0, len: 3 })));
    assert!(matches!(moving_average(&data, 4), Err(StreamError::InvalidWindow { window: 4, len: 3 })));
}

#[test]
fn interpolate_length_and_endpoints() {
    let data = [2.0, 7.5, -1.0, 3.0, 4.0, 0.5];
    let out = interpolate(&data).expect("enough points");
    assert_eq!(out.len(), 10 * data.len());
    assert!((out[0] - data[0]).abs() < 1e-12);
    assert!((out[out.len() - 1] - data[data.len() - 1]).abs() < 1e-9);
}

#[test]
fn interpolate_follows_quadratic() {
    // A cubic spline with not-a-knot ends reproduces any polynomial up to degree 3.
    let data: Vec<f64> = (0..5).map(|i| (i * i) as f64).collect();
    let out = interpolate(&data).unwrap();
    let step = 4.0 / (out.len() - 1) as f64;
    for (k, v) in out.iter().enumerate() {
        let x = k as f64 * step;
        assert!((v - x * x).abs() < 1e-9, "x={x}: {v}");
    }
}

#[test]
fn interpolate_needs_four_points() {
    let err = interpolate(&[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, StreamError::InsufficientPoints { got: 3, min: 4 }));
}

#[test]
fn interpolate_custom_density() {
    let out = interpolate_with_density(&[1.0, 0.0, 1.0, 0.0], 3).unwrap();
    assert_eq!(out.len(), 12);
    assert!(matches!(
        interpolate_with_density(&[1.0, 0.0, 1.0, 0.0], 0),
        Err(StreamError::InvalidParameter(_))
    ));
}

#[test]
fn smooth_data_dispatches_by_tag() {
    let data = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
    assert_close(&smooth_data(&data, MOVING_AVERAGE, 3).unwrap(), &moving_average(&data, 3).unwrap());
    assert_close(&smooth_data(&data, INTERPOLATION, 3).unwrap(), &interpolate(&data).unwrap());
}

#[test]
fn smooth_data_unknown_method() {
    match smooth_data(&[1.0, 2.0, 3.0, 4.0], "bogus", 2) {
        Err(StreamError::UnknownMethod(tag)) => assert_eq!(tag, "bogus"),
        other => panic!("expected UnknownMethod, got {other:?}"),
    }
}

#[test]
fn strategy_parsing_uses_config_defaults() {
    let ma: Smoothing = "moving_average".parse().unwrap();
    assert_eq!(ma, Smoothing::MovingAverage { window_size: 5 });
    let it: Smoothing = "interpolation".parse().unwrap();
    assert_eq!(it, Smoothing::Interpolation { density: 10 });
    assert!("spline".parse::<Smoothing>().is_err());

    let cfg = SmoothingConfig::default().with_window_size(2).with_density(4);
    assert_eq!(Smoothing::from_tag(MOVING_AVERAGE, &cfg).unwrap(), Smoothing::moving_average(2));
    assert_eq!(Smoothing::from_tag(INTERPOLATION, &cfg).unwrap(), Smoothing::Interpolation { density: 4 });
    assert_eq!(Smoothing::interpolation().to_string(), "interpolation");
}

#[test]
fn strategy_output_len_matches_apply() {
    let data = [1.0; 9];
    for s in [Smoothing::moving_average(4), Smoothing::interpolation()] {
        assert_eq!(s.output_len(data.len()), Some(s.apply(&data).unwrap().len()));
    }
    assert_eq!(Smoothing::moving_average(12).output_len(9), None);
    assert_eq!(Smoothing::interpolation().output_len(3), None);
}

#[test]
fn strategy_deserializes_from_json() {
    let s: Smoothing = serde_json::from_str(r#"{ "method": "moving_average", "window_size": 3 }"#).unwrap();
    assert_eq!(s, Smoothing::moving_average(3));
    let s: Smoothing = serde_json::from_str(r#"{ "method": "interpolation", "density": 20 }"#).unwrap();
    assert_eq!(s, Smoothing::Interpolation { density: 20 });
}

#[test]
fn interpolation_density_overflow_is_an_error() {
    let err = interpolate_with_density(&[1.0, 2.0, 3.0, 4.0], usize::MAX).unwrap_err();
    assert!(matches!(err, StreamError::InvalidParameter(_)), "{err:?}");
    let err = Smoothing::Interpolation { density: usize::MAX / 2 }.apply(&[0.0; 5]).unwrap_err();
    assert!(matches!(err, StreamError::InvalidParameter(_)), "{err:?}");
}

#[test]
fn output_len_reports_overflow_as_none() {
    assert_eq!(Smoothing::Interpolation { density: usize::MAX }.output_len(4), None);
    assert_eq!(Smoothing::Interpolation { density: 3 }.output_len(4), Some(12));
}
