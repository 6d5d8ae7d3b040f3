use super::*;

fn ramp() -> Keyframes<f64> {
    Keyframes {
        keys: vec![
            Keyframe {
                at: 0.0,
                value: 0.0,
                ease: Ease::Linear,
            },
            Keyframe {
                at: 0.5,
                value: 10.0,
                ease: Ease::Linear,
            },
            Keyframe {
                at: 1.0,
                value: 0.0,
                ease: Ease::Linear,
            },
        ],
    }
}

#[test]
fn keyframes_linear_interpolates() {
    let kf = ramp();
    assert_eq!(kf.sample(0.25), Some(5.0));
    assert_eq!(kf.sample(0.5), Some(10.0));
    assert_eq!(kf.sample(0.75), Some(5.0));
}

#[test]
fn keyframes_hold_outside_range() {
    let kf = ramp();
    assert_eq!(kf.sample(-1.0), Some(0.0));
    assert_eq!(kf.sample(2.0), Some(0.0));
}

#[test]
fn empty_track_samples_nothing_and_fails_validation() {
    let kf: Keyframes<f64> = Keyframes { keys: Vec::new() };
    assert_eq!(kf.sample(0.3), None);
    assert!(kf.validate().is_err());
}

#[test]
fn validate_rejects_unsorted_keys() {
    let mut kf = ramp();
    kf.keys.swap(0, 2);
    assert!(kf.validate().is_err());
    assert!(ramp().validate().is_ok());
}

#[test]
fn segment_lookup_is_clamped() {
    let kf = ramp();
    assert_eq!(kf.segment_at(0.0), 0);
    assert_eq!(kf.segment_at(0.49), 0);
    assert_eq!(kf.segment_at(0.5), 1);
    assert_eq!(kf.segment_at(1.0), 1);
    assert_eq!(kf.segment_at(5.0), 1);
}

#[test]
fn colors_lerp_per_channel() {
    let a = Rgba8::rgb(0, 100, 200);
    let b = Rgba8::rgb(100, 200, 0);
    assert_eq!(Rgba8::lerp(&a, &b, 0.5), Rgba8::rgb(50, 150, 100));
}
