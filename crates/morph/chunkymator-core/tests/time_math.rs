use approx::assert_relative_eq;
use chunkymator_core::{get_times, Keyframe, SceneKeyframe};

/// Minimal keyframe used to check that any `Keyframe` implementor works.
#[derive(Clone, Debug, PartialEq)]
struct MockKeyframe {
    pos: [f64; 3],
    altitude: f64,
}

impl Keyframe for MockKeyframe {
    fn position(&self) -> [f64; 3] {
        self.pos
    }

    fn sun_altitude(&self) -> f64 {
        self.altitude
    }

    fn set_sun_altitude(&mut self, altitude: f64) {
        self.altitude = altitude;
    }
}

fn mk(x: f64, y: f64, z: f64) -> MockKeyframe {
    MockKeyframe {
        pos: [x, y, z],
        altitude: 0.0,
    }
}

fn line() -> Vec<MockKeyframe> {
    vec![
        mk(0.0, 0.0, 0.0),
        mk(1.0, 0.0, 0.0),
        mk(2.0, 0.0, 0.0),
        mk(3.0, 0.0, 0.0),
    ]
}

fn staircase() -> Vec<MockKeyframe> {
    vec![
        mk(0.0, 0.0, 0.0),
        mk(1.0, 0.0, 0.0),
        mk(1.0, 1.0, 0.0),
        mk(1.0, 1.0, 1.0),
    ]
}

#[test]
fn doubling_frame_rate_doubles_times() {
    let (times1, _) = get_times(&line(), 1.0, 1.0, None).unwrap();
    let (times2, _) = get_times(&line(), 2.0, 1.0, None).unwrap();
    assert_eq!(times1.len(), times2.len());
    for (t1, t2) in times1.iter().zip(times2.iter()) {
        assert_eq!(t1 * 2.0, *t2);
    }
}

#[test]
fn doubling_frame_rate_keeps_total_length() {
    let (_, length1) = get_times(&line(), 1.0, 1.0, None).unwrap();
    let (_, length2) = get_times(&line(), 2.0, 1.0, None).unwrap();
    assert_eq!(length1, length2);
    assert_eq!(length1, 3.0);
}

#[test]
fn doubling_speed_halves_times() {
    let (times1, length1) = get_times(&staircase(), 25.0, 5.4, None).unwrap();
    let (times2, length2) = get_times(&staircase(), 25.0, 10.8, None).unwrap();
    for (t1, t2) in times1.iter().zip(times2.iter()) {
        assert_eq!(*t1, t2 * 2.0);
    }
    assert_eq!(length1, length2);
}

#[test]
fn appending_a_keyframe_appends_one_time() {
    let old = line();
    let mut new = old.clone();
    new.push(mk(4.0, 0.0, 0.0));

    let (old_times, _) = get_times(&old, 1.0, 1.0, None).unwrap();
    let (new_times, _) = get_times(&new, 1.0, 1.0, None).unwrap();

    assert_eq!(old_times.len() + 1, new_times.len());
    for (o, n) in old_times.iter().zip(new_times.iter()) {
        assert_eq!(o, n);
    }
    assert!(new_times[new_times.len() - 1] > old_times[old_times.len() - 1]);
}

#[test]
fn path_length_is_additive() {
    let base = line();
    let tail = vec![base[base.len() - 1].clone(), mk(1.0, 0.0, 0.0)];
    let (tail_times, tail_length) = get_times(&tail, 1.0, 1.0, None).unwrap();
    let (_, base_length) = get_times(&base, 1.0, 1.0, None).unwrap();

    let mut joined = base.clone();
    joined.push(tail[1].clone());
    let (joined_times, joined_length) = get_times(&joined, 1.0, 1.0, None).unwrap();

    assert_eq!(base_length + tail_length, joined_length);
    let n = joined_times.len();
    assert_eq!(joined_times[n - 1] - joined_times[n - 2], tail_times[1]);
}

#[test]
fn single_keyframe_has_single_zero_time() {
    let (times, length) = get_times(&[mk(0.0, 0.0, 0.0)], 1.0, 1.0, None).unwrap();
    assert_eq!(times, vec![0.0]);
    assert_eq!(length, 0.0);
}

#[test]
fn two_keyframes_have_two_distinct_times() {
    let (times, _) = get_times(&[mk(0.0, 0.0, 0.0), mk(1.0, 0.0, 0.0)], 1.0, 1.0, None).unwrap();
    assert_eq!(times.len(), 2);
    assert_ne!(times[0], times[1]);
}

#[test]
fn fixed_length_pins_the_last_time() {
    let (times, _) = get_times(&staircase(), 1.0, 1.0, Some(10.0)).unwrap();
    assert_eq!(times[times.len() - 1], 10.0);
    assert_eq!(times[0], 0.0);
}

#[test]
fn fixed_length_times_differ_by_one_scalar() {
    let (times, length) = get_times(&staircase(), 1.0, 1.0, None).unwrap();
    let (fixed_times, fixed_length) = get_times(&staircase(), 1.0, 1.0, Some(10.0)).unwrap();

    assert_eq!(length, fixed_length);
    assert_eq!(times.len(), fixed_times.len());

    let scalar = fixed_times[fixed_times.len() - 1] / times[times.len() - 1];
    for (t, f) in times.iter().zip(fixed_times.iter()) {
        if t * f == 0.0 {
            continue;
        }
        assert_relative_eq!(f / t, scalar, max_relative = 1e-12);
    }
}

#[test]
fn fixed_length_spreads_coincident_keyframes_uniformly() {
    let keys = [mk(0.0, 0.0, 0.0), mk(0.0, 0.0, 0.0), mk(0.0, 0.0, 0.0)];
    let (times, length) = get_times(&keys, 1.0, 1.0, Some(100.0)).unwrap();
    assert_eq!(times, vec![0.0, 50.0, 100.0]);
    assert_eq!(length, 0.0);
}

#[test]
fn coincident_keyframes_without_fixed_length_stay_at_zero() {
    let keys = [mk(5.0, 5.0, 5.0), mk(5.0, 5.0, 5.0)];
    let (times, length) = get_times(&keys, 25.0, 5.4, None).unwrap();
    assert_eq!(times, vec![0.0, 0.0]);
    assert_eq!(length, 0.0);
}

#[test]
fn scene_keyframes_use_frames_per_block() {
    let keys = [
        SceneKeyframe::new(0.0, 64.0, 0.0),
        SceneKeyframe::new(3.0, 68.0, 0.0),
    ];
    // 5 blocks at 2 blocks/s and 24 fps.
    let (times, length) = get_times(&keys, 24.0, 2.0, None).unwrap();
    assert_eq!(length, 5.0);
    assert_eq!(times, vec![0.0, 60.0]);
}
