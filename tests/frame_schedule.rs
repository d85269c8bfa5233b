use sc2grid::extract::expected_frames;

#[test]
fn whole_replay_at_default_cadence() {
    assert_eq!(expected_frames(12600, 10), 1260);
}

#[test]
fn remainder_loops_emit_no_extra_frame() {
    assert_eq!(expected_frames(12605, 10), 1260);
    assert_eq!(expected_frames(9, 10), 0);
}

#[test]
fn step_mul_one_observes_every_loop() {
    assert_eq!(expected_frames(500, 1), 500);
}

#[test]
fn step_mul_longer_than_replay() {
    assert_eq!(expected_frames(10, 100), 0);
}

#[test]
fn zero_step_mul_clamps_to_one() {
    // The CLI rejects 0, but the helper must not divide by zero.
    assert_eq!(expected_frames(42, 0), 42);
}
