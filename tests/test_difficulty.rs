use maze_runner::difficulty::*;

#[test]
fn board_grows_every_third_level() {
    assert_eq!(next_level_params(3, 15, 11), (17, 13));
    assert_eq!(next_level_params(6, 17, 13), (19, 15));
    assert_eq!(next_level_params(2, 15, 11), (15, 11));
    assert_eq!(next_level_params(4, 17, 13), (17, 13));
}

#[test]
fn board_stops_growing_at_thirty() {
    assert_eq!(next_level_params(27, 29, 25), (31, 27));
    assert_eq!(next_level_params(30, 31, 27), (31, 27));
    assert_eq!(next_level_params(33, 30, 26), (30, 26));
}

#[test]
fn adversary_interval_shrinks_to_five() {
    assert_eq!(adversary_move_interval(1), 10);
    assert_eq!(adversary_move_interval(2), 9);
    assert_eq!(adversary_move_interval(9), 6);
    assert_eq!(adversary_move_interval(10), 5);
    assert_eq!(adversary_move_interval(11), 5);
    assert_eq!(adversary_move_interval(100), 5);
}

#[test]
fn counts_scale_with_level_until_the_board_caps_them() {
    assert_eq!(adversary_count(1, 15, 11), 3);
    assert_eq!(adversary_count(20, 15, 11), 16);
    assert_eq!(food_count(1, 15, 11), 6);
    assert_eq!(food_count(20, 15, 11), 20);
    assert_eq!(adversary_count(1, 3, 3), 0);
    assert_eq!(food_count(1, 3, 3), 1);
}

#[test]
fn ammo_baseline_ignores_history() {
    assert_eq!(ammo_baseline(1), 6);
    assert_eq!(ammo_baseline(7), 12);
}
