/*!
 * Sort Illusion Tests
 * Step-wise reordering of idle processes through the manager
 */

use crate::common::{idle_keys, keyed_manager, quiet_config, run_until, settled_manager, tick};
use pretty_assertions::assert_eq;
use procsim::StageConfig;

#[test]
fn test_first_step_applied_immediately() {
    let (mut manager, now) = settled_manager(&[30, 10, 40, 20]);

    assert!(manager.begin_sort(now));
    assert!(manager.sort_in_progress());
    assert_eq!(idle_keys(&manager), vec![30, 10, 20, 40]);
    assert_eq!(manager.idle_pids(), vec![1, 2, 4, 3]);
}

#[test]
fn test_sort_converges() {
    let (mut manager, now) = settled_manager(&[30, 10, 40, 20]);

    assert!(manager.begin_sort(now));
    run_until(&mut manager, now, |m| !m.sort_in_progress());

    assert_eq!(idle_keys(&manager), vec![10, 20, 30, 40]);
    assert!(!manager.any_process_in_motion());
}

#[test]
fn test_only_moved_processes_animate() {
    let (mut manager, now) = settled_manager(&[30, 10, 40, 20]);

    assert!(manager.begin_sort(now));
    // Slots 0 and 1 kept their occupants
    assert!(!manager.process(1).is_in_motion());
    assert!(!manager.process(2).is_in_motion());
    assert!(manager.process(3).is_in_motion());
    assert!(manager.process(4).is_in_motion());
}

#[test]
fn test_sorted_idle_set_finishes_at_once() {
    let (mut manager, now) = settled_manager(&[1, 2, 3]);

    assert!(manager.begin_sort(now));
    assert!(!manager.sort_in_progress());
    assert_eq!(idle_keys(&manager), vec![1, 2, 3]);
    assert!(!manager.any_process_in_motion());
}

#[test]
fn test_continue_sort_is_idempotent_when_sorted() {
    let (mut manager, _) = settled_manager(&[5, 5, 7]);

    for _ in 0..3 {
        manager.continue_sort();
    }
    assert_eq!(manager.idle_pids(), vec![1, 2, 3]);
    assert!(!manager.sort_in_progress());
}

#[test]
fn test_no_step_while_processes_move() {
    let mut manager = keyed_manager(quiet_config(), &[3, 2, 1]);
    for _ in 0..3 {
        assert!(manager.create_process(None));
    }

    // Still sliding up into their slots
    assert!(manager.begin_sort(100));
    assert_eq!(idle_keys(&manager), vec![3, 2, 1]);

    run_until(&mut manager, 100, |m| !m.sort_in_progress());
    assert_eq!(idle_keys(&manager), vec![1, 2, 3]);
}

#[test]
fn test_removal_mid_sort() {
    let (mut manager, now) = settled_manager(&[50, 40, 30, 20, 10]);

    assert!(manager.begin_sort(now));
    assert!(manager.terminate(3, true));

    run_until(&mut manager, now, |m| !m.sort_in_progress());
    assert_eq!(idle_keys(&manager), vec![10, 20, 40, 50]);
    assert!(!manager.idle_pids().contains(&3));
}

#[test]
fn test_key_change_mid_sort() {
    let (mut manager, now) = settled_manager(&[40, 30, 20, 10]);

    assert!(manager.begin_sort(now));
    if let Some(process) = manager.get_process_mut(1) {
        process.set_sort_key(1);
    }

    run_until(&mut manager, now, |m| !m.sort_in_progress());
    assert_eq!(idle_keys(&manager), vec![1, 10, 20, 30]);
}

#[test]
fn test_sort_cooldown() {
    let (mut manager, now) = settled_manager(&[1, 2]);

    assert!(manager.begin_sort(now));
    assert!(!manager.sort_in_progress());

    assert!(!manager.sort_cooldown_elapsed(now + 50));
    assert!(!manager.begin_sort(now + 50));
    assert!(!manager.begin_sort(now + 99));
    assert!(manager.begin_sort(now + 100));
}

#[test]
fn test_sort_refused_right_after_stage_start() {
    let mut manager = keyed_manager(quiet_config(), &[2, 1]);
    assert!(manager.create_process(None));
    assert!(manager.create_process(None));

    assert!(!manager.sort_cooldown_elapsed(0));
    assert!(!manager.begin_sort(99));
    assert!(!manager.sort_in_progress());
    assert!(manager.begin_sort(100));
}

#[test]
fn test_begin_sort_refused_while_in_progress() {
    let (mut manager, now) = settled_manager(&[3, 2, 1]);

    assert!(manager.begin_sort(now));
    assert!(manager.sort_in_progress());
    assert!(!manager.begin_sort(now + 1_000));
}

#[test]
fn test_sort_button_visibility_gates_press() {
    let config = StageConfig {
        time_ms_to_show_sort_button: 0,
        ..quiet_config()
    };
    let mut manager = keyed_manager(config, &[2, 1]);
    assert!(manager.create_process(None));
    assert!(manager.create_process(None));

    assert!(!manager.press_sort_button(0));

    // Stage start counts as the last sort
    tick(&mut manager, 0);
    assert!(manager.sort_button().visible);
    assert!(manager.sort_button().disabled);
    assert!(!manager.press_sort_button(0));

    tick(&mut manager, 100);
    assert!(manager.sort_button().is_clickable());

    let now = run_until(&mut manager, 100, |m| !m.any_process_in_motion());
    assert!(manager.press_sort_button(now));
    assert_eq!(idle_keys(&manager), vec![1, 2]);

    // Disabled during the cooldown after the next tick
    tick(&mut manager, now + 16);
    assert!(manager.sort_button().disabled);
    assert!(!manager.press_sort_button(now + 16));
}

#[test]
fn test_auto_sort() {
    let config = StageConfig {
        time_ms_to_show_auto_sort_checkbox: 0,
        ..quiet_config()
    };
    let mut manager = keyed_manager(config, &[30, 10, 40, 20]);
    for _ in 0..4 {
        assert!(manager.create_process(None));
    }

    // Hidden until the first tick reveals it
    assert!(!manager.set_auto_sort(true));
    tick(&mut manager, 0);
    assert!(manager.set_auto_sort(true));
    assert!(manager.auto_sort_enabled());

    assert!(!manager.begin_sort(0));

    let now = run_until(&mut manager, 0, |m| {
        !m.any_process_in_motion() && idle_keys(m) == vec![10, 20, 30, 40]
    });
    assert!(!manager.sort_in_progress());
    assert!(manager.sort_button().disabled);

    // Key changes are picked up without a new request
    if let Some(process) = manager.get_process_mut(1) {
        process.set_sort_key(5);
    }
    run_until(&mut manager, now, |m| idle_keys(m) == vec![5, 10, 20, 40]);
}
