/*!
 * Lifecycle Tests
 * Dispatch, preemption hotkeys, completion, I/O and power-ups
 */

use crate::common::{keyed_manager, quiet_config, run_until, settle, settled_manager, tick, KeyedFactory, TICK_MS};
use pretty_assertions::assert_eq;
use procsim::{GameEvent, ProcessManager, ProcessState, SceneObject, StageConfig, TickContext};

fn manager_with(factory: KeyedFactory, count: usize) -> (ProcessManager, u64) {
    let mut manager = ProcessManager::builder(quiet_config())
        .with_factory(factory)
        .build();
    for _ in 0..count {
        assert!(manager.create_process(None));
    }
    let now = settle(&mut manager, 0);
    (manager, now)
}

#[test]
fn test_dispatch_moves_process_to_cpu() {
    let (mut manager, _) = settled_manager(&[10, 20]);

    assert!(manager.dispatch(2));
    assert_eq!(manager.process(2).state(), ProcessState::Running);
    assert_eq!(manager.slot_of(2), None);
    assert_eq!(manager.idle_pids(), vec![1]);

    let cpu = manager.cpu_manager().cpu_of(2).map(|cpu| (cpu.id(), cpu.view.x, cpu.view.y));
    let (id, x, y) = cpu.unwrap();
    assert_eq!(id, 1);
    let view = manager.process(2).view;
    assert_eq!((view.target_x, view.target_y), (Some(x), Some(y)));

    // Already running
    assert!(!manager.dispatch(2));
}

#[test]
fn test_dispatch_needs_free_cpu() {
    let (mut manager, _) = settled_manager(&[1, 2, 3, 4, 5]);

    for pid in 1..=4 {
        assert!(manager.dispatch(pid));
    }
    assert!(!manager.dispatch(5));
    assert_eq!(manager.slot_of(5), Some(4));
}

#[test]
fn test_key_release_yields_cpu() {
    let (mut manager, now) = settled_manager(&[10]);
    assert!(manager.dispatch(1));
    let now = settle(&mut manager, now);

    // Key presses are ignored; only releases act
    manager.update(&TickContext::at(now + TICK_MS), &[GameEvent::key_down("1", false)]);
    assert_eq!(manager.process(1).state(), ProcessState::Running);

    // CPU 11 does not exist with four CPUs
    manager.update(&TickContext::at(now + 2 * TICK_MS), &[GameEvent::key_up("1", true)]);
    assert_eq!(manager.process(1).state(), ProcessState::Running);

    manager.update(&TickContext::at(now + 3 * TICK_MS), &[GameEvent::key_up("1", false)]);
    assert_eq!(manager.process(1).state(), ProcessState::Waiting);
    assert_eq!(manager.slot_of(1), Some(0));
    assert!(manager.cpu_manager().cpu_of(1).is_none());
}

#[test]
fn test_yield_requires_running_process() {
    let (mut manager, _) = settled_manager(&[10]);
    assert!(!manager.yield_cpu(1));
    assert!(!manager.yield_cpu(42));
}

#[test]
fn test_completed_process_exits_and_is_reaped() {
    let (mut manager, now) = manager_with(KeyedFactory::new(&[10]).with_burst(500), 1);
    assert!(manager.dispatch(1));

    let now = run_until(&mut manager, now, |m| m.alive_pids().is_empty());
    assert_eq!(manager.gracefully_terminated_process_count(), 1);
    assert_eq!(manager.process(1).state(), ProcessState::Ended);
    assert!(manager.process(1).cpu_time_ms() >= 500);
    assert!(manager.cpu_manager().first_free_cpu().map(|cpu| cpu.id()) == Some(1));

    run_until(&mut manager, now, |m| m.get_process(1).is_none());
    assert_eq!(manager.process_count(), 0);
    assert_eq!(manager.user_terminated_process_count(), 0);
}

#[test]
fn test_io_round_trip() {
    let factory = KeyedFactory::new(&[10]).with_io_points(vec![100]);
    let (mut manager, now) = manager_with(factory, 1);
    assert!(manager.dispatch(1));

    let now = run_until(&mut manager, now, |m| m.process(1).is_blocked());
    assert!(manager.io_queue().contains(1));
    assert_eq!(manager.current_stats().blocked_active_process_count, 1);

    // Fixed 100ms wait in the quiet configuration
    let now = run_until(&mut manager, now, |m| m.io_queue().event_count() == 1);
    assert_eq!(manager.current_stats().io_event_count, 1);
    assert_eq!(manager.process(1).state(), ProcessState::Blocked);

    assert_eq!(manager.process_io_events(), 1);
    assert_eq!(manager.process(1).state(), ProcessState::Running);
    assert_eq!(manager.io_queue().event_count(), 0);
    assert_eq!(manager.cpu_manager().cpu_of(1).map(|cpu| cpu.id()), Some(1));

    tick(&mut manager, now + TICK_MS);
    assert_eq!(manager.process_io_events(), 0);
}

#[test]
fn test_forced_termination_drops_pending_io() {
    let factory = KeyedFactory::new(&[10]).with_io_points(vec![100]);
    let (mut manager, now) = manager_with(factory, 1);
    assert!(manager.dispatch(1));

    run_until(&mut manager, now, |m| m.process(1).is_blocked());
    assert!(manager.terminate(1, true));
    assert!(!manager.io_queue().contains(1));
}

#[test]
fn test_power_ups_unlock_over_uptime() {
    let config = StageConfig {
        time_ms_to_show_sort_button: 1_000,
        time_ms_to_show_auto_sort_checkbox: 2_000,
        ..quiet_config()
    };
    let mut manager = keyed_manager(config, &[]);
    let checkbox_start = manager.auto_sort_checkbox().view.x;

    tick(&mut manager, 0);
    assert!(!manager.sort_button().visible);
    assert!(!manager.auto_sort_checkbox().visible);

    tick(&mut manager, 1_000);
    assert!(manager.sort_button().visible);
    assert!(manager.sort_button().is_clickable());
    assert!(!manager.auto_sort_checkbox().visible);

    tick(&mut manager, 2_000);
    assert!(manager.auto_sort_checkbox().visible);
    assert!(manager.auto_sort_checkbox().view.x < checkbox_start);

    run_until(&mut manager, 2_000, |m| !m.auto_sort_checkbox().view.is_in_motion());
    let button = manager.sort_button().view;
    assert_eq!(
        manager.auto_sort_checkbox().view.x,
        button.x + button.width + 10
    );
}

#[test]
fn test_frozen_when_game_over() {
    let config = StageConfig {
        num_processes_at_startup: 5,
        ..quiet_config()
    };
    let mut manager = keyed_manager(config, &[]);

    for now in [50, 100, 150] {
        manager.update(&TickContext::at(now).with_game_over(true), &[]);
    }
    assert!(manager.alive_pids().is_empty());
    assert_eq!(manager.next_pid(), 1);
}
