/*!
 * Process Simulation - Headless Driver
 *
 * Runs a stage without a screen, standing in for the player:
 * - dispatches the most starved idle processes onto free CPUs
 * - delivers ready I/O events
 * - presses the sort button whenever it is clickable
 *
 * Environment variables:
 * - PROCSIM_CONFIG: path to a JSON stage configuration (default: built-in)
 * - PROCSIM_TICKS: number of ticks to run (default: 36000)
 * - PROCSIM_TICK_MS: simulated milliseconds per tick (default: 16)
 */

use anyhow::{Context, Result};
use procsim::{init_tracing, Collector, Pid, ProcessManager, SceneObject, Stage, StageConfig, TickContext};
use std::sync::Arc;
use tracing::info;

fn env_u64(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{name} must be an unsigned integer, got {value:?}")),
        Err(_) => Ok(default),
    }
}

/// Most starved idle processes first
fn dispatch_idle(manager: &mut ProcessManager) {
    let mut idle: Vec<Pid> = manager.idle_pids();
    idle.sort_by_key(|&pid| std::cmp::Reverse(manager.process(pid).starvation_level()));
    for pid in idle {
        if manager.cpu_manager().first_free_cpu().is_none() {
            break;
        }
        manager.dispatch(pid);
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::var("PROCSIM_CONFIG") {
        Ok(path) => StageConfig::from_file(&path)
            .with_context(|| format!("loading stage configuration from {path}"))?,
        Err(_) => StageConfig::default(),
    };
    let ticks = env_u64("PROCSIM_TICKS", 36_000)?;
    let tick_ms = env_u64("PROCSIM_TICK_MS", 16)?;

    info!(stage = %config.name, ticks, tick_ms, "Starting simulation");

    let collector = Arc::new(Collector::new());
    let manager = ProcessManager::builder(config)
        .with_observer(collector.clone())
        .build();
    let mut stage = Stage::with_manager(manager).context("invalid stage configuration")?;

    for tick in 0..ticks {
        let now = tick * tick_ms;
        stage.update(&TickContext::at(now), &[]);
        if stage.game_over() {
            break;
        }

        let manager = stage.manager_mut();
        manager.process_io_events();
        dispatch_idle(manager);
        if manager.sort_button().is_clickable() {
            manager.press_sort_button(now);
        }
    }

    let stats = stage.stats();
    let (created, terminated) = collector.totals();
    info!(
        uptime_ms = stage.uptime_ms(),
        game_over = stage.game_over(),
        created,
        terminated,
        "Simulation finished"
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&stats).context("serializing final stats")?
    );

    Ok(())
}
