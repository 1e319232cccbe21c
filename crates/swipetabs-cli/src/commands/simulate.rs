use std::path::Path;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tokio::time::{self, Duration, Instant};

use swipetabs_core::{
    simulate, AppConfig, IntervalClock, Script, SimulatedFrame, TabGroupService,
};

/// Replay a script in virtual time and print every emitted frame
pub fn run(config: &AppConfig, path: &Path, json: bool) -> Result<()> {
    let script = Script::load(path)
        .with_context(|| format!("Failed to load script {}", path.display()))?;
    let frames = simulate(&script, config.tabs.tab_count(), config)?;

    if !json {
        println!("{:>8}  {:>6}  {:>9}  {:>9}", "ms", "index", "content", "indicator");
    }
    for frame in &frames {
        print_frame(frame, json)?;
    }
    if !json {
        println!("\n{} frames", frames.len());
    }

    Ok(())
}

/// Replay a script against the async service on a real frame clock
pub async fn run_realtime(config: &AppConfig, path: &Path, json: bool) -> Result<()> {
    let script = Script::load(path)
        .with_context(|| format!("Failed to load script {}", path.display()))?;

    let clock = Box::new(IntervalClock::new(config.animation.frame_interval()));
    let (service, handle) = TabGroupService::new(config.tabs.tab_count(), config, clock);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let service_task = tokio::spawn(service.run(shutdown_rx));

    let start = Instant::now();
    let mut translates = handle.subscribe();
    let states = handle.subscribe_state();
    let printer = tokio::spawn(async move {
        let mut printed = Vec::new();
        while translates.changed().await.is_ok() {
            let translate = *translates.borrow_and_update();
            printed.push(SimulatedFrame {
                at_ms: start.elapsed().as_millis() as u64,
                active_index: states.borrow().active_index,
                content: translate.content,
                indicator: translate.indicator,
            });
        }
        printed
    });

    if !json {
        println!("{:>8}  {:>6}  {:>9}  {:>9}", "ms", "index", "content", "indicator");
    }

    for step in &script.steps {
        time::sleep_until(start + Duration::from_millis(step.at_ms)).await;
        let input = match (step.input, step.gesture) {
            (Some(input), _) => input,
            (None, Some(gesture)) => gesture.into(),
            (None, None) => continue,
        };
        handle.send(input)?;
    }

    // Let the last tween land
    let settle = config.animation.duration() + config.animation.frame_interval() * 2;
    time::sleep(settle).await;
    shutdown_tx.send(true)?;
    service_task.await?;
    drop(handle);

    let frames = printer.await?;
    for frame in &frames {
        print_frame(frame, json)?;
    }
    if !json {
        println!("\n{} frames observed", frames.len());
    }

    Ok(())
}

fn print_frame(frame: &SimulatedFrame, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(frame)?);
    } else {
        println!(
            "{:>8}  {:>6}  {:>9.4}  {:>9.4}",
            frame.at_ms, frame.active_index, frame.content, frame.indicator
        );
    }
    Ok(())
}
