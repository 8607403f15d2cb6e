use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use scroll_rig::cli::Cli;
use scroll_rig::config::RigConfig;
use scroll_rig::core::clock::Clock;
use scroll_rig::core::timer::Throttled;
use scroll_rig::frame::{FixedRateFrames, FrameInfo, RealtimeFrames};
use scroll_rig::scene::ScrollRig;
use scroll_rig::traits::FrameSource;

const LOG_INTERVAL: f32 = 1.0;
const MAX_REALTIME_DELTA: Duration = Duration::from_millis(100);

/// One line of `--json` output.
#[derive(Serialize)]
struct FrameRecord {
    frame: u64,
    time: f32,
    progress: f32,
    actor: [f32; 3],
    camera_position: [f32; 3],
    camera_look_at: [f32; 3],
}

fn run<F: FrameSource>(
    rig: &mut ScrollRig,
    mut frames: F,
    cli: &Cli,
    pace: Option<Duration>,
) -> Result<u64> {
    let mut log_timer = Throttled::new(LOG_INTERVAL);

    for FrameInfo { number, time, delta } in frames.by_ref() {
        if let Some(pace) = pace {
            std::thread::sleep(pace);
        }

        let progress = cli.progress_at(time);
        rig.set_progress(progress);
        rig.tick(delta);

        let (Some(actor), Some(camera)) = (rig.actor(), rig.camera_pose()) else {
            continue;
        };

        if cli.json {
            let record = FrameRecord {
                frame: number,
                time,
                progress,
                actor: actor.position.to_array(),
                camera_position: camera.position.to_array(),
                camera_look_at: camera.look_at.to_array(),
            };
            println!("{}", serde_json::to_string(&record).context("Failed to encode frame")?);
        } else if log_timer.try_tick(delta) {
            info!(
                "t={time:.2}s progress={:.2} actor={:?} camera={:?}",
                progress.clamp(0.0, 1.0),
                actor.position,
                camera.position
            );
        }
    }

    Ok(frames.frame_count())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RigConfig::load(path)?,
        None => RigConfig::original_scene(),
    };

    if cli.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let mut rig = ScrollRig::mounted(config);

    let count = if cli.realtime {
        let frames = RealtimeFrames::new(Clock::new(MAX_REALTIME_DELTA), cli.seconds);
        let pace = Duration::from_secs_f32(1.0 / cli.fps.max(1.0));
        run(&mut rig, frames, &cli, Some(pace))?
    } else {
        let frames = FixedRateFrames::for_duration(cli.fps, cli.seconds);
        run(&mut rig, frames, &cli, None)?
    };

    if let (Some(actor), Some(camera)) = (rig.actor(), rig.camera_pose()) {
        info!(
            "simulated {count} frames over {:.2}s: actor={:?} camera={:?} look_at={:?}",
            rig.elapsed(),
            actor.position,
            camera.position,
            camera.look_at
        );
    }

    rig.teardown();
    Ok(())
}
