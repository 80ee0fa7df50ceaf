use std::env;

use anyhow::{bail, Context, Result};
use log::info;
use winit::event::DeviceEvent;
use winit::keyboard::KeyCode;

use countertop::config::{SceneConfig, ViewConfig};
use countertop::gfx::recording::{RecordingMeshes, RecordingSink, RecordingTextures};
use countertop::gfx::resources::FsImageLoader;
use countertop::gfx::scene::FrameContext;
use countertop::{FrameOutcome, StillLifeApp};

/// 60 frames per second
const FRAME_SECONDS: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let frames = parse_frame_count()?;
    let scene_config = SceneConfig::from_env();
    let view_config = ViewConfig::default();
    info!("Reading textures from {}", scene_config.texture_dir().display());

    let mut app = StillLifeApp::kitchen(scene_config, &view_config);
    let mut sink = RecordingSink::new();
    let mut meshes = RecordingMeshes::new();
    let mut textures = RecordingTextures::new();
    let mut ctx = FrameContext {
        sink: &mut sink,
        meshes: &mut meshes,
        textures: &mut textures,
    };

    let report = app
        .prepare(&mut ctx, &FsImageLoader)
        .context("scene was prepared twice")?;
    println!(
        "Prepared {} textures, {} materials, {} lights, {} meshes",
        report.textures.len(),
        report.materials,
        report.lights,
        report.meshes
    );
    for (tag, err) in &report.failed_textures {
        println!(" ! {tag}: {err}");
    }

    for frame in 0..frames {
        script_input(&mut app, frame, frames);
        let stats = app.frame_with_delta(&mut ctx, FRAME_SECONDS);
        let position = app.view.camera.position;
        println!(
            "frame {:>3}: {} draws, {:?}, camera ({:.2}, {:.2}, {:.2}), fov {:.2}",
            frame,
            stats.draws,
            app.view.mode(),
            position.x,
            position.y,
            position.z,
            app.view.camera.zoom
        );
        if stats.outcome == FrameOutcome::Close {
            break;
        }
    }

    app.shutdown(ctx.textures);
    Ok(())
}

/// Optional first argument: number of frames to simulate
fn parse_frame_count() -> Result<u32> {
    match env::args().nth(1) {
        None => Ok(120),
        Some(arg) => {
            let frames: u32 = arg
                .parse()
                .with_context(|| format!("invalid frame count '{arg}'"))?;
            if frames == 0 {
                bail!("frame count must be at least 1");
            }
            Ok(frames)
        }
    }
}

/// Walks forward, looks around, toggles projection, then presses Escape
fn script_input(app: &mut StillLifeApp, frame: u32, frames: u32) {
    let controller = &mut app.view.controller;
    let phase = frame * 6 / frames;
    match phase {
        0 => controller.key_changed(KeyCode::KeyW, true),
        1 => {
            controller.key_changed(KeyCode::KeyW, false);
            app.device_event(&DeviceEvent::MouseMotion { delta: (2.0, -1.0) });
        }
        2 => controller.key_changed(KeyCode::ArrowUp, true),
        3 => {
            controller.key_changed(KeyCode::ArrowUp, false);
            controller.key_changed(KeyCode::KeyO, true);
        }
        4 => {
            controller.key_changed(KeyCode::KeyO, false);
            controller.key_changed(KeyCode::KeyP, true);
        }
        _ => {
            controller.key_changed(KeyCode::KeyP, false);
            if frame + 1 == frames {
                controller.key_changed(KeyCode::Escape, true);
            }
        }
    }
}
