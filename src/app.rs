use std::time::Instant;

use log::info;
use winit::{
    dpi::PhysicalSize,
    event::{DeviceEvent, WindowEvent},
};

use crate::config::{SceneConfig, ViewConfig};
use crate::gfx::{
    camera::{ViewManager, ViewMatrices},
    resources::{ImageLoader, TextureBackend},
    scene::{FrameContext, PrepareReport, Scene},
};

/// Measures time between frames
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick; the first tick yields zero
    pub fn tick(&mut self, now: Instant) -> f32 {
        let delta = self
            .last
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last = Some(now);
        delta
    }

    pub fn tick_now(&mut self) -> f32 {
        self.tick(Instant::now())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Close,
}

/// Summary of one rendered frame
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    pub draws: usize,
    pub matrices: ViewMatrices,
    pub outcome: FrameOutcome,
}

/// Owns the scene, the view state and the frame clock
///
/// Windowing and the GPU pipeline stay outside: the host forwards winit
/// events here and supplies a [`FrameContext`] for each frame.
pub struct StillLifeApp {
    pub scene: Scene,
    pub view: ViewManager,
    clock: FrameClock,
    frames: u64,
}

impl StillLifeApp {
    pub fn new(scene: Scene, view: ViewManager) -> Self {
        Self {
            scene,
            view,
            clock: FrameClock::new(),
            frames: 0,
        }
    }

    /// The kitchen still life with the given configuration
    pub fn kitchen(scene_config: SceneConfig, view_config: &ViewConfig) -> Self {
        Self::new(Scene::kitchen(scene_config), ViewManager::from_config(view_config))
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn prepare(
        &mut self,
        ctx: &mut FrameContext<'_>,
        loader: &dyn ImageLoader,
    ) -> Option<PrepareReport> {
        self.scene.prepare_scene(ctx, loader)
    }

    /// Routes a window event; returns true when the app should close
    pub fn window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.view.process_keyboard_event(event);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.view.cursor_moved(position.x, position.y);
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.view.resize(*width, *height);
            }
            WindowEvent::CloseRequested => return true,
            _ => (),
        }
        self.view.close_requested()
    }

    pub fn device_event(&mut self, event: &DeviceEvent) {
        self.view.process_event(event);
    }

    /// Runs one frame with the time measured by the frame clock
    pub fn frame(&mut self, ctx: &mut FrameContext<'_>) -> FrameStats {
        let delta_seconds = self.clock.tick_now();
        self.frame_with_delta(ctx, delta_seconds)
    }

    /// Input, camera, view uniforms, then the scene draws
    pub fn frame_with_delta(
        &mut self,
        ctx: &mut FrameContext<'_>,
        delta_seconds: f32,
    ) -> FrameStats {
        let matrices = self.view.prepare_scene_view(delta_seconds, ctx.sink);
        let draws = self.scene.render_scene(ctx);
        self.frames += 1;

        let outcome = if self.view.close_requested() {
            FrameOutcome::Close
        } else {
            FrameOutcome::Continue
        };
        FrameStats {
            draws,
            matrices,
            outcome,
        }
    }

    pub fn shutdown(&mut self, textures: &mut dyn TextureBackend) {
        self.scene.teardown(textures);
        info!("Shut down after {} frames", self.frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::recording::{FakeImageLoader, RecordingMeshes, RecordingSink, RecordingTextures};
    use crate::gfx::shading::Uniform;
    use std::time::Duration;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_frame_clock() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        assert_eq!(clock.tick(start), 0.0);
        assert_eq!(clock.tick(start + Duration::from_millis(250)), 0.25);
        // clock going backwards yields zero
        assert_eq!(clock.tick(start), 0.0);
    }

    #[test]
    fn test_frame_sets_view_before_drawing() {
        let mut app = StillLifeApp::kitchen(SceneConfig::default(), &ViewConfig::default());
        let (mut sink, mut meshes, mut textures) =
            (RecordingSink::new(), RecordingMeshes::new(), RecordingTextures::new());
        let mut ctx = FrameContext {
            sink: &mut sink,
            meshes: &mut meshes,
            textures: &mut textures,
        };

        app.prepare(&mut ctx, &FakeImageLoader::rgba());
        let stats = app.frame_with_delta(&mut ctx, 0.016);
        assert_eq!(stats.draws, 36);
        assert_eq!(stats.outcome, FrameOutcome::Continue);
        assert_eq!(app.frames(), 1);

        let view_index = sink.writes.iter().position(|(u, _)| *u == Uniform::View);
        let model_index = sink.writes.iter().position(|(u, _)| *u == Uniform::Model);
        assert!(view_index < model_index);
    }

    #[test]
    fn test_minimized_window_still_renders() {
        let mut app = StillLifeApp::kitchen(SceneConfig::default(), &ViewConfig::default());
        let (mut sink, mut meshes, mut textures) =
            (RecordingSink::new(), RecordingMeshes::new(), RecordingTextures::new());
        let mut ctx = FrameContext {
            sink: &mut sink,
            meshes: &mut meshes,
            textures: &mut textures,
        };
        app.prepare(&mut ctx, &FakeImageLoader::rgba());

        assert!(!app.window_event(&WindowEvent::Resized(PhysicalSize::new(0, 0))));
        assert_eq!(app.view.aspect(), 1.25);
        let stats = app.frame_with_delta(&mut ctx, 0.016);
        assert_eq!(stats.draws, 36);

        app.window_event(&WindowEvent::Resized(PhysicalSize::new(1920, 1080)));
        assert!((app.view.aspect() - 1920.0 / 1080.0).abs() < 1e-6);
        app.frame_with_delta(&mut ctx, 0.016);
    }

    #[test]
    fn test_escape_closes_after_frame() {
        let mut app = StillLifeApp::kitchen(SceneConfig::default(), &ViewConfig::default());
        let (mut sink, mut meshes, mut textures) =
            (RecordingSink::new(), RecordingMeshes::new(), RecordingTextures::new());
        let mut ctx = FrameContext {
            sink: &mut sink,
            meshes: &mut meshes,
            textures: &mut textures,
        };

        app.view.controller.key_changed(KeyCode::Escape, true);
        let stats = app.frame_with_delta(&mut ctx, 0.016);
        assert_eq!(stats.outcome, FrameOutcome::Close);
        assert!(app.window_event(&WindowEvent::CloseRequested));
    }
}
