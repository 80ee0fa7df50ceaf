use log::{debug, info, warn};

use super::objects::{kitchen_layout, SceneItem, KITCHEN_TEXTURES};
use crate::config::SceneConfig;
use crate::errors::SceneError;
use crate::gfx::geometry::{MeshProvider, ShapeKind};
use crate::gfx::resources::lights::{apply_lights, kitchen_lights, Light};
use crate::gfx::resources::material::{kitchen_materials, Material};
use crate::gfx::resources::{ImageLoader, SceneResources, TextureBackend};
use crate::gfx::shading::{TransformComposer, UniformSink};

/// The external interfaces a frame writes through
pub struct FrameContext<'a> {
    pub sink: &'a mut dyn UniformSink,
    pub meshes: &'a mut dyn MeshProvider,
    pub textures: &'a mut dyn TextureBackend,
}

/// What the first `prepare_scene` call set up
#[derive(Debug, Default)]
pub struct PrepareReport {
    /// Tags registered, in unit order
    pub textures: Vec<String>,
    /// Textures that could not be registered, with the reason
    pub failed_textures: Vec<(String, SceneError)>,
    pub materials: usize,
    pub lights: usize,
    pub meshes: usize,
}

impl PrepareReport {
    pub fn is_complete(&self) -> bool {
        self.failed_textures.is_empty()
    }
}

/// Main scene: resources, lights and the ordered draw list
pub struct Scene {
    pub resources: SceneResources,
    lights: Vec<Light>,
    materials: Vec<Material>,
    items: Vec<SceneItem>,
    textures: Vec<(&'static str, &'static str)>,
    config: SceneConfig,
    prepared: bool,
}

impl Scene {
    /// Empty scene; add content with the `with_*` builders
    pub fn new(config: SceneConfig) -> Self {
        Self {
            resources: SceneResources::new(config.max_texture_units),
            lights: Vec::new(),
            materials: Vec::new(),
            items: Vec::new(),
            textures: Vec::new(),
            config,
            prepared: false,
        }
    }

    /// The kitchen counter still life
    pub fn kitchen(config: SceneConfig) -> Self {
        Self::new(config)
            .with_textures(&KITCHEN_TEXTURES)
            .with_materials(kitchen_materials())
            .with_lights(kitchen_lights())
            .with_items(kitchen_layout())
    }

    /// Image files to register, as `(file name, tag)` pairs
    pub fn with_textures(mut self, textures: &[(&'static str, &'static str)]) -> Self {
        self.textures.extend_from_slice(textures);
        self
    }

    pub fn with_materials(mut self, materials: Vec<Material>) -> Self {
        self.materials.extend(materials);
        self
    }

    pub fn with_lights(mut self, lights: Vec<Light>) -> Self {
        self.lights.extend(lights);
        self
    }

    pub fn with_items(mut self, items: Vec<SceneItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Primitive draws one frame issues
    pub fn draw_count(&self) -> usize {
        self.items.iter().map(SceneItem::part_count).sum()
    }

    /// One-time setup of textures, materials, lights and meshes
    ///
    /// Texture failures are logged and reported; parts using a missing
    /// texture render untextured. Calling this again before
    /// [`Scene::teardown`] does nothing and returns `None`.
    pub fn prepare_scene(
        &mut self,
        ctx: &mut FrameContext<'_>,
        loader: &dyn ImageLoader,
    ) -> Option<PrepareReport> {
        if self.prepared {
            debug!("Scene already prepared");
            return None;
        }

        let mut report = PrepareReport::default();

        for &(file_name, tag) in &self.textures {
            let path = self.config.texture_path(file_name);
            match self
                .resources
                .textures
                .register_texture(&path, tag, loader, ctx.textures)
            {
                Ok(_) => report.textures.push(tag.to_string()),
                Err(err) => {
                    warn!("Texture '{}' unavailable: {}", tag, err);
                    report.failed_textures.push((tag.to_string(), err));
                }
            }
        }

        for material in &self.materials {
            self.resources.materials.add_material(material.clone());
        }
        report.materials = self.resources.materials.len();

        report.lights = apply_lights(&self.lights, ctx.sink);

        for kind in ShapeKind::ALL {
            ctx.meshes.load(kind);
        }
        report.meshes = ShapeKind::ALL.len();

        self.prepared = true;
        info!(
            "Scene prepared: {} textures ({} failed), {} materials, {} lights, {} meshes",
            report.textures.len(),
            report.failed_textures.len(),
            report.materials,
            report.lights,
            report.meshes
        );

        Some(report)
    }

    /// Binds textures then draws every item in order
    ///
    /// # Returns
    /// Number of mesh draws issued
    pub fn render_scene(&self, ctx: &mut FrameContext<'_>) -> usize {
        self.resources.textures.bind_all_for_frame(ctx.textures);

        let mut composer = TransformComposer::new(&self.resources, ctx.sink, ctx.meshes);
        for item in &self.items {
            item.draw(&mut composer);
        }
        composer.draw_count()
    }

    /// Releases all textures and forgets materials
    pub fn teardown(&mut self, textures: &mut dyn TextureBackend) {
        self.resources.textures.destroy_all(textures);
        self.resources.materials.clear();
        self.prepared = false;
        info!("Scene torn down");
    }
}
