//! The lenticular scene: carousel, layout tuning and slice materials.

use lenticular_common::{LenticularError, Result, SliceTexturePair, Vec3};
use lenticular_config::schema::TextureSetConfig;
use lenticular_config::LenticularConfig;
use tracing::{debug, info, trace, warn};

use super::sink::{Frame, SceneSink};
use super::textures::pairs_from_config;
use crate::carousel::angle::slot_count;
use crate::carousel::{override_from_config, CarouselController, CarouselTuning};
use crate::layout::{layout_slices, ParallaxTuning};
use crate::shader_graph::{LenticularParameters, ShaderGraphBuilder, SliceMaterial};

/// Everything that changes from frame to frame, driven from one entry point.
#[derive(Debug, Clone)]
pub struct LenticularScene {
    builder: ShaderGraphBuilder,
    params: LenticularParameters,
    controller: CarouselController,
    parallax: ParallaxTuning,
    radius: f32,
    materials: Vec<SliceMaterial>,
}

impl LenticularScene {
    /// Build a scene with one material per pair.
    ///
    /// The controller's slice count must match `pairs`. A pair that fails to
    /// build is logged and its slice is skipped when applying frames.
    pub fn new(
        controller: CarouselController,
        pairs: Vec<SliceTexturePair>,
        params: LenticularParameters,
        parallax: ParallaxTuning,
        radius: f32,
    ) -> Result<Self> {
        if pairs.len() != controller.slice_count() {
            return Err(LenticularError::Configuration(format!(
                "{} texture pairs for {} slices",
                pairs.len(),
                controller.slice_count()
            )));
        }
        validate_radius(radius)?;
        params.validate()?;

        let builder = ShaderGraphBuilder::new();
        let materials = pairs
            .into_iter()
            .enumerate()
            .map(|(index, pair)| build_material(&builder, index, pair, &params))
            .collect();

        Ok(Self {
            builder,
            params,
            controller,
            parallax,
            radius,
            materials,
        })
    }

    /// Build a scene from config, resolving each texture set through `resolve`.
    pub fn from_config<F>(config: &LenticularConfig, resolve: F) -> Result<Self>
    where
        F: FnMut(&TextureSetConfig) -> SliceTexturePair,
    {
        let controller = CarouselController::from_config(&config.carousel)?;
        let pairs = pairs_from_config(&config.textures, controller.slice_count(), resolve)?;
        let scene = Self::new(
            controller,
            pairs,
            LenticularParameters::from_config(&config.material)?,
            ParallaxTuning::from_config(&config.parallax),
            config.carousel.radius as f32,
        )?;
        info!(
            slices = scene.slice_count(),
            ready = scene.ready_count(),
            "lenticular scene built"
        );
        Ok(scene)
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CarouselController {
        &mut self.controller
    }

    pub fn params(&self) -> &LenticularParameters {
        &self.params
    }

    pub fn parallax(&self) -> &ParallaxTuning {
        &self.parallax
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn materials(&self) -> &[SliceMaterial] {
        &self.materials
    }

    pub fn slice_count(&self) -> usize {
        self.materials.len()
    }

    /// Slices whose material is built and will be drawn.
    pub fn ready_count(&self) -> usize {
        self.materials.iter().filter(|m| m.is_ready()).count()
    }

    pub fn on_pointer_down(&mut self, client_x: f32) -> bool {
        self.controller.on_pointer_down(client_x)
    }

    pub fn on_pointer_move(&mut self, client_x: f32) {
        self.controller.on_pointer_move(client_x);
    }

    pub fn on_pointer_up(&mut self) {
        self.controller.on_pointer_up();
    }

    /// Run one tick: advance the carousel by `dt` seconds and lay out every
    /// slice for `camera` and the normalized `pointer`.
    pub fn frame(&mut self, dt: f32, camera: Vec3, pointer: [f32; 2]) -> Frame {
        let rotation = self.controller.update(dt);
        let slices = layout_slices(
            self.materials.len(),
            self.radius,
            rotation,
            camera,
            pointer[0],
            &self.parallax,
        );
        trace!(dt, rotation, phase = ?self.controller.phase(), "frame");
        Frame {
            rotation,
            phase: self.controller.phase(),
            slices,
        }
    }

    /// Write `frame` into `sink`. Returns the number of slices applied.
    pub fn apply<S: SceneSink + ?Sized>(&self, frame: &Frame, sink: &mut S) -> usize {
        sink.set_group_rotation(frame.rotation);
        let mut applied = 0;
        for transform in &frame.slices {
            let Some(graph) = self.materials.get(transform.index).and_then(|m| m.graph()) else {
                trace!(index = transform.index, "slice skipped: no material");
                continue;
            };
            sink.apply_slice(transform, graph);
            applied += 1;
        }
        applied
    }

    /// Update the scalar material parameters of every slice in place.
    pub fn set_params(&mut self, params: LenticularParameters) -> Result<()> {
        params.validate()?;
        for material in &mut self.materials {
            material.set_params(&params)?;
        }
        self.params = params;
        Ok(())
    }

    /// Swap the texture pair of one slice. Returns whether it was rebuilt.
    pub fn set_slice_textures(&mut self, index: usize, pair: SliceTexturePair) -> Result<bool> {
        let count = self.materials.len();
        let material = self.materials.get_mut(index).ok_or_else(|| {
            LenticularError::Configuration(format!("slice {index} out of range for {count} slices"))
        })?;
        material.set_textures(&self.builder, pair, &self.params)
    }

    pub fn set_radius(&mut self, radius: f32) -> Result<()> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    pub fn set_parallax(&mut self, parallax: ParallaxTuning) {
        self.parallax = parallax;
    }

    /// Apply a reloaded config. Parameter changes update uniforms; only
    /// slices whose texture set changed are rebuilt.
    ///
    /// Per-slice build failures are logged and do not fail the call.
    pub fn apply_config<F>(&mut self, config: &LenticularConfig, resolve: F) -> Result<()>
    where
        F: FnMut(&TextureSetConfig) -> SliceTexturePair,
    {
        let params = LenticularParameters::from_config(&config.material)?;
        let tuning = CarouselTuning::from_config(&config.carousel);
        let count = config.carousel.slice_count as usize;
        let pairs = pairs_from_config(&config.textures, count, resolve)?;
        let radius = config.carousel.radius as f32;
        let rotation_override = override_from_config(&config.carousel)?;
        validate_radius(radius)?;
        slot_count(count)?;
        tuning.validate()?;

        // Nothing below can fail on values checked above.
        self.controller.set_slice_count(count)?;
        self.controller.set_tuning(tuning)?;
        self.controller.set_rotation_override(rotation_override)?;
        self.controller.set_auto_rotate(config.carousel.auto_rotate);
        self.controller.set_draggable(config.carousel.draggable);
        self.parallax = ParallaxTuning::from_config(&config.parallax);
        self.radius = radius;

        self.set_params(params)?;

        self.materials.truncate(count);
        let mut rebuilt = 0;
        for (index, pair) in pairs.into_iter().enumerate() {
            if index >= self.materials.len() {
                let material = build_material(&self.builder, index, pair, &self.params);
                self.materials.push(material);
                rebuilt += 1;
                continue;
            }
            match self.materials[index].set_textures(&self.builder, pair, &self.params) {
                Ok(true) => rebuilt += 1,
                Ok(false) => {}
                Err(e) => warn!(index, "slice texture swap failed: {e}"),
            }
        }
        debug!(slices = count, rebuilt, "scene config applied");
        Ok(())
    }
}

fn build_material(
    builder: &ShaderGraphBuilder,
    index: usize,
    pair: SliceTexturePair,
    params: &LenticularParameters,
) -> SliceMaterial {
    let (material, err) = SliceMaterial::new(builder, pair, params);
    if let Some(e) = err {
        warn!(index, "slice will not render: {e}");
    }
    material
}

fn validate_radius(radius: f32) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(LenticularError::InvalidParameter(format!(
            "radius = {radius} must be a finite value > 0"
        )))
    }
}
