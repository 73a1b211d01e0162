//! Headless frame driver: texture catalog, scripted pointer gesture and the
//! frame loop that feeds the scene.

use std::collections::HashMap;
use std::time::Duration;

use lenticular_common::{LenticularError, Result, SliceTexturePair, TextureHandle, Vec3};
use lenticular_config::schema::TextureSetConfig;
use lenticular_config::LenticularConfig;
use lenticular_renderer::layout::matrix::{self, Mat4};
use lenticular_renderer::{
    CarouselPhase, LenticularGraph, LenticularParameters, LenticularScene, SceneSink,
    SliceTransform, SliceUniforms,
};
use tokio::sync::watch;
use tracing::{debug, info, trace, warn};

/// Hands out stable texture handles for texture paths.
///
/// Decoding is the host's concern; the catalog only gives each distinct path
/// an identity. An empty path resolves to no handle.
#[derive(Debug, Default)]
pub struct TextureCatalog {
    handles: HashMap<String, TextureHandle>,
}

impl TextureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texture_count(&self) -> usize {
        self.handles.len()
    }

    pub fn handle(&mut self, path: &str) -> Option<TextureHandle> {
        if path.trim().is_empty() {
            return None;
        }
        let next = TextureHandle(self.handles.len() as u64 + 1);
        Some(*self.handles.entry(path.to_string()).or_insert(next))
    }

    pub fn resolve(&mut self, set: &TextureSetConfig) -> SliceTexturePair {
        let pair = SliceTexturePair {
            key: lenticular_common::TextureKey::new(set.key.as_str()),
            texture_a: self.handle(&set.texture_a),
            texture_b: self.handle(&set.texture_b),
        };
        if pair.texture_a.is_none() || pair.texture_b.is_none() {
            warn!(key = %set.key, "texture set has an empty path");
        }
        pair
    }
}

/// Pointer input for one frame of the scripted gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(f32),
    Move(f32),
    Up,
}

/// Press at `from`, move linearly to `to` over `drag_frames` frames, release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragScript {
    pub from: f32,
    pub to: f32,
    pub drag_frames: u32,
}

impl DragScript {
    pub fn event_at(&self, frame: u32) -> Option<PointerEvent> {
        let steps = self.drag_frames.max(1);
        match frame {
            0 => Some(PointerEvent::Down(self.from)),
            f if f <= steps => {
                let t = f as f32 / steps as f32;
                Some(PointerEvent::Move(self.from + (self.to - self.from) * t))
            }
            f if f == steps + 1 => Some(PointerEvent::Up),
            _ => None,
        }
    }
}

/// View-projection for a camera at `camera` looking down -Z.
pub fn view_projection(camera: Vec3, aspect: f32) -> Mat4 {
    let projection = matrix::perspective(std::f32::consts::FRAC_PI_4, aspect, 0.1, 100.0);
    let view = matrix::translate(-camera[0], -camera[1], -camera[2]);
    matrix::mul(&projection, &view)
}

/// Sink that computes the per-slice uniform blocks a GPU host would upload
/// and logs them instead.
#[derive(Debug)]
pub struct LoggingSink {
    pub view_proj: Mat4,
    pub rotation: f32,
    pub uniforms: Vec<SliceUniforms>,
}

impl LoggingSink {
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj,
            rotation: 0.0,
            uniforms: Vec::new(),
        }
    }
}

impl SceneSink for LoggingSink {
    fn set_group_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
        self.uniforms.clear();
    }

    fn apply_slice(&mut self, transform: &SliceTransform, graph: &LenticularGraph) {
        let model = transform.model_matrix(self.rotation);
        let block = SliceUniforms::new(&self.view_proj, &model);
        trace!(
            index = transform.index,
            key = %graph.key(),
            yaw = transform.yaw,
            clip_w = block.mvp[15],
            "slice"
        );
        self.uniforms.push(block);
    }
}

/// Frame loop settings.
#[derive(Debug, Clone, Copy)]
pub struct DriverOptions {
    pub frames: u32,
    pub fps: f32,
    pub camera: Vec3,
    /// Viewport width over height.
    pub aspect: f32,
    /// Normalized pointer position held for the whole run.
    pub pointer: [f32; 2],
    pub script: Option<DragScript>,
    /// Sleep between frames to run at `fps` in wall-clock time.
    pub realtime: bool,
}

/// What the run ended with.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: u32,
    pub rotation: f32,
    pub phase: CarouselPhase,
    /// Frame on which the snap after the scripted release settled.
    pub settled_at: Option<u32>,
    pub reloads: u32,
    /// Slice yaws of the last frame.
    pub yaws: Vec<f32>,
}

/// Drive `scene` for `options.frames` frames.
///
/// When `config_rx` is present, each changed config is applied before the
/// next frame.
pub async fn run(
    scene: &mut LenticularScene,
    catalog: &mut TextureCatalog,
    options: DriverOptions,
    mut config_rx: Option<watch::Receiver<LenticularConfig>>,
) -> Result<RunSummary> {
    if !(options.fps.is_finite() && options.fps > 0.0) {
        return Err(LenticularError::InvalidParameter(format!(
            "fps = {} must be a finite value > 0",
            options.fps
        )));
    }
    let dt = 1.0 / options.fps;
    let mut ticker = tokio::time::interval(Duration::from_secs_f32(dt));
    let mut sink = LoggingSink::new(view_projection(options.camera, options.aspect));
    let mut summary = RunSummary {
        frames: 0,
        rotation: scene.controller().rotation(),
        phase: scene.controller().phase(),
        settled_at: None,
        reloads: 0,
        yaws: Vec::new(),
    };

    for index in 0..options.frames {
        if options.realtime {
            ticker.tick().await;
        }

        if let Some(rx) = config_rx.as_mut() {
            if rx.has_changed().unwrap_or(false) {
                let config = rx.borrow_and_update().clone();
                match scene.apply_config(&config, |set| catalog.resolve(set)) {
                    Ok(()) => {
                        summary.reloads += 1;
                        info!(
                            divisions = scene.params().divisions,
                            slices = scene.slice_count(),
                            "config applied"
                        );
                    }
                    Err(e) => warn!("reloaded config rejected: {e}"),
                }
            }
        }

        if let Some(event) = options.script.and_then(|s| s.event_at(index)) {
            match event {
                PointerEvent::Down(x) => {
                    if !scene.on_pointer_down(x) {
                        debug!("drag ignored: carousel is not draggable");
                    }
                }
                PointerEvent::Move(x) => scene.on_pointer_move(x),
                PointerEvent::Up => scene.on_pointer_up(),
            }
        }

        let before = scene.controller().phase();
        let frame = scene.frame(dt, options.camera, options.pointer);
        scene.apply(&frame, &mut sink);

        if before == CarouselPhase::Snapping && frame.phase == CarouselPhase::Idle {
            summary.settled_at = Some(index);
            info!(frame = index, rotation = frame.rotation, "snap settled");
        }
        if index % options.fps.round().max(1.0) as u32 == 0 {
            debug!(
                frame = index,
                rotation = sink.rotation,
                phase = ?frame.phase,
                slices = sink.uniforms.len(),
                "tick"
            );
        }

        summary.frames = index + 1;
        summary.rotation = frame.rotation;
        summary.phase = frame.phase;
        summary.yaws = frame.slices.iter().map(|t| t.yaw).collect();
    }

    Ok(summary)
}

/// Scripted drag spanning the first third of the run, if requested.
pub fn drag_script(from: Option<f32>, to: Option<f32>, frames: u32) -> Option<DragScript> {
    match (from, to) {
        (Some(from), Some(to)) => Some(DragScript {
            from,
            to,
            drag_frames: (frames / 3).max(1),
        }),
        _ => None,
    }
}

/// Parameters to log at startup.
pub fn describe(params: &LenticularParameters) -> String {
    format!(
        "divisions={} ridge_height={} edge_smoothness={}",
        params.divisions, params.ridge_height, params.edge_smoothness
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(frames: u32, script: Option<DragScript>) -> DriverOptions {
        DriverOptions {
            frames,
            fps: 60.0,
            camera: [0.0, 0.0, 3.0],
            aspect: 16.0 / 9.0,
            pointer: [0.0, 0.0],
            script,
            realtime: false,
        }
    }

    fn scene(catalog: &mut TextureCatalog) -> LenticularScene {
        LenticularScene::from_config(&LenticularConfig::default(), |set| catalog.resolve(set))
            .unwrap()
    }

    #[test]
    fn catalog_reuses_handles_per_path() {
        let mut catalog = TextureCatalog::new();
        let a = catalog.handle("textures/a.mp4").unwrap();
        let b = catalog.handle("textures/b.mp4").unwrap();
        assert_ne!(a, b);
        assert_eq!(catalog.handle("textures/a.mp4"), Some(a));
        assert_eq!(catalog.texture_count(), 2);
        assert_eq!(catalog.handle("  "), None);
    }

    #[test]
    fn catalog_resolves_default_sets() {
        let mut catalog = TextureCatalog::new();
        let config = LenticularConfig::default();
        let pair = catalog.resolve(&config.textures.sets[0]);
        assert_eq!(pair.key.as_str(), "nostalgia");
        assert!(pair.texture_a.is_some() && pair.texture_b.is_some());
        assert_ne!(pair.texture_a, pair.texture_b);
    }

    #[test]
    fn script_events() {
        let s = DragScript {
            from: 100.0,
            to: 200.0,
            drag_frames: 4,
        };
        assert_eq!(s.event_at(0), Some(PointerEvent::Down(100.0)));
        assert_eq!(s.event_at(2), Some(PointerEvent::Move(150.0)));
        assert_eq!(s.event_at(4), Some(PointerEvent::Move(200.0)));
        assert_eq!(s.event_at(5), Some(PointerEvent::Up));
        assert_eq!(s.event_at(6), None);
    }

    #[test]
    fn drag_script_needs_both_ends() {
        assert!(drag_script(Some(1.0), None, 90).is_none());
        assert_eq!(drag_script(Some(1.0), Some(2.0), 90).unwrap().drag_frames, 30);
    }

    #[tokio::test]
    async fn scripted_drag_snaps_and_settles() {
        let mut catalog = TextureCatalog::new();
        let mut scene = scene(&mut catalog);
        let script = drag_script(Some(100.0), Some(200.0), 300);
        let summary = run(&mut scene, &mut catalog, options(300, script), None)
            .await
            .unwrap();

        assert_eq!(summary.frames, 300);
        assert_eq!(summary.phase, CarouselPhase::Idle);
        assert!(summary.settled_at.is_some());
        // Released at 2π - 0.8: slot 0 is 0.8 away, slot 2 is 1.29 away.
        // The short arc ends on 2π without wrapping.
        let slot = std::f32::consts::TAU;
        assert!((summary.rotation - slot).abs() < 1e-4, "{}", summary.rotation);
    }

    #[tokio::test]
    async fn no_script_keeps_ring_still() {
        let mut catalog = TextureCatalog::new();
        let mut scene = scene(&mut catalog);
        let summary = run(&mut scene, &mut catalog, options(10, None), None)
            .await
            .unwrap();
        assert_eq!(summary.rotation, 0.0);
        assert!(summary.settled_at.is_none());
    }

    #[tokio::test]
    async fn pointer_offset_tilts_every_slice() {
        let mut catalog = TextureCatalog::new();
        let mut centred = scene(&mut catalog);
        let still = run(&mut centred, &mut catalog, options(1, None), None)
            .await
            .unwrap();

        let mut tilted = scene(&mut catalog);
        let mut opts = options(1, None);
        opts.pointer = [1.0, 0.0];
        let leaning = run(&mut tilted, &mut catalog, opts, None).await.unwrap();

        assert_eq!(still.yaws.len(), 3);
        for (a, b) in still.yaws.iter().zip(&leaning.yaws) {
            // Pointer clamped to 0.02, times the default gain of 2.
            assert!((b - a + 0.04).abs() < 1e-5, "{a} -> {b}");
        }
    }

    #[tokio::test]
    async fn zero_fps_rejected() {
        let mut catalog = TextureCatalog::new();
        let mut scene = scene(&mut catalog);
        let mut opts = options(10, None);
        opts.fps = 0.0;
        let err = run(&mut scene, &mut catalog, opts, None).await.unwrap_err();
        assert!(matches!(err, LenticularError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn changed_config_is_applied_before_next_frame() {
        let mut catalog = TextureCatalog::new();
        let mut scene = scene(&mut catalog);
        let (tx, rx) = watch::channel(LenticularConfig::default());
        let mut updated = LenticularConfig::default();
        updated.material.divisions = 70;
        tx.send(updated).unwrap();

        let summary = run(&mut scene, &mut catalog, options(2, None), Some(rx))
            .await
            .unwrap();
        assert_eq!(summary.reloads, 1);
        assert_eq!(scene.params().divisions, 70);
        assert!(scene.materials().iter().all(|m| m.generation() == 1));
    }

    #[test]
    fn logging_sink_builds_one_block_per_drawn_slice() {
        let mut catalog = TextureCatalog::new();
        let mut scene = scene(&mut catalog);
        let frame = scene.frame(0.0, [0.0, 0.0, 3.0], [0.0, 0.0]);
        let mut sink = LoggingSink::new(view_projection([0.0, 0.0, 3.0], 1.0));
        assert_eq!(scene.apply(&frame, &mut sink), 3);
        assert_eq!(sink.uniforms.len(), 3);
        // Slice 0 sits at z = 1.2, so it is 1.8 in front of the camera.
        let front = &sink.uniforms[0];
        assert!((front.mvp[15] - 1.8).abs() < 1e-4, "{}", front.mvp[15]);

        scene.apply(&frame, &mut sink);
        assert_eq!(sink.uniforms.len(), 3);
    }

    #[test]
    fn describe_lists_params() {
        let text = describe(&LenticularParameters::default());
        assert!(text.contains("divisions=10"));
    }
}
