//! WASM bindings for curvelab.

use curvelab::curvelab_spacetime::{
    classify_with, lorentz_factor, DIAGRAM_LIGHTLIKE_TOLERANCE,
};
use curvelab::{
    interval_squared, Boost, CurvedSpaceScene, Event, LabConfig, LabSession, LabTask, Point2,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn js_err(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(js_err)
}

/// Curved-space scene. Derived values are cached until an input changes.
#[wasm_bindgen]
pub struct WasmScene {
    inner: CurvedSpaceScene,
}

#[derive(Serialize)]
struct PathsView {
    /// Vertex positions lifted onto the surface.
    vertices: Vec<[f64; 3]>,
    /// Polylines `[A→B, B→C, C→A]`.
    paths: Vec<Vec<[f64; 3]>>,
}

#[wasm_bindgen]
impl WasmScene {
    /// Scene with the default lab setup.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmScene, JsError> {
        Self::from_config(&LabConfig::default())
    }

    /// Scene from a JSON-encoded config; omitted fields use defaults.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WasmScene, JsError> {
        let config: LabConfig = serde_json::from_str(json).map_err(js_err)?;
        Self::from_config(&config)
    }

    fn from_config(config: &LabConfig) -> Result<WasmScene, JsError> {
        let inner = CurvedSpaceScene::new(config).map_err(js_err)?;
        Ok(Self { inner })
    }

    /// Set the grid resolution (samples per axis).
    #[wasm_bindgen(js_name = setResolution)]
    pub fn set_resolution(&mut self, resolution: usize) -> Result<(), JsError> {
        self.inner.set_resolution(resolution).map_err(js_err)
    }

    /// Set the half-width of the planar domain.
    #[wasm_bindgen(js_name = setSpan)]
    pub fn set_span(&mut self, span: f64) -> Result<(), JsError> {
        self.inner.set_span(span).map_err(js_err)
    }

    /// Set the bump radius.
    #[wasm_bindgen(js_name = setBumpRadius)]
    pub fn set_bump_radius(&mut self, bump_radius: f64) -> Result<(), JsError> {
        self.inner.set_bump_radius(bump_radius).map_err(js_err)
    }

    /// Move vertex `index` (0 = A, 1 = B, 2 = C).
    #[wasm_bindgen(js_name = setPoint)]
    pub fn set_point(&mut self, index: usize, x: f64, y: f64) -> Result<(), JsError> {
        self.inner
            .set_vertex(index, Point2::new(x, y))
            .map_err(js_err)
    }

    /// Move the ray.
    #[wasm_bindgen(js_name = setRayY)]
    pub fn set_ray_y(&mut self, y: f64) {
        self.inner.set_ray_y(y);
    }

    /// Grid heights in row-major order (`j * width + i`).
    pub fn heights(&self) -> Vec<f64> {
        let grid = self.inner.grid();
        (0..grid.cell_count())
            .map(|idx| grid.height_at(grid.cell(idx)))
            .collect()
    }

    /// Full report (lengths, angles, deficit and label, ray lengths) as JSON.
    #[wasm_bindgen(js_name = metricsJson)]
    pub fn metrics_json(&mut self) -> Result<String, JsError> {
        let report = self.inner.report().map_err(js_err)?;
        to_json(&report)
    }

    /// Geodesic polylines on the surface as JSON.
    #[wasm_bindgen(js_name = pathsJson)]
    pub fn paths_json(&mut self) -> Result<String, JsError> {
        let solution = self.inner.solution().clone();
        let grid = self.inner.grid();
        let lift = |p: curvelab::Point3| [p.x, p.y, p.z];
        let view = PathsView {
            vertices: solution
                .cells
                .iter()
                .map(|&c| lift(grid.point3d(c)))
                .collect(),
            paths: solution
                .paths
                .iter()
                .map(|path| path.surface_points(grid).into_iter().map(lift).collect())
                .collect(),
        };
        to_json(&view)
    }

    /// Ray samples and lengths as JSON.
    #[wasm_bindgen(js_name = rayJson)]
    pub fn ray_json(&mut self) -> Result<String, JsError> {
        let profile = self.inner.ray().map_err(js_err)?;
        to_json(profile)
    }
}

/// Special-relativity lab session.
#[wasm_bindgen]
pub struct WasmLab {
    inner: LabSession,
}

#[wasm_bindgen]
impl WasmLab {
    /// Session on SR-1 with the default events and velocity.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: LabSession::default(),
        }
    }

    /// Switch task by id (`SR-1`, `sr2`, ...).
    pub fn select(&mut self, id: &str) -> Result<(), JsError> {
        let task =
            LabTask::from_id(id).ok_or_else(|| js_err(format!("unknown lab task: {id}")))?;
        self.inner.select(task);
        Ok(())
    }

    /// Move the boost slider.
    #[wasm_bindgen(js_name = setVelocity)]
    pub fn set_velocity(&mut self, v: f64) -> Result<(), JsError> {
        self.inner.set_velocity(v).map_err(js_err)
    }

    /// Place the free event for SR-3.
    #[wasm_bindgen(js_name = placeEvent)]
    pub fn place_event(&mut self, t: f64, x: f64) {
        self.inner.place_event(Event::new(t, x));
    }

    /// Evaluate the active task; JSON `{task, pass, detail}`.
    #[wasm_bindgen(js_name = checkJson)]
    pub fn check_json(&self) -> Result<String, JsError> {
        to_json(&self.inner.check())
    }

    /// `[[t, x, t'], ...]` for E0, E2, E3 and the placed event as JSON.
    #[wasm_bindgen(js_name = boostedTimesJson)]
    pub fn boosted_times_json(&self) -> Result<String, JsError> {
        let rows: Vec<[f64; 3]> = self
            .inner
            .boosted_times()
            .into_iter()
            .map(|(e, t_prime)| [e.t, e.x, t_prime])
            .collect();
        to_json(&rows)
    }
}

impl Default for WasmLab {
    fn default() -> Self {
        Self::new()
    }
}

/// Invariant interval `s² = Δt² − Δx²`.
#[wasm_bindgen(js_name = intervalSquared)]
pub fn interval_squared_js(t1: f64, x1: f64, t2: f64, x2: f64) -> f64 {
    interval_squared(&Event::new(t1, x1), &Event::new(t2, x2))
}

/// "Timelike", "Spacelike" or "Lightlike", with the diagram's lightlike
/// tolerance (`|s²| < 1e-6`) so slider positions can land on the cone.
#[wasm_bindgen(js_name = classifyEvents)]
pub fn classify_events(t1: f64, x1: f64, t2: f64, x2: f64) -> String {
    classify_with(
        &Event::new(t1, x1),
        &Event::new(t2, x2),
        DIAGRAM_LIGHTLIKE_TOLERANCE,
    )
    .to_string()
}

#[derive(Serialize)]
struct BoostedEvent {
    t: f64,
    x: f64,
    gamma: f64,
}

/// Boost an event by `v`; returns `{t, x, gamma}`.
#[wasm_bindgen(js_name = boostEvent)]
pub fn boost_event(t: f64, x: f64, v: f64) -> Result<JsValue, JsError> {
    let boosted = Boost::new(v).map_err(js_err)?.apply(&Event::new(t, x));
    let view = BoostedEvent {
        t: boosted.t,
        x: boosted.x,
        gamma: lorentz_factor(v).map_err(js_err)?,
    };
    serde_wasm_bindgen::to_value(&view).map_err(js_err)
}
