use crate::interop::{from_js, from_js_or_default, to_js};
use crate::{error, NavGraph};
use navgraph::json::{import_graph, stairs_from_json_value};
use navgraph::{ExtractConfig, MapConfig, MapObject, RouteOptions, Router};
use serde::Deserialize;
use serde_json::json;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route `log` records to the browser console. Unknown levels mean `info`.
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) -> bool {
    let lvl = level
        .as_deref()
        .and_then(|s| s.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info);
    match console_log::init_with_level(lvl) {
        Ok(()) => true,
        Err(e) => {
            // Already initialized by an earlier call.
            let msg = format!("navgraph: logger not installed: {}", e);
            web_sys::console::warn_1(&JsValue::from_str(&msg));
            false
        }
    }
}

#[wasm_bindgen]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    navgraph::distance(x1, y1, x2, y2)
}

#[wasm_bindgen]
impl NavGraph {
    #[wasm_bindgen(constructor)]
    pub fn new() -> NavGraph {
        crate::NavGraph::rs_new()
    }
    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.edge_count() as u32
    }

    // Diagram import
    pub fn from_diagram(&mut self, diagram: JsValue, stairs: JsValue, config: JsValue) -> bool {
        self.load_diagram(diagram, stairs, config).is_ok()
    }
    pub fn from_diagram_res(
        &mut self,
        diagram: JsValue,
        stairs: JsValue,
        config: JsValue,
    ) -> JsValue {
        match self.load_diagram(diagram, stairs, config) {
            Ok(()) => error::ok(to_js(&json!({
                "vertices": self.inner.vertex_count(),
                "edges": self.inner.edge_count(),
            }))),
            Err(e) => e,
        }
    }

    // JSON persistence
    pub fn to_json(&self) -> JsValue {
        to_js(&self.inner.to_json_value())
    }
    pub fn from_json(&mut self, v: JsValue) -> bool {
        let val: serde_json::Value = match from_js(v) {
            Ok(val) => val,
            Err(_) => return false,
        };
        match navgraph::Graph::from_json_value(val) {
            Ok(g) => {
                self.inner = g;
                true
            }
            Err(e) => {
                log::warn!("from_json rejected: {}", e);
                false
            }
        }
    }
    pub fn from_json_res(&mut self, v: JsValue) -> JsValue {
        match from_js::<serde_json::Value>(v) {
            Ok(val) => match navgraph::Graph::from_json_value(val) {
                Ok(g) => {
                    self.inner = g;
                    error::ok(JsValue::from_bool(true))
                }
                Err(e) => error::codec(&e),
            },
            Err(e) => error::json_parse(e),
        }
    }

    // Routing
    /// `objects` is either a list of map objects or a map configuration
    /// document (`{components, objects}`). `options` is `RouteOptions` JSON
    /// (`{directedFloorLinks, floorTargetsByMapObject}`); absent means defaults.
    pub fn route_res(&self, start: &str, end: &str, objects: JsValue, options: JsValue) -> JsValue {
        let objects: Objects = match from_js(objects) {
            Ok(o) => o,
            Err(e) => return error::json_parse(e),
        };
        let opts: RouteOptions = match from_js_or_default(options) {
            Ok(o) => o,
            Err(e) => return error::json_parse(e),
        };
        let router = Router::new(&self.inner, opts);
        let found = match &objects {
            Objects::List(list) => router.route(start, end, list),
            Objects::Config(config) => router.route_in(start, end, config),
        };
        match found {
            Ok(r) => error::ok(to_js(&json!({
                "vertices": r.vertices,
                "distance": r.distance,
            }))),
            Err(e) => error::route(&e),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Objects {
    List(Vec<MapObject>),
    Config(MapConfig),
}

impl NavGraph {
    // Replaces the graph only when every input decodes.
    fn load_diagram(
        &mut self,
        diagram: JsValue,
        stairs: JsValue,
        config: JsValue,
    ) -> Result<(), JsValue> {
        let diagram: serde_json::Value = from_js(diagram).map_err(error::json_parse)?;
        let stairs = if stairs.is_undefined() || stairs.is_null() {
            Vec::new()
        } else {
            let v: serde_json::Value = from_js(stairs).map_err(error::json_parse)?;
            stairs_from_json_value(v).map_err(|e| error::codec(&e))?
        };
        let cfg: ExtractConfig = from_js_or_default(config).map_err(error::json_parse)?;
        let g = import_graph(diagram, &stairs, &cfg).map_err(|e| error::codec(&e))?;
        log::info!("diagram imported: {} vertices, {} edges", g.vertex_count(), g.edge_count());
        self.inner = g;
        Ok(())
    }
}

impl Default for NavGraph {
    fn default() -> Self {
        Self::new()
    }
}
