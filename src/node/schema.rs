use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::batch::orchestrator::render_batch;
use crate::batch::request::{BatchOpts, BatchRequest};
use crate::color::named::{NamedColor, list_names};
use crate::foundation::core::{
    BATCH_LIMIT, DEFAULT_CANVAS_DIM, MAX_CANVAS_DIM, MIN_SCHEMA_CANVAS_DIM, OFFSET_LIMIT,
    ZOOM_MAX, ZOOM_MIN,
};
use crate::foundation::error::{DrawShapeError, DrawShapeResult};
use crate::render::encode::ImageBatch;
use crate::shape::registry::shape_names;

/// Identity of a node as registered with the host editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NodeDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub category: &'static str,
    pub function: &'static str,
    pub return_types: &'static [&'static str],
    pub return_names: &'static [&'static str],
}

/// The draw-shape node.
pub const DRAW_SHAPE_NODE: NodeDescriptor = NodeDescriptor {
    id: "ZcDrawShape",
    display_name: "ZC DrawShape Node",
    category: "🐉 ZC Shape",
    function: "make_shape",
    return_types: &["IMAGE"],
    return_names: &["IMAGE"],
};

static NODES: &[NodeDescriptor] = &[DRAW_SHAPE_NODE];

/// Every node this crate registers.
pub fn node_registrations() -> &'static [NodeDescriptor] {
    NODES
}

/// `(id, display_name)` pairs, as hosts key their label tables.
pub fn display_names() -> Vec<(&'static str, &'static str)> {
    NODES.iter().map(|n| (n.id, n.display_name)).collect()
}

pub fn find_node(id: &str) -> DrawShapeResult<&'static NodeDescriptor> {
    NODES
        .iter()
        .find(|n| n.id == id)
        .ok_or_else(|| DrawShapeError::validation(format!("unknown node id \"{id}\"")))
}

/// One declared input of a node.
#[derive(Clone, Debug, PartialEq)]
pub enum InputKind {
    Int {
        default: i64,
        min: i64,
        max: i64,
    },
    Float {
        default: f64,
        min: f64,
        max: f64,
        step: f64,
        force_input: bool,
    },
    Choice {
        options: Vec<&'static str>,
        default: Option<&'static str>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub name: &'static str,
    pub kind: InputKind,
}

impl InputField {
    fn to_json(&self) -> Value {
        match &self.kind {
            InputKind::Int { default, min, max } => {
                json!(["INT", { "default": default, "min": min, "max": max }])
            }
            InputKind::Float {
                default,
                min,
                max,
                step,
                force_input,
            } => {
                let mut opts = json!({ "default": default, "min": min, "max": max, "step": step });
                if *force_input {
                    opts["forceInput"] = Value::Bool(true);
                }
                json!(["FLOAT", opts])
            }
            InputKind::Choice { options, default } => match default {
                Some(d) => json!([options, { "default": d }]),
                None => json!([options]),
            },
        }
    }
}

/// Declared inputs of a node, all required.
#[derive(Clone, Debug, PartialEq)]
pub struct InputSchema {
    pub required: Vec<InputField>,
}

impl InputSchema {
    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.required.iter().find(|f| f.name == name)
    }

    /// Host wire form: `{"required": {name: [TYPE, {opts}]}}`, in declaration order.
    pub fn to_json(&self) -> Value {
        let mut required = Map::new();
        for f in &self.required {
            required.insert(f.name.to_owned(), f.to_json());
        }
        json!({ "required": required })
    }
}

/// Inputs of the draw-shape node.
pub fn input_types() -> InputSchema {
    let canvas_dim = InputKind::Int {
        default: i64::from(DEFAULT_CANVAS_DIM),
        min: i64::from(MIN_SCHEMA_CANVAS_DIM),
        max: i64::from(MAX_CANVAS_DIM),
    };
    let offset = InputKind::Int {
        default: 0,
        min: -i64::from(OFFSET_LIMIT),
        max: i64::from(OFFSET_LIMIT),
    };
    let zoom = |force_input| InputKind::Float {
        default: 1.0,
        min: ZOOM_MIN,
        max: ZOOM_MAX,
        step: 0.05,
        force_input,
    };
    let colors = list_names();

    InputSchema {
        required: vec![
            InputField {
                name: "width",
                kind: canvas_dim.clone(),
            },
            InputField {
                name: "height",
                kind: canvas_dim,
            },
            InputField {
                name: "shape_name",
                kind: InputKind::Choice {
                    options: shape_names(),
                    default: None,
                },
            },
            InputField {
                name: "shape_color",
                kind: InputKind::Choice {
                    options: colors.clone(),
                    default: Some(NamedColor::White.name()),
                },
            },
            InputField {
                name: "back_color",
                kind: InputKind::Choice {
                    options: colors,
                    default: Some(NamedColor::Black.name()),
                },
            },
            InputField {
                name: "x_offset",
                kind: offset.clone(),
            },
            InputField {
                name: "y_offset",
                kind: offset,
            },
            InputField {
                name: "zoom",
                kind: zoom(true),
            },
            InputField {
                name: "zoom_multiplier",
                kind: zoom(false),
            },
            InputField {
                name: "batch",
                kind: InputKind::Int {
                    default: 1,
                    min: -BATCH_LIMIT,
                    max: BATCH_LIMIT,
                },
            },
        ],
    }
}

/// Host entry point: run node `node_id` on a JSON parameter object.
pub fn invoke(node_id: &str, params: Value, opts: &BatchOpts) -> DrawShapeResult<ImageBatch> {
    let node = find_node(node_id)?;
    let request: BatchRequest = serde_json::from_value(params)
        .map_err(|e| DrawShapeError::serde(format!("{} parameters: {e}", node.id)))?;
    request.check_schema_ranges()?;
    render_batch(&request, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/node/schema.rs"]
mod tests;
