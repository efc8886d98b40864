//! Figure layer: a plotly.js figure (`data` / `layout` / `frames`) as typed
//! structs, serialised with serde straight into the exported page.
//!
//! ```text
//!   Dataset ──render──▶ Figure (frames per Period) ──style──▶ Figure ──▶ export
//! ```

pub mod render;
pub mod style;

use serde::Serialize;

use crate::color::Color;

// ---------------------------------------------------------------------------
// Figure
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize)]
pub struct Figure {
    /// Traces shown before the animation starts (the first frame's).
    pub data: Vec<GeoTrace>,
    pub layout: Layout,
    pub frames: Vec<Frame>,
}

impl Figure {
    /// Apply `f` to every trace, both the initial ones and those in frames.
    pub fn for_each_trace_mut(&mut self, mut f: impl FnMut(&mut GeoTrace)) {
        self.data.iter_mut().for_each(&mut f);
        for frame in &mut self.frames {
            frame.data.iter_mut().for_each(&mut f);
        }
    }

    pub fn frame_names(&self) -> Vec<&str> {
        self.frames.iter().map(|f| f.name.as_str()).collect()
    }
}

/// One animation step.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<GeoTrace>,
}

// ---------------------------------------------------------------------------
// Traces
// ---------------------------------------------------------------------------

/// A `scattergeo` marker trace.
#[derive(Debug, Clone, Serialize)]
pub struct GeoTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub geo: &'static str,
    pub name: String,
    pub showlegend: bool,
    pub lon: Vec<f64>,
    pub lat: Vec<f64>,
    pub hovertext: Vec<String>,
    /// `[identifier, site type, period]` per point.
    pub customdata: Vec<[String; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl GeoTrace {
    pub fn markers(name: impl Into<String>) -> Self {
        GeoTrace {
            kind: "scattergeo",
            mode: "markers",
            geo: "geo",
            name: name.into(),
            showlegend: false,
            lon: Vec::new(),
            lat: Vec::new(),
            hovertext: Vec::new(),
            customdata: Vec::new(),
            hovertemplate: None,
            marker: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: Color,
    pub size: f64,
    pub opacity: f64,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub width: f64,
    pub color: Color,
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sliders: Vec<Slider>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
    pub x: f64,
    pub xanchor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geo {
    pub projection: Projection,
    pub visible: bool,
    pub resolution: u32,
    pub lonaxis: Axis,
    pub lataxis: Axis,
    pub showland: bool,
    pub landcolor: Color,
    pub showocean: bool,
    pub oceancolor: Color,
    pub showcoastlines: bool,
    pub coastlinecolor: Color,
    pub coastlinewidth: f64,
    pub showcountries: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis {
    pub range: [f64; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xref: &'static str,
    pub yref: &'static str,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub showarrow: bool,
    pub font: Font,
    pub align: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub size: u32,
    pub color: Color,
}

// ---------------------------------------------------------------------------
// Animation controls
// ---------------------------------------------------------------------------

/// `args` of an `animate` call: `[frames, options]`.
///
/// `None` frames means "all frames from here" (Play); `Some(vec![None])`
/// serialises as `[null]` and stops the animation (Pause).
pub type AnimateArgs = (Option<Vec<Option<String>>>, AnimationOptions);

#[derive(Debug, Clone, Serialize)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub showactive: bool,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Button {
    pub label: String,
    pub method: &'static str,
    pub args: AnimateArgs,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationOptions {
    pub frame: FrameTiming,
    pub transition: Transition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fromcurrent: Option<bool>,
    pub mode: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameTiming {
    pub duration: u32,
    pub redraw: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Slider {
    pub active: usize,
    pub currentvalue: CurrentValue,
    pub len: f64,
    pub x: f64,
    pub xanchor: &'static str,
    pub y: f64,
    pub yanchor: &'static str,
    pub steps: Vec<SliderStep>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentValue {
    pub prefix: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SliderStep {
    pub label: String,
    pub method: &'static str,
    pub args: AnimateArgs,
}
