use std::collections::BTreeMap;

use crate::data::model::{Dataset, Period, Record};

use super::{
    AnimationOptions, CurrentValue, Figure, Frame, FrameTiming, GeoTrace, Slider, SliderStep,
    Transition,
};

/// Label prefix shown above the frame slider.
const SLIDER_PREFIX: &str = "Period=";

/// Build the animated figure: one frame per period present in the dataset,
/// in chronological order. The first frame is also the initial view.
///
/// Coordinates pass through unchanged; projection is left to plotly.js.
pub fn render(dataset: &Dataset) -> Figure {
    let mut by_period: BTreeMap<Period, Vec<&Record>> = BTreeMap::new();
    for record in dataset.records() {
        by_period.entry(record.period).or_default().push(record);
    }

    let frames: Vec<Frame> = by_period
        .into_iter()
        .map(|(period, records)| {
            log::debug!("Frame '{period}': {} points", records.len());
            Frame {
                name: period.label().to_string(),
                data: vec![trace_for(period, &records)],
            }
        })
        .collect();

    if frames.is_empty() {
        log::warn!("No records left to plot; the map will have no frames");
    } else {
        log::info!("Built {} animation frames", frames.len());
    }

    let mut figure = Figure {
        data: frames
            .first()
            .map(|f| f.data.clone())
            .unwrap_or_default(),
        frames,
        ..Default::default()
    };
    if !figure.frames.is_empty() {
        figure.layout.sliders = vec![frame_slider(&figure.frames)];
    }
    figure
}

fn trace_for(period: Period, records: &[&Record]) -> GeoTrace {
    let mut trace = GeoTrace::markers(period.label());
    for r in records {
        trace.lon.push(r.lon);
        trace.lat.push(r.lat);
        trace.hovertext.push(r.name.clone());
        trace.customdata.push([
            r.identifier.clone(),
            r.site_type.clone(),
            period.label().to_string(),
        ]);
    }
    trace
}

/// Slider with one step per frame, jumping straight to that frame.
fn frame_slider(frames: &[Frame]) -> Slider {
    let jump = AnimationOptions {
        frame: FrameTiming {
            duration: 0,
            redraw: true,
        },
        transition: Transition {
            duration: 0,
            easing: Some("linear".to_string()),
        },
        fromcurrent: Some(true),
        mode: "immediate",
    };

    Slider {
        active: 0,
        currentvalue: CurrentValue {
            prefix: SLIDER_PREFIX.to_string(),
        },
        len: 0.9,
        x: 0.1,
        xanchor: "left",
        y: 0.0,
        yanchor: "top",
        steps: frames
            .iter()
            .map(|f| SliderStep {
                label: f.name.clone(),
                method: "animate",
                args: (Some(vec![Some(f.name.clone())]), jump.clone()),
            })
            .collect(),
    }
}
