use crate::color::Color;

use super::{
    Annotation, AnimationOptions, Axis, Button, Figure, Font, FrameTiming, Geo, Line, Margin,
    Marker, Projection, Title, Transition, UpdateMenu,
};

// ---------------------------------------------------------------------------
// Style – presentation constants
// ---------------------------------------------------------------------------

/// Every presentation parameter of the map.
#[derive(Debug, Clone, Default)]
pub struct Style {
    pub marker: MarkerStyle,
    pub geo: GeoStyle,
    pub page: PageStyle,
    pub animation: AnimationStyle,
}

#[derive(Debug, Clone)]
pub struct MarkerStyle {
    pub color: Color,
    pub size: f64,
    pub opacity: f64,
    pub outline_width: f64,
    pub outline_color: Color,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0x63, 0x6e, 0xfa),
            size: 6.0,
            opacity: 0.85,
            outline_width: 0.5,
            outline_color: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeoStyle {
    pub projection: String,
    pub resolution: u32,
    pub lon_range: [f64; 2],
    pub lat_range: [f64; 2],
    pub land_color: Color,
    pub ocean_color: Color,
    pub show_coastlines: bool,
    pub coastline_color: Color,
    pub coastline_width: f64,
    pub show_countries: bool,
}

impl Default for GeoStyle {
    fn default() -> Self {
        Self {
            projection: "mercator".to_string(),
            resolution: 50,
            lon_range: [-6.0, -2.5],
            lat_range: [51.2, 53.6],
            land_color: Color::rgb(220, 220, 220),
            ocean_color: Color::rgb(200, 215, 230),
            show_coastlines: false,
            coastline_color: Color::rgb(110, 110, 110),
            coastline_width: 0.6,
            show_countries: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageStyle {
    pub width: u32,
    pub height: u32,
    pub margin: [u32; 4],
    pub title: String,
    pub subtitle: String,
    /// Footnote; may contain `<br>` line breaks.
    pub attribution: String,
    pub attribution_font_size: u32,
    pub attribution_color: Color,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            margin: [20, 20, 70, 200],
            title: "Scheduled monuments in Wales by period".to_string(),
            subtitle: "Each frame shows the spatial distribution of scheduled monuments \
                       recorded for that period"
                .to_string(),
            attribution: "Designated Historic Asset GIS Data, The Welsh Historic Environment \
                          Service (Cadw), licensed under the Open Government Licence v3.0.<br>\
                          http://www.nationalarchives.gov.uk/doc/open-government-licence/version/3/"
                .to_string(),
            attribution_font_size: 10,
            attribution_color: Color::rgb(0x55, 0x55, 0x55),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimationStyle {
    /// How long each period stays on screen, in ms.
    pub frame_duration: u32,
    pub transition_duration: u32,
    pub easing: String,
}

impl Default for AnimationStyle {
    fn default() -> Self {
        Self {
            frame_duration: 800,
            transition_duration: 500,
            easing: "cubic-in-out".to_string(),
        }
    }
}

const HOVER_TEMPLATE: &str = "<b>%{hovertext}</b><br>\
                              SAMNumber: %{customdata[0]}<br>\
                              SiteType: %{customdata[1]}<br>\
                              Period: %{customdata[2]}\
                              <extra></extra>";

// ---------------------------------------------------------------------------
// Applying a style
// ---------------------------------------------------------------------------

/// Apply markers and hover text to every trace, then the basemap, page
/// layout and Play/Pause controls.
pub fn apply(figure: &mut Figure, style: &Style) {
    let marker = style.marker.to_marker();
    figure.for_each_trace_mut(|trace| {
        trace.marker = Some(marker.clone());
        trace.hovertemplate = Some(HOVER_TEMPLATE.to_string());
    });

    let layout = &mut figure.layout;
    layout.geo = Some(style.geo.to_geo());

    let page = &style.page;
    let [l, r, t, b] = page.margin;
    layout.width = Some(page.width);
    layout.height = Some(page.height);
    layout.margin = Some(Margin { l, r, t, b });
    layout.title = Some(page.to_title());
    layout.annotations = vec![page.to_attribution()];
    layout.updatemenus = vec![style.animation.to_controls()];
}

impl MarkerStyle {
    fn to_marker(&self) -> Marker {
        Marker {
            color: self.color,
            size: self.size,
            opacity: self.opacity,
            line: Line {
                width: self.outline_width,
                color: self.outline_color,
            },
        }
    }
}

impl GeoStyle {
    fn to_geo(&self) -> Geo {
        Geo {
            projection: Projection {
                kind: self.projection.clone(),
            },
            visible: false,
            resolution: self.resolution,
            lonaxis: Axis {
                range: self.lon_range,
            },
            lataxis: Axis {
                range: self.lat_range,
            },
            showland: true,
            landcolor: self.land_color,
            showocean: true,
            oceancolor: self.ocean_color,
            showcoastlines: self.show_coastlines,
            coastlinecolor: self.coastline_color,
            coastlinewidth: self.coastline_width,
            showcountries: self.show_countries,
        }
    }
}

impl PageStyle {
    fn to_title(&self) -> Title {
        let text = if self.subtitle.is_empty() {
            self.title.clone()
        } else {
            format!(
                "{}<br><span style='font-size:14px;color:#555;'>{}</span>",
                self.title, self.subtitle
            )
        };
        Title {
            text,
            x: 0.5,
            xanchor: "center",
        }
    }

    fn to_attribution(&self) -> Annotation {
        Annotation {
            text: self.attribution.clone(),
            x: 0.5,
            y: -0.4,
            xref: "paper",
            yref: "paper",
            xanchor: "center",
            yanchor: "top",
            showarrow: false,
            font: Font {
                size: self.attribution_font_size,
                color: self.attribution_color,
            },
            align: "center",
        }
    }
}

impl AnimationStyle {
    fn to_controls(&self) -> UpdateMenu {
        let play = AnimationOptions {
            frame: FrameTiming {
                duration: self.frame_duration,
                redraw: true,
            },
            transition: Transition {
                duration: self.transition_duration,
                easing: Some(self.easing.clone()),
            },
            fromcurrent: Some(true),
            mode: "immediate",
        };
        let pause = AnimationOptions {
            frame: FrameTiming {
                duration: 0,
                redraw: true,
            },
            transition: Transition {
                duration: 0,
                easing: None,
            },
            fromcurrent: None,
            mode: "immediate",
        };

        UpdateMenu {
            kind: "buttons",
            showactive: false,
            buttons: vec![
                Button {
                    label: "Play".to_string(),
                    method: "animate",
                    args: (None, play),
                },
                Button {
                    label: "Pause".to_string(),
                    method: "animate",
                    args: (Some(vec![None]), pause),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::data::model::{Dataset, Period, Record};
    use crate::figure::render::render;

    fn styled_figure() -> Figure {
        let records = [Period::Roman, Period::Medieval]
            .into_iter()
            .map(|period| Record {
                identifier: "X1".to_string(),
                name: "Site".to_string(),
                site_type: "Fort".to_string(),
                period,
                lon: -3.5,
                lat: 52.0,
            })
            .collect();
        let mut fig = render(&Dataset::from_records(records));
        apply(&mut fig, &Style::default());
        fig
    }

    #[test]
    fn markers_reach_initial_and_frame_traces() {
        let fig = styled_figure();
        let expected = Style::default().marker.to_marker();

        assert_eq!(fig.data[0].marker.as_ref(), Some(&expected));
        for frame in &fig.frames {
            assert_eq!(frame.data[0].marker.as_ref(), Some(&expected));
            assert!(frame.data[0]
                .hovertemplate
                .as_deref()
                .is_some_and(|t| t.ends_with("<extra></extra>")));
        }
    }

    #[test]
    fn geo_window_and_colours() {
        let json = serde_json::to_value(styled_figure().layout.geo).unwrap();

        assert_eq!(json["projection"]["type"], "mercator");
        assert_eq!(json["lonaxis"]["range"], json!([-6.0, -2.5]));
        assert_eq!(json["lataxis"]["range"], json!([51.2, 53.6]));
        assert_eq!(json["landcolor"], "rgb(220, 220, 220)");
        assert_eq!(json["oceancolor"], "rgb(200, 215, 230)");
        assert_eq!(json["showcoastlines"], false);
    }

    #[test]
    fn play_and_pause_controls() {
        let json = serde_json::to_value(&styled_figure().layout.updatemenus).unwrap();
        let buttons = &json[0]["buttons"];

        assert_eq!(buttons[0]["label"], "Play");
        assert_eq!(buttons[0]["args"][0], json!(null));
        assert_eq!(buttons[0]["args"][1]["frame"]["duration"], 800);
        assert_eq!(buttons[0]["args"][1]["transition"]["easing"], "cubic-in-out");
        assert_eq!(buttons[0]["args"][1]["fromcurrent"], true);

        assert_eq!(buttons[1]["label"], "Pause");
        assert_eq!(buttons[1]["args"][0], json!([null]));
        assert_eq!(buttons[1]["args"][1]["frame"]["duration"], 0);
        assert_eq!(buttons[1]["args"][1]["transition"], json!({ "duration": 0 }));
    }

    #[test]
    fn page_layout() {
        let layout = styled_figure().layout;

        assert_eq!((layout.width, layout.height), (Some(1000), Some(700)));
        assert_eq!(
            layout.margin,
            Some(Margin {
                l: 20,
                r: 20,
                t: 70,
                b: 200
            })
        );
        let title = layout.title.unwrap();
        assert!(title.text.starts_with("Scheduled monuments in Wales by period<br>"));
        assert!(layout.annotations[0].text.contains("Open Government Licence"));
    }
}
