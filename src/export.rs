use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::figure::Figure;

/// plotly.js release for [`PlotlyJs::Cdn`].
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const DIV_ID: &str = "monument-map";

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>__TITLE__</title>
__PLOTLY_JS__
</head>
<body>
<div id="__DIV_ID__"></div>
<script>
  const figure = __FIGURE_JSON__;
  Plotly.newPlot("__DIV_ID__", figure.data, figure.layout, { responsive: true })
    .then(function () { return Plotly.addFrames("__DIV_ID__", figure.frames); });
</script>
</body>
</html>
"##;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("serializing figure: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("plotly.js bundle is not available in this build")]
    MissingBundle,
    #[error("writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the page gets plotly.js from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlotlyJs {
    /// Inline the bundle shipped with the `plotly` crate; the page works
    /// offline.
    #[default]
    Embedded,
    /// `<script src=...>`; the page needs network access when opened.
    Cdn(String),
}

impl PlotlyJs {
    fn script_tags(&self) -> Result<String, ExportError> {
        match self {
            PlotlyJs::Embedded => {
                let scripts = embedded_scripts();
                if scripts.is_empty() {
                    return Err(ExportError::MissingBundle);
                }
                Ok(scripts)
            }
            PlotlyJs::Cdn(url) => Ok(format!(r#"<script src="{url}" charset="utf-8"></script>"#)),
        }
    }
}

/// Inline `<script>` elements of the `plotly` crate's offline page, i.e. the
/// bundled plotly.js (and its MathJax companion). The page's final inline
/// script is its own plotting call and is left out.
fn embedded_scripts() -> String {
    const CLOSE: &str = "</script>";

    let page = plotly::Plot::new().to_html();
    let mut inline: Vec<&str> = Vec::new();
    let mut rest = page.as_str();
    while let Some(start) = rest.find("<script") {
        let element = &rest[start..];
        let (Some(open_end), Some(close)) = (element.find('>'), element.find(CLOSE)) else {
            break;
        };
        if !element[..open_end].contains("src=") {
            inline.push(&element[..close + CLOSE.len()]);
        }
        rest = &element[close + CLOSE.len()..];
    }
    inline.pop();
    inline.join("\n")
}

/// Render the complete HTML document for a figure.
pub fn to_html(figure: &Figure, plotly_js: &PlotlyJs) -> Result<String, ExportError> {
    let json = serde_json::to_string(figure)?;
    let title = figure
        .layout
        .title
        .as_ref()
        .map(|t| plain_title(&t.text))
        .unwrap_or_default();

    // Figure JSON goes last so its contents are never scanned for placeholders.
    Ok(TEMPLATE
        .replace("__TITLE__", &title)
        .replace("__DIV_ID__", DIV_ID)
        .replace("__PLOTLY_JS__", &plotly_js.script_tags()?)
        .replace("__FIGURE_JSON__", &escape_json(&json)))
}

/// Write the figure as a standalone page, replacing any existing file.
pub fn write_html(figure: &Figure, path: &Path, plotly_js: &PlotlyJs) -> Result<(), ExportError> {
    let html = to_html(figure, plotly_js)?;
    std::fs::write(path, &html).map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!(
        "{} written ({:.1} KB)",
        path.display(),
        html.len() as f64 / 1024.0
    );
    Ok(())
}

/// Open the exported page with the system's default handler.
pub fn preview(path: &Path) -> io::Result<()> {
    open::that(path)
}

/// `<` only occurs inside JSON strings, where `\u003c` decodes back to it
/// without ever closing the surrounding `<script>`.
fn escape_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// First line of a plotly title as plain HTML text: markup tags such as
/// `<b>` or `<span ...>` are dropped, any other `<`, `>` or `&` is escaped.
fn plain_title(text: &str) -> String {
    let first = text.split("<br>").next().unwrap_or_default();
    let mut out = String::with_capacity(first.len());
    let mut rest = first;
    while let Some(ch) = rest.chars().next() {
        if let Some(len) = markup_tag_len(rest) {
            rest = &rest[len..];
            continue;
        }
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            c => out.push(c),
        }
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Length of a `<name ...>` or `</name>` tag at the start of `s`.
fn markup_tag_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix('<')?;
    let name = body.strip_prefix('/').unwrap_or(body);
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let end = body.find(|c: char| c == '<' || c == '>')?;
    (body.as_bytes()[end] == b'>').then_some(end + 2)
}
