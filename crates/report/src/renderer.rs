//! Plotly.js chart renderer.

use baseline_spi::{BaselineError, ChartRenderer, ChartSpec, Result, Trace};
use serde_json::{json, Map, Value};

use crate::page::escape_html;

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

/// Renders a [`ChartSpec`] as a Plotly `newPlot` call.
#[derive(Debug, Clone, Default)]
pub struct PlotlyRenderer;

impl PlotlyRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Plotly figure (`data` + `layout`) for the chart.
    pub fn figure(&self, chart: &ChartSpec) -> Value {
        json!({
            "data": chart.traces.iter().map(trace_json).collect::<Vec<_>>(),
            "layout": layout_json(chart),
        })
    }
}

fn trace_json(trace: &Trace) -> Value {
    let mut line = Map::new();
    if let Some(color) = &trace.style.color {
        line.insert("color".into(), json!(color));
    }
    line.insert("dash".into(), json!(trace.style.dash.as_str()));
    if let Some(width) = trace.style.width {
        line.insert("width".into(), json!(width));
    }

    let mut value = json!({
        "type": "scatter",
        "mode": "lines",
        "name": trace.name,
        "x": trace.x,
        "y": trace.y,
        "line": Value::Object(line),
        "showlegend": trace.show_legend,
    });
    if let Some(fill) = &trace.style.fill {
        value["fill"] = json!("tonexty");
        value["fillcolor"] = json!(fill.color);
    }
    value
}

fn layout_json(chart: &ChartSpec) -> Value {
    let mut yaxis = json!({ "title": { "text": format!("<b>{}</b>", escape_html(&chart.y_axis.title)) } });
    if let Some((low, high)) = chart.y_axis.range {
        yaxis["range"] = json!([low, high]);
    }
    let mut xaxis = json!({ "title": { "text": format!("<b>{}</b>", escape_html(&chart.x_axis.title)) } });
    if let Some((low, high)) = chart.x_axis.range {
        xaxis["range"] = json!([low, high]);
    }

    let mut layout = json!({ "xaxis": xaxis, "yaxis": yaxis });
    if let Some(title) = &chart.title {
        layout["title"] = json!({ "text": escape_html(title) });
    }
    if chart.drag_locked {
        layout["dragmode"] = json!(false);
    }
    if let Some(source) = &chart.source {
        layout["annotations"] = json!([{
            "x": 0.5,
            "y": -0.2,
            "xref": "paper",
            "yref": "paper",
            "text": format!(
                "Source: <a href='{}' target='_blank'>{}</a>",
                escape_html(&source.url),
                escape_html(&source.label)
            ),
            "showarrow": false,
            "font": { "size": 10 },
        }]);
    }
    layout
}

/// JSON safe to inline inside a `<script>` element.
fn script_json(value: &Value) -> Result<String> {
    serde_json::to_string(value)
        .map(|s| s.replace("</", "<\\/"))
        .map_err(|e| BaselineError::Render(e.to_string()))
}

impl ChartRenderer for PlotlyRenderer {
    fn name(&self) -> &str {
        "plotly"
    }

    fn render(&self, element_id: &str, chart: &ChartSpec) -> Result<String> {
        let figure = self.figure(chart);
        let data = script_json(&figure["data"])?;
        let layout = script_json(&figure["layout"])?;
        let id = escape_html(element_id);
        Ok(format!(
            "<div id=\"{id}\" class=\"plotly-graph-div\"></div>\n\
             <script type=\"text/javascript\">\
             Plotly.newPlot(\"{id}\", {data}, {layout}, {{\"responsive\": true}});\
             </script>"
        ))
    }
}

/// Self-contained HTML document around one rendered fragment.
pub fn standalone_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <script src=\"{}\"></script>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        PLOTLY_CDN,
        body
    )
}
