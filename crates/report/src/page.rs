//! HTML page assembly.

use std::fs;
use std::path::Path;

use baseline_api::DatasetKind;
use baseline_spi::{ChangeVerdict, Direction, Result};
use serde::Serialize;

use crate::renderer::PLOTLY_CDN;

/// Plain-language verdict shown under each chart.
pub fn verdict_sentence(verdict: &ChangeVerdict) -> String {
    let article = match verdict.direction {
        Direction::Increase => "an",
        Direction::Decrease => "a",
    };
    format!(
        "The latest change is {} {} and it is {} compared to last year.",
        article, verdict.direction, verdict.significance
    )
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionOutcome {
    Rendered {
        chart_html: String,
        verdict: ChangeVerdict,
    },
    /// The dataset could not be loaded or analyzed.
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: DatasetKind,
    pub heading: String,
    pub subheading: Option<String>,
    pub outcome: SectionOutcome,
}

impl Section {
    pub fn is_rendered(&self) -> bool {
        matches!(self.outcome, SectionOutcome::Rendered { .. })
    }

    fn to_html(&self) -> String {
        let mut html = String::from("<section class=\"dataset\">\n");
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&self.heading)));
        if let Some(sub) = &self.subheading {
            html.push_str(&format!("<h4>{}</h4>\n", escape_html(sub)));
        }
        match &self.outcome {
            SectionOutcome::Rendered {
                chart_html,
                verdict,
            } => {
                html.push_str(chart_html);
                html.push('\n');
                html.push_str(&format!(
                    "<p class=\"verdict\">{}</p>\n",
                    escape_html(&verdict_sentence(verdict))
                ));
            }
            SectionOutcome::Failed { error } => {
                html.push_str(&format!(
                    "<p class=\"error\">This chart could not be generated: {}</p>\n",
                    escape_html(error)
                ));
            }
        }
        html.push_str("</section>\n");
        html
    }
}

/// The assembled page, one section per configured dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub intro: Vec<String>,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn failed_count(&self) -> usize {
        self.sections.iter().filter(|s| !s.is_rendered()).count()
    }

    pub fn to_html(&self) -> String {
        let title = escape_html(&self.title);
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", title));
        html.push_str(&format!("<script src=\"{}\"></script>\n", PLOTLY_CDN));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("<h1>{}</h1>\n", title));
        for paragraph in &self.intro {
            html.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
        }
        for section in &self.sections {
            html.push_str(&section.to_html());
        }
        html.push_str("</body>\n</html>\n");
        html
    }

    /// Write the page, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_html())?;
        Ok(())
    }
}
