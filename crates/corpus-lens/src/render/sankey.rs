//! Sankey figure renderer for flow graphs.
//!
//! Produces a Plotly figure description (`data` + `layout`) that any Plotly
//! frontend can display, or a standalone HTML page that loads Plotly from
//! its CDN.

use corpus_lens_core::{CorpusResult, FlowGraph, FlowRenderer};
use serde_json::{Value, json};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Renders a [`FlowGraph`] as a Plotly Sankey figure.
#[derive(Debug, Clone)]
pub struct SankeyRenderer {
    /// Figure title.
    pub title: String,
    /// Vertical gap between nodes, in pixels.
    pub node_pad: u32,
    /// Node bar thickness, in pixels.
    pub node_thickness: u32,
    /// Base font size.
    pub font_size: u32,
}

impl Default for SankeyRenderer {
    fn default() -> Self {
        Self {
            title: "Text-to-Word Sankey Diagram".to_string(),
            node_pad: 15,
            node_thickness: 15,
            font_size: 10,
        }
    }
}

impl FlowRenderer for SankeyRenderer {
    type Output = Value;

    fn render(&self, graph: &FlowGraph) -> CorpusResult<Value> {
        Ok(json!({
            "data": [{
                "type": "sankey",
                "node": {
                    "pad": self.node_pad,
                    "thickness": self.node_thickness,
                    "line": { "width": 0.5 },
                    "label": graph.labels,
                },
                "link": {
                    "source": graph.sources,
                    "target": graph.targets,
                    "value": graph.values,
                },
            }],
            "layout": {
                "title": { "text": self.title },
                "font": { "size": self.font_size },
            },
        }))
    }
}

/// Wrap a rendered figure in a self-contained HTML page.
pub fn to_html(figure: &Value, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{PLOTLY_CDN}"></script>
</head>
<body>
<div id="flow" style="width:100%;height:90vh;"></div>
<script>
const figure = {figure};
Plotly.newPlot("flow", figure.data, figure.layout);
</script>
</body>
</html>
"#,
        title = html_escape(title),
        figure = script_json(figure),
    )
}

/// Serialize `figure` for an inline `<script>` block.
///
/// `<`, `>` and `&` become JSON unicode escapes so labels cannot close the
/// element; the parsed value is unchanged.
fn script_json(figure: &Value) -> String {
    figure
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_lens_core::{Corpus, WordSelection, build_flow, render_flow};

    fn graph() -> FlowGraph {
        let mut corpus = Corpus::new();
        corpus.insert_text("doc1", "cat dog cat");
        corpus.insert_text("doc2", "dog dog bird");
        build_flow(&corpus, &WordSelection::TopK(1)).unwrap()
    }

    #[test]
    fn figure_carries_nodes_and_links() {
        let figure = render_flow(&graph(), Some(&SankeyRenderer::default())).unwrap();
        let trace = &figure["data"][0];
        assert_eq!(trace["type"], "sankey");
        assert_eq!(trace["node"]["label"], json!(["doc1", "doc2", "cat", "dog"]));
        assert_eq!(trace["node"]["pad"], 15);
        assert_eq!(trace["link"]["source"], json!([0, 0, 1]));
        assert_eq!(trace["link"]["target"], json!([2, 3, 3]));
        assert_eq!(trace["link"]["value"], json!([2, 1, 2]));
        assert_eq!(
            figure["layout"]["title"]["text"],
            "Text-to-Word Sankey Diagram"
        );
    }

    #[test]
    fn html_embeds_figure() {
        let figure = SankeyRenderer::default().render(&graph()).unwrap();
        let html = to_html(&figure, "Reviews <vs> Descriptions");
        assert!(html.contains("Plotly.newPlot"));
        assert!(html.contains("\"sankey\""));
        assert!(html.contains("Reviews &lt;vs&gt; Descriptions"));
    }

    #[test]
    fn labels_cannot_close_the_script_element() {
        let mut corpus = Corpus::new();
        corpus.insert_text("</script><script>alert(1)</script>", "cat cat");
        let graph = build_flow(&corpus, &WordSelection::TopK(1)).unwrap();
        let figure = SankeyRenderer::default().render(&graph).unwrap();
        let html = to_html(&figure, "flow");

        assert_eq!(html.matches("<script").count(), 2);
        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains(r"\u003c/script\u003e\u003cscript\u003ealert(1)"));
    }

    #[test]
    fn escaped_json_parses_back_to_same_figure() {
        let figure = json!({"label": ["a<b", "c>d", "e&f"]});
        let escaped = script_json(&figure);
        assert!(!escaped.contains(['<', '>', '&']));
        let parsed: Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(parsed, figure);
    }
}
