//! `jsoncanvas inspect`

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use jsoncanvas_core::{validate, Canvas, CanvasColor, Violation};
use jsoncanvas_store::CanvasStore;

use crate::palette::Palette;
use crate::settings::AppConfig;

pub fn run(file: &Path, config: &AppConfig) -> Result<()> {
    let palette = Palette::from_config(&config.palette).context("Invalid palette configuration")?;
    let canvas = CanvasStore::new(".").load(file)?;

    for line in summarize(&canvas, &palette) {
        println!("{line}");
    }
    Ok(())
}

/// Report lines for a canvas, in display order
pub fn summarize(canvas: &Canvas, palette: &Palette) -> Vec<String> {
    let mut lines = Vec::new();

    let mut kinds: BTreeMap<&str, usize> = BTreeMap::new();
    for node in &canvas.nodes {
        *kinds.entry(node.node_type().as_str()).or_default() += 1;
    }
    lines.push(format!("nodes: {}", canvas.node_count()));
    for (kind, count) in &kinds {
        lines.push(format!("  {kind}: {count}"));
    }
    lines.push(format!("edges: {}", canvas.edge_count()));

    let dangling: Vec<String> = validate(canvas)
        .into_iter()
        .filter(|v| matches!(v, Violation::DanglingEdge { .. }))
        .map(|v| v.to_string())
        .collect();
    if !dangling.is_empty() {
        lines.push(format!("dangling references: {}", dangling.len()));
        lines.extend(dangling.into_iter().map(|d| format!("  {d}")));
    }

    let colored: Vec<(String, &CanvasColor)> = canvas
        .nodes
        .iter()
        .filter_map(|n| n.color.as_ref().map(|c| (format!("node {:?}", n.id), c)))
        .chain(
            canvas
                .edges
                .iter()
                .filter_map(|e| e.color.as_ref().map(|c| (format!("edge {:?}", e.id), c))),
        )
        .collect();
    if !colored.is_empty() {
        lines.push("colors:".to_string());
        for (owner, color) in colored {
            let line = match color {
                CanvasColor::Hex(hex) => format!("  {owner}: {hex}"),
                CanvasColor::Preset(preset) => {
                    format!("  {owner}: preset {preset} -> {}", palette.resolve(color))
                }
            };
            lines.push(line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PaletteConfig;
    use jsoncanvas_core::{Edge, Node};

    #[test]
    fn test_summarize() {
        let canvas = Canvas::new()
            .with_nodes(vec![
                Node::text("1", 0, 0, 10, 10, "a").with_color(CanvasColor::preset(2).unwrap()),
                Node::text("2", 0, 0, 10, 10, "b"),
                Node::group("g", 0, 0, 10, 10),
            ])
            .with_edges(vec![Edge::new("e1", "1", "ghost")
                .with_color(CanvasColor::hex("#000").unwrap())]);
        let palette = Palette::from_config(&PaletteConfig::default()).unwrap();

        let lines = summarize(&canvas, &palette);
        assert_eq!(
            lines,
            vec![
                "nodes: 3",
                "  group: 1",
                "  text: 2",
                "edges: 1",
                "dangling references: 1",
                "  edge \"e1\" toNode references unknown node \"ghost\"",
                "colors:",
                "  node \"1\": preset 2 -> #e9973f",
                "  edge \"e1\": #000",
            ]
        );
    }

    #[test]
    fn test_summarize_empty() {
        let palette = Palette::from_config(&PaletteConfig::default()).unwrap();
        assert_eq!(
            summarize(&Canvas::new(), &palette),
            vec!["nodes: 0", "edges: 0"]
        );
    }
}
