// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text export of dessins for external layout tools.
//!
//! Both formats carry the colour tags as attributes and keep loops and
//! parallel edges. Neither carries positions.

use crate::dessin::{Dessin, EdgeColor, VertexColor};
use std::fmt::Write;

/// Export format understood by graph layout tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    GraphMl,
    Dot,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::GraphMl => "graphml",
            ExportFormat::Dot => "dot",
        }
    }
}

fn vertex_color(color: VertexColor) -> &'static str {
    match color {
        VertexColor::White => "white",
    }
}

fn edge_color(color: EdgeColor) -> &'static str {
    match color {
        EdgeColor::Black => "black",
    }
}

impl Dessin {
    /// Render in the requested format.
    pub fn export(&self, format: ExportFormat, title: &str) -> String {
        match format {
            ExportFormat::GraphMl => self.to_graphml(title),
            ExportFormat::Dot => self.to_dot(title),
        }
    }

    /// GraphML document with a `color` attribute on nodes and edges.
    pub fn to_graphml(&self, title: &str) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(out, r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns">"#);
        let _ = writeln!(
            out,
            r#"  <key id="color" for="all" attr.name="color" attr.type="string"/>"#
        );
        let _ = writeln!(
            out,
            r#"  <graph id="{}" edgedefault="undirected">"#,
            escape_xml(title)
        );
        for vertex in self.vertices() {
            let _ = writeln!(
                out,
                r#"    <node id="n{}"><data key="color">{}</data></node>"#,
                vertex.sheet,
                vertex_color(vertex.color)
            );
        }
        for (k, edge) in self.edges().iter().enumerate() {
            let _ = writeln!(
                out,
                r#"    <edge id="e{}" source="n{}" target="n{}"><data key="color">{}</data></edge>"#,
                k + 1,
                edge.source,
                edge.target,
                edge_color(edge.color)
            );
        }
        let _ = writeln!(out, "  </graph>");
        let _ = writeln!(out, "</graphml>");
        out
    }

    /// Graphviz `graph` (undirected, multi-edges allowed).
    pub fn to_dot(&self, title: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "graph \"{}\" {{", title.replace('"', "\\\""));
        for vertex in self.vertices() {
            let _ = writeln!(
                out,
                "  {} [style=filled, fillcolor={}];",
                vertex.sheet,
                vertex_color(vertex.color)
            );
        }
        for edge in self.edges() {
            let _ = writeln!(
                out,
                "  {} -- {} [color={}];",
                edge.source,
                edge.target,
                edge_color(edge.color)
            );
        }
        let _ = writeln!(out, "}}");
        out
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
