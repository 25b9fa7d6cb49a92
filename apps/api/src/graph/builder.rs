//! Graph builder — turns a profile and a list of career paths into a radial
//! node-link graph.
//!
//! Pure function of its inputs: no clock, no randomness, no I/O. Two calls
//! with equal inputs produce equal graphs, down to the coordinates.
//!
//! Layout:
//! - root at the center
//! - attributes on an inner ring, first one at the top (−90°)
//! - careers on an outer ring, rotated half a step so they sit between spokes
//!
//! Edges:
//! - root → every attribute (always)
//! - attribute → career for every lexical match
//! - careers with no match get fallback edges from the course node and from the
//!   attribute at the proportional index `floor(i·n/m) mod n`

use std::f64::consts::PI;

use serde::Serialize;
use tracing::debug;

use crate::graph::matcher::{is_related, AttributeKind};
use crate::graph::profile::{extract_attributes, ProfileAttribute};
use crate::graph::theme::{self, Gradient};
use crate::models::profile::Profile;

pub const CENTER_X: f64 = 400.0;
pub const CENTER_Y: f64 = 300.0;
pub const ATTRIBUTE_RING_RADIUS: f64 = 150.0;
pub const CAREER_RING_RADIUS: f64 = 260.0;

pub const ROOT_ID: &str = "root";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Root,
    Attribute,
    Career,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    /// `"root"`, `"attr-{i}"` or `"career-{i}"`.
    pub id: String,
    pub kind: NodeKind,
    /// Set on attribute nodes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_kind: Option<AttributeKind>,
    pub label: String,
    /// Untruncated text for tooltips.
    pub full_label: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
    pub opacity: f64,
    /// True for root and match edges, false for fallback edges.
    pub strong: bool,
}

impl GraphEdge {
    fn strong(source: &str, target: &str, weight: f64) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            weight,
            opacity: theme::STRONG_EDGE_OPACITY,
            strong: true,
        }
    }

    fn fallback(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            weight: theme::FALLBACK_EDGE_WEIGHT,
            opacity: theme::FALLBACK_EDGE_OPACITY,
            strong: false,
        }
    }
}

/// The built graph, ready for the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CareerGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

#[allow(dead_code)]
impl CareerGraph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn incoming(&self, id: &str) -> impl Iterator<Item = &GraphEdge> {
        let id = id.to_string();
        self.edges.iter().filter(move |e| e.target == id)
    }
}

pub fn attribute_id(index: usize) -> String {
    format!("attr-{index}")
}

pub fn career_id(index: usize) -> String {
    format!("career-{index}")
}

/// Builds the affinity graph for `profile` against `career_paths`.
pub fn build_graph(profile: &Profile, career_paths: &[String]) -> CareerGraph {
    let attributes = extract_attributes(profile);
    let mut nodes = Vec::with_capacity(1 + attributes.len() + career_paths.len());
    let mut edges = Vec::new();

    nodes.push(GraphNode {
        id: ROOT_ID.to_string(),
        kind: NodeKind::Root,
        attribute_kind: None,
        label: "You".to_string(),
        full_label: "You".to_string(),
        x: CENTER_X,
        y: CENTER_Y,
        radius: theme::ROOT_RADIUS,
        gradient: theme::root_gradient(),
    });

    let attr_count = attributes.len();
    for (i, attr) in attributes.iter().enumerate() {
        let (x, y) = ring_position(i, attr_count, ATTRIBUTE_RING_RADIUS, 0.0);
        let id = attribute_id(i);
        edges.push(GraphEdge::strong(ROOT_ID, &id, theme::ROOT_EDGE_WEIGHT));
        nodes.push(GraphNode {
            id,
            kind: NodeKind::Attribute,
            attribute_kind: Some(attr.kind),
            label: attr.label.clone(),
            full_label: attr.full_label.clone(),
            x,
            y,
            radius: theme::ATTRIBUTE_RADIUS,
            gradient: theme::attribute_gradient(attr.kind),
        });
    }

    let career_count = career_paths.len();
    let half_step = if career_count > 0 {
        PI / career_count as f64
    } else {
        0.0
    };
    let course_index = attributes
        .iter()
        .position(|a| a.kind == AttributeKind::Course);

    for (i, career) in career_paths.iter().enumerate() {
        let (x, y) = ring_position(i, career_count, CAREER_RING_RADIUS, half_step);
        let id = career_id(i);

        edges.extend(career_edges(&attributes, course_index, i, career_count, career, &id));

        nodes.push(GraphNode {
            id,
            kind: NodeKind::Career,
            attribute_kind: None,
            label: career.clone(),
            full_label: career.clone(),
            x,
            y,
            radius: theme::CAREER_RADIUS,
            gradient: theme::career_gradient(),
        });
    }

    debug!(
        "Built affinity graph: {} attributes, {} careers, {} edges",
        attr_count,
        career_count,
        edges.len()
    );

    CareerGraph { nodes, edges }
}

/// Incoming edges for career `index`: one match edge per related attribute,
/// or the fallback pair when nothing matched.
fn career_edges(
    attributes: &[ProfileAttribute],
    course_index: Option<usize>,
    index: usize,
    career_count: usize,
    career: &str,
    career_id: &str,
) -> Vec<GraphEdge> {
    let matches: Vec<GraphEdge> = attributes
        .iter()
        .enumerate()
        .filter(|(_, attr)| is_related(&attr.full_label, career, attr.kind))
        .map(|(a, _)| GraphEdge::strong(&attribute_id(a), career_id, theme::MATCH_EDGE_WEIGHT))
        .collect();

    if !matches.is_empty() {
        return matches;
    }

    let mut fallback = Vec::with_capacity(2);
    if let Some(course) = course_index {
        fallback.push(GraphEdge::fallback(&attribute_id(course), career_id));
    }
    if let Some(nearest) = proportional_index(index, attributes.len(), career_count) {
        if Some(nearest) != course_index {
            fallback.push(GraphEdge::fallback(&attribute_id(nearest), career_id));
        }
    }
    fallback
}

/// `floor(index · attr_count / career_count) mod attr_count`, or `None` when
/// there are no attributes to point at.
pub fn proportional_index(index: usize, attr_count: usize, career_count: usize) -> Option<usize> {
    if attr_count == 0 || career_count == 0 {
        return None;
    }
    Some((index * attr_count / career_count) % attr_count)
}

/// Position of slot `index` of `count` on a ring around the center, starting at
/// the top and going clockwise in screen coordinates.
fn ring_position(index: usize, count: usize, radius: f64, offset: f64) -> (f64, f64) {
    let step = 2.0 * PI / count.max(1) as f64;
    let angle = index as f64 * step - PI / 2.0 + offset;
    (
        round2(CENTER_X + radius * angle.cos()),
        round2(CENTER_Y + radius * angle.sin()),
    )
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(course: Option<&str>, skills: &str, interests: &str) -> Profile {
        Profile {
            course: course.map(str::to_string),
            skills: Some(skills.to_string()),
            career_interests: Some(interests.to_string()),
        }
    }

    fn careers(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn incoming_sources(graph: &CareerGraph, id: &str) -> Vec<String> {
        graph.incoming(id).map(|e| e.source.clone()).collect()
    }

    #[test]
    fn test_single_root_at_center() {
        let graph = build_graph(&profile(Some("BS CS"), "Rust", ""), &careers(&["Engineer"]));
        let roots: Vec<_> = graph.nodes.iter().filter(|n| n.kind == NodeKind::Root).collect();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].id, ROOT_ID);
        assert_eq!((roots[0].x, roots[0].y), (CENTER_X, CENTER_Y));
    }

    #[test]
    fn test_ids_follow_scheme_and_input_order() {
        let graph = build_graph(
            &profile(Some("BS CS"), "Rust, Go", ""),
            &careers(&["Backend Developer", "Nurse"]),
        );
        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["root", "attr-0", "attr-1", "attr-2", "career-0", "career-1"]
        );
        assert_eq!(graph.node("career-1").unwrap().label, "Nurse");
        assert_eq!(graph.node("attr-2").unwrap().label, "Go");
    }

    #[test]
    fn test_first_attribute_at_top_of_inner_ring() {
        let graph = build_graph(&profile(Some("BS CS"), "Rust, Go, SQL", ""), &[]);
        let first = graph.node("attr-0").unwrap();
        assert_eq!(first.x, CENTER_X);
        assert_eq!(first.y, CENTER_Y - ATTRIBUTE_RING_RADIUS);
        // Four attributes → the second sits at 0° (right of center).
        let second = graph.node("attr-1").unwrap();
        assert_eq!(second.x, CENTER_X + ATTRIBUTE_RING_RADIUS);
        assert_eq!(second.y, CENTER_Y);
    }

    #[test]
    fn test_career_ring_offset_by_half_step() {
        let graph = build_graph(&profile(None, "Rust", ""), &careers(&["A role", "B role"]));
        // Two careers: step = 180°, half step = 90°, so the first lands at 0°.
        let first = graph.node("career-0").unwrap();
        assert_eq!(first.x, CENTER_X + CAREER_RING_RADIUS);
        assert_eq!(first.y, CENTER_Y);
        let second = graph.node("career-1").unwrap();
        assert_eq!(second.x, CENTER_X - CAREER_RING_RADIUS);
        assert_eq!(second.y, CENTER_Y);
    }

    #[test]
    fn test_every_attribute_has_exactly_one_root_edge() {
        let graph = build_graph(
            &profile(Some("BS IT"), "Rust, Go, SQL, Docker, Linux, Extra", "Games, Music"),
            &careers(&["Cloud Engineer", "Game Designer"]),
        );
        for node in graph.nodes.iter().filter(|n| n.kind == NodeKind::Attribute) {
            let from_root: Vec<_> = graph
                .incoming(&node.id)
                .filter(|e| e.source == ROOT_ID)
                .collect();
            assert_eq!(from_root.len(), 1, "attribute {} root edges", node.id);
            assert!(from_root[0].strong);
        }
    }

    #[test]
    fn test_no_orphan_careers() {
        let graph = build_graph(
            &profile(None, "Painting, Sculpture", "Hiking"),
            &careers(&[
                "Nurse Practitioner",
                "Pilot",
                "Chef - Pastry",
                "Marine Biologist",
                "Lawyer",
            ]),
        );
        for node in graph.nodes.iter().filter(|n| n.kind == NodeKind::Career) {
            assert!(
                graph.incoming(&node.id).count() >= 1,
                "career {} has no incoming edge",
                node.id
            );
        }
    }

    #[test]
    fn test_scenario_course_keyword_and_skill_edges() {
        let graph = build_graph(
            &profile(Some("BS CS"), "React, CSS", ""),
            &careers(&["Frontend Developer - Web", "Data Analyst - BI"]),
        );
        // Course "BS CS" relates to both via the role keywords; React/CSS match neither.
        assert_eq!(incoming_sources(&graph, "career-0"), vec!["attr-0"]);
        assert_eq!(incoming_sources(&graph, "career-1"), vec!["attr-0"]);
        assert!(graph.incoming("career-0").all(|e| e.strong));
        assert!(graph.incoming("career-1").all(|e| e.strong));
    }

    #[test]
    fn test_multiple_match_edges_for_one_career() {
        let graph = build_graph(
            &profile(Some("BS CS"), "Data Science, Python", "Data Visualization"),
            &careers(&["Data Analyst - Python"]),
        );
        let sources = incoming_sources(&graph, "career-0");
        assert_eq!(sources, vec!["attr-0", "attr-1", "attr-2", "attr-3"]);
        assert!(graph.incoming("career-0").all(|e| e.strong));
    }

    #[test]
    fn test_fallback_uses_course_and_proportional_index() {
        let graph = build_graph(
            &profile(Some("BS Nursing"), "Painting, Sculpture, Pottery", ""),
            &careers(&["Pilot", "Chef", "Lawyer", "Farmer"]),
        );
        // 4 attributes, 4 careers → proportional index equals the career index.
        assert_eq!(incoming_sources(&graph, "career-0"), vec!["attr-0"]);
        assert_eq!(incoming_sources(&graph, "career-1"), vec!["attr-0", "attr-1"]);
        assert_eq!(incoming_sources(&graph, "career-2"), vec!["attr-0", "attr-2"]);
        assert_eq!(incoming_sources(&graph, "career-3"), vec!["attr-0", "attr-3"]);
        assert!(graph
            .edges
            .iter()
            .filter(|e| e.target.starts_with("career-"))
            .all(|e| !e.strong && e.weight == theme::FALLBACK_EDGE_WEIGHT));
    }

    #[test]
    fn test_fallback_without_course_uses_only_proportional_edge() {
        let graph = build_graph(
            &profile(None, "Painting, Sculpture", ""),
            &careers(&["Pilot", "Chef", "Lawyer", "Farmer"]),
        );
        // 2 attributes, 4 careers → floor(i·2/4) = 0, 0, 1, 1
        assert_eq!(incoming_sources(&graph, "career-0"), vec!["attr-0"]);
        assert_eq!(incoming_sources(&graph, "career-1"), vec!["attr-0"]);
        assert_eq!(incoming_sources(&graph, "career-2"), vec!["attr-1"]);
        assert_eq!(incoming_sources(&graph, "career-3"), vec!["attr-1"]);
    }

    #[test]
    fn test_empty_career_list_only_root_edges() {
        let p = profile(Some("BS CS"), "React, CSS", "Gaming");
        let graph = build_graph(&p, &[]);
        assert_eq!(graph.edges.len(), 4);
        assert!(graph.edges.iter().all(|e| e.source == ROOT_ID));
        assert!(graph.nodes.iter().all(|n| n.kind != NodeKind::Career));
    }

    #[test]
    fn test_empty_attributes_keeps_careers_without_edges() {
        let graph = build_graph(&Profile::default(), &careers(&["Pilot", "Chef"]));
        assert_eq!(graph.nodes.len(), 3);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_build_is_deterministic() {
        let p = profile(Some("BS Computer Science"), "Rust, SQL, Docker", "Cloud, Games");
        let c = careers(&["Cloud Engineer - AWS", "Game Developer", "Chef"]);
        assert_eq!(build_graph(&p, &c), build_graph(&p, &c));
    }

    #[test]
    fn test_proportional_index() {
        assert_eq!(proportional_index(0, 0, 3), None);
        assert_eq!(proportional_index(2, 3, 0), None);
        assert_eq!(proportional_index(1, 3, 2), Some(1));
        assert_eq!(proportional_index(5, 3, 6), Some(2));
    }
}
