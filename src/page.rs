// ABOUTME: Assembles the full HTML map page: Leaflet assets, summary accordion, map mount and scripts
// ABOUTME: Used by the page server for `/` and by the CLI to write a standalone page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::collection::ActivityCollection;
use crate::config::MapConfig;
use crate::constants::accordion::{HEADER_CLASS, PANEL_CLASS};
use crate::constants::map::{LEAFLET_VERSION, MOUNT_ELEMENT_ID};
use crate::panels::{Element, PanelDocument, ACCORDION_SCRIPT};
use crate::render::{LeafletScript, MapRenderer, RenderReport};
use crate::stats::{summarize_all, GroupSummary};
use std::fmt::Write as _;

/// Page shell embedded at compile time
const MAP_PAGE_TEMPLATE: &str = include_str!("../templates/map.html");

/// Default page title
const PAGE_TITLE: &str = "Activity Map";

/// A complete map page
#[derive(Debug, Clone, PartialEq)]
pub struct MapPage {
    title: String,
    map_script: String,
    summaries: Vec<GroupSummary>,
    panels: PanelDocument,
}

impl MapPage {
    /// Page from an already rendered map script and the group summaries
    #[must_use]
    pub fn new(map_script: String, summaries: Vec<GroupSummary>) -> Self {
        Self {
            title: PAGE_TITLE.to_owned(),
            map_script,
            panels: summary_panels(&summaries),
            summaries,
        }
    }

    /// Render `collection` onto a fresh Leaflet map and summarize it
    #[must_use]
    pub fn build(collection: &ActivityCollection, config: &MapConfig) -> (Self, RenderReport) {
        let mut renderer = MapRenderer::new(LeafletScript::default(), config);
        let report = renderer.render_collection(collection);
        let page = Self::new(
            renderer.into_surface().script(),
            summarize_all(collection.activities()),
        );
        (page, report)
    }

    /// Replace the page title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Group summaries shown in the accordion
    #[must_use]
    pub fn summaries(&self) -> &[GroupSummary] {
        &self.summaries
    }

    /// The accordion document shown next to the map
    #[must_use]
    pub const fn panels(&self) -> &PanelDocument {
        &self.panels
    }

    /// Serialize the page
    ///
    /// The map script goes in last so text from activity names is never
    /// taken for a placeholder.
    #[must_use]
    pub fn to_html(&self) -> String {
        let leaflet = format!("https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist");

        MAP_PAGE_TEMPLATE
            .replace("{{LEAFLET_BASE}}", &leaflet)
            .replace("{{MOUNT_ID}}", MOUNT_ELEMENT_ID)
            .replace("{{ACCORDION_SCRIPT}}", ACCORDION_SCRIPT)
            .replace("{{PANELS}}", &self.panels.to_html())
            .replace("{{TITLE}}", &html_escape::encode_text(&self.title))
            .replace("{{MAP_SCRIPT}}", &self.map_script)
    }
}

/// One accordion header and panel per summary, in order
#[must_use]
pub fn summary_panels(summaries: &[GroupSummary]) -> PanelDocument {
    let mut document = PanelDocument::default();

    for summary in summaries {
        document.push(
            Element::new("button")
                .with_class(HEADER_CLASS)
                .with_text(summary.group.title()),
        );
        document.push(
            Element::new("div")
                .with_class(PANEL_CLASS)
                .with_inner_html(summary_table(summary)),
        );
    }

    document
}

fn summary_table(summary: &GroupSummary) -> String {
    let mut table = String::from("<table>");
    for (label, value) in summary.rows() {
        let _ = write!(
            table,
            "<tr><td>{}</td><td>{}</td></tr>",
            html_escape::encode_text(label),
            html_escape::encode_text(&value)
        );
    }
    table.push_str("</table>");
    table
}
