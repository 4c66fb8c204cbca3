// ABOUTME: Accordion panels: headers that show and hide the panel element right after them
// ABOUTME: Holds a flat element document plus the matching browser script for the served page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Accordion Panels
//!
//! A [`PanelDocument`] is a flat list of sibling elements in document order.
//! [`Accordion::bind`] pairs every element classed `accordion` with the element
//! immediately after it; [`Accordion::click`] then toggles the header's
//! `active` class and flips the panel between shown and hidden.
//!
//! A panel counts as shown only when its display is `block`. Panels without an
//! inline display start hidden, as the page stylesheet hides `.panel`.
//! [`ACCORDION_SCRIPT`] performs the same binding in the browser.

use crate::constants::accordion::{ACTIVE_CLASS, HEADER_CLASS};
use std::fmt::Write as _;
use tracing::warn;

/// Browser-side accordion binding, equivalent to [`Accordion`]
pub const ACCORDION_SCRIPT: &str = r#"(function () {
  var headers = document.getElementsByClassName("accordion");
  for (var i = 0; i < headers.length; i++) {
    var panel = headers[i].nextElementSibling;
    if (!panel || panel.classList.contains("accordion")) {
      console.warn("accordion header has no panel", headers[i]);
      continue;
    }
    headers[i].addEventListener("click", function () {
      this.classList.toggle("active");
      var target = this.nextElementSibling;
      if (window.getComputedStyle(target).display === "block") {
        target.style.display = "none";
      } else {
        target.style.display = "block";
      }
    });
  }
})();"#;

/// Inline `display` of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayStyle {
    /// `display: block`
    Block,
    /// `display: none`
    None,
    /// No inline display; the stylesheet decides
    #[default]
    Unset,
}

impl DisplayStyle {
    /// Whether an element with this display is visible
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Block)
    }

    const fn as_css(self) -> Option<&'static str> {
        match self {
            Self::Block => Some("block"),
            Self::None => Some("none"),
            Self::Unset => None,
        }
    }
}

/// Position of an element in its [`PanelDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    /// Document-order index
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One element of a [`PanelDocument`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    display: DisplayStyle,
    inner_html: String,
}

impl Element {
    /// Empty element with the given tag
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            display: DisplayStyle::Unset,
            inner_html: String::new(),
        }
    }

    /// Add a class
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the inline display
    #[must_use]
    pub fn with_display(mut self, display: DisplayStyle) -> Self {
        self.display = display;
        self
    }

    /// Set escaped text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.inner_html = html_escape::encode_text(text).into_owned();
        self
    }

    /// Set trusted HTML content
    #[must_use]
    pub fn with_inner_html(mut self, html: impl Into<String>) -> Self {
        self.inner_html = html.into();
        self
    }

    /// Whether the element carries `class`
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add `class` if missing, remove it otherwise; returns whether it is now present
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if let Some(pos) = self.classes.iter().position(|c| c == class) {
            self.classes.remove(pos);
            false
        } else {
            self.classes.push(class.to_owned());
            true
        }
    }

    /// Inline display
    #[must_use]
    pub const fn display(&self) -> DisplayStyle {
        self.display
    }

    /// Display as the browser would compute it for a `.panel` element
    #[must_use]
    pub const fn computed_display(&self) -> DisplayStyle {
        if self.display.is_shown() {
            DisplayStyle::Block
        } else {
            DisplayStyle::None
        }
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let classes = self.classes.join(" ");
            let _ = write!(
                out,
                " class=\"{}\"",
                html_escape::encode_double_quoted_attribute(&classes)
            );
        }
        if let Some(display) = self.display.as_css() {
            let _ = write!(out, " style=\"display: {display}\"");
        }
        let _ = write!(out, ">{}</{}>", self.inner_html, self.tag);
    }
}

/// Flat list of sibling elements in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelDocument {
    elements: Vec<Element>,
}

impl PanelDocument {
    /// Append an element and return its id
    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    /// Element by id
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// Ids of every element, in document order
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        (0..self.elements.len()).map(ElementId)
    }

    /// Serialize the elements back to back
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for element in &self.elements {
            element.write_html(&mut html);
            html.push('\n');
        }
        html
    }
}

/// A header bound to the panel it controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionBinding {
    /// Element classed `accordion`
    pub header: ElementId,
    /// The element right after it
    pub panel: ElementId,
}

/// Accordion bindings of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    bindings: Vec<AccordionBinding>,
}

impl Accordion {
    /// Bind every accordion header to its following sibling
    ///
    /// A header that is the last element, or is followed by another header,
    /// has no panel. It is skipped with a warning and the remaining headers
    /// are still bound.
    #[must_use]
    pub fn bind(document: &PanelDocument) -> Self {
        let mut bindings = Vec::new();

        for header in document.ids() {
            if !document
                .element(header)
                .is_some_and(|e| e.has_class(HEADER_CLASS))
            {
                continue;
            }

            let panel = ElementId(header.0 + 1);
            match document.element(panel) {
                Some(next) if !next.has_class(HEADER_CLASS) => {
                    bindings.push(AccordionBinding { header, panel });
                }
                Some(_) => {
                    warn!(
                        header = header.index(),
                        "Accordion header is followed by another header, skipping"
                    );
                }
                None => {
                    warn!(
                        header = header.index(),
                        "Accordion header has no following panel, skipping"
                    );
                }
            }
        }

        Self { bindings }
    }

    /// Bound header/panel pairs in document order
    #[must_use]
    pub fn bindings(&self) -> &[AccordionBinding] {
        &self.bindings
    }

    /// Handle a click on `header`
    ///
    /// Toggles the header's `active` class and flips its panel between
    /// `block` and `none`. Returns the panel's new display, or `None` when
    /// `header` is not a bound header.
    pub fn click(&self, document: &mut PanelDocument, header: ElementId) -> Option<DisplayStyle> {
        let binding = self.bindings.iter().find(|b| b.header == header)?;

        document
            .element_mut(binding.header)?
            .toggle_class(ACTIVE_CLASS);

        let panel = document.element_mut(binding.panel)?;
        panel.display = if panel.display.is_shown() {
            DisplayStyle::None
        } else {
            DisplayStyle::Block
        };
        Some(panel.display)
    }
}
