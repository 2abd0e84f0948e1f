//! Measured page geometry.

use serde::{Deserialize, Serialize};

/// Position of one `section[id]` element in document coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    pub id: String,
    /// Distance from the document top (`offsetTop`)
    pub offset_top: f64,
    /// Rendered height (`offsetHeight`)
    pub height: f64,
}

/// Snapshot of everything the scroll tracker measures from the page.
///
/// Produced by the host on load and resize. A `None` navbar height means
/// the navbar element was not found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub navbar_height: Option<f64>,
    #[serde(default)]
    pub sections: Vec<SectionGeometry>,
    /// `href` of every nav link, in document order (e.g. `"#about"`)
    #[serde(default)]
    pub links: Vec<String>,
}

impl PageLayout {
    /// The link whose `href` targets `section_id`, if any.
    pub fn link_for(&self, section_id: &str) -> Option<&str> {
        self.links
            .iter()
            .map(String::as_str)
            .find(|href| href.strip_prefix('#') == Some(section_id))
    }

    /// Section targeted by a link `href`.
    pub fn section_for(&self, href: &str) -> Option<&SectionGeometry> {
        let id = href.strip_prefix('#')?;
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Scroll offset that brings a section's top flush under the navbar.
pub fn scroll_target(section_top: f64, navbar_height: f64) -> f64 {
    section_top - navbar_height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout {
            navbar_height: Some(80.0),
            sections: vec![
                SectionGeometry { id: "home".into(), offset_top: 0.0, height: 900.0 },
                SectionGeometry { id: "about".into(), offset_top: 900.0, height: 700.0 },
            ],
            links: vec!["#home".into(), "#about".into(), "#blog".into()],
        }
    }

    #[test]
    fn test_link_lookup() {
        let layout = layout();
        assert_eq!(layout.link_for("about"), Some("#about"));
        assert_eq!(layout.link_for("contact"), None);
    }

    #[test]
    fn test_section_lookup() {
        let layout = layout();
        assert_eq!(layout.section_for("#about").map(|s| s.offset_top), Some(900.0));
        assert!(layout.section_for("#blog").is_none());
        assert!(layout.section_for("about").is_none());
    }

    #[test]
    fn test_scroll_target_subtracts_navbar() {
        assert_eq!(scroll_target(900.0, 80.0), 820.0);
    }

    #[test]
    fn test_layout_deserializes_without_navbar() {
        let layout: PageLayout = serde_json::from_str(r#"{ "navbar_height": null }"#).unwrap();
        assert!(layout.navbar_height.is_none());
        assert!(layout.sections.is_empty());
    }
}
