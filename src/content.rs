//! Hard-coded page content.

use starfolio_core::Testimonial;
use starfolio_ui::NavLink;

pub const SITE_TITLE: &str = "Shivam - Portfolio";
pub const BRAND: &str = "Shivam";

/// Timeline entry in the experience section.
#[derive(Clone, PartialEq, Debug)]
pub struct Experience {
    pub id: &'static str,
    pub period: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub summary: &'static str,
}

/// Project card.
#[derive(Clone, PartialEq, Debug)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub url: &'static str,
}

/// Expertise card.
#[derive(Clone, PartialEq, Debug)]
pub struct Expertise {
    pub id: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("#home", "Home"),
        NavLink::new("#about", "About"),
        NavLink::new("#experience", "Experience"),
        NavLink::new("#projects", "Projects"),
        NavLink::new("#expertise", "Expertise"),
        NavLink::new("#testimonials", "Testimonials"),
        NavLink::new("#contact", "Contact"),
    ]
}

pub fn experience() -> Vec<Experience> {
    vec![
        Experience {
            id: "timeline-platform",
            period: "2022 - Present",
            title: "Senior Software Engineer",
            company: "Nebula Systems",
            summary: "Leads the streaming ingestion platform; cut p99 latency by 60% after moving the hot path to an async pipeline.",
        },
        Experience {
            id: "timeline-infra",
            period: "2019 - 2022",
            title: "Software Engineer",
            company: "Orbital Labs",
            summary: "Built the internal deployment tooling and the observability stack used by forty service teams.",
        },
        Experience {
            id: "timeline-intern",
            period: "2018",
            title: "Engineering Intern",
            company: "Comet Analytics",
            summary: "Prototyped a columnar query cache that later shipped as the default storage tier.",
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "project-telemetry",
            name: "Telemetry Lens",
            description: "Real-time dashboard for high-cardinality metrics with sub-second drill down.",
            tags: &["Rust", "WebAssembly", "ClickHouse"],
            url: "https://github.com/",
        },
        Project {
            id: "project-ledger",
            name: "Quiet Ledger",
            description: "Local-first budgeting app that syncs between devices without a server.",
            tags: &["CRDT", "Tauri", "SQLite"],
            url: "https://github.com/",
        },
        Project {
            id: "project-orbit",
            name: "Orbit CLI",
            description: "Single binary for spinning up reproducible dev environments from a manifest.",
            tags: &["CLI", "Containers", "Nix"],
            url: "https://github.com/",
        },
    ]
}

pub fn expertise() -> Vec<Expertise> {
    vec![
        Expertise {
            id: "expertise-backend",
            title: "Backend Systems",
            skills: &["Rust", "Go", "PostgreSQL", "Kafka"],
        },
        Expertise {
            id: "expertise-cloud",
            title: "Cloud & Infra",
            skills: &["Kubernetes", "Terraform", "AWS"],
        },
        Expertise {
            id: "expertise-frontend",
            title: "Frontend",
            skills: &["TypeScript", "React", "Dioxus"],
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Priya Raman".to_string(),
            role: "Engineering Manager".to_string(),
            company: "Nebula Systems".to_string(),
            image_url: "https://i.pravatar.cc/120?img=47".to_string(),
            text: "Shivam took an ingestion pipeline nobody wanted to touch and turned it into the most reliable part of our stack. He writes the design doc, builds the thing, and then teaches the rest of the team how it works. Every on-call rotation since has been quieter because of it.".to_string(),
            link_url: "https://www.linkedin.com/".to_string(),
        },
        Testimonial {
            name: "Marcus Oyelaran".to_string(),
            role: "Staff Engineer".to_string(),
            company: "Orbital Labs".to_string(),
            image_url: "https://i.pravatar.cc/120?img=12".to_string(),
            text: "Pragmatic, fast, and careful with the details that matter.".to_string(),
            link_url: "https://www.linkedin.com/".to_string(),
        },
        Testimonial {
            name: "Elena Sokolova".to_string(),
            role: "Product Lead".to_string(),
            company: "Comet Analytics".to_string(),
            image_url: "https://i.pravatar.cc/120?img=32".to_string(),
            text: "He asks the questions that keep a project honest. Our query cache went from a whiteboard sketch to production in one quarter, and the documentation he left behind is still what new hires read first.".to_string(),
            link_url: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_link_targets_a_section_id() {
        let sections = ["home", "about", "experience", "projects", "expertise", "testimonials", "contact"];
        for link in nav_links() {
            let id = link.href.strip_prefix('#').unwrap();
            assert!(sections.contains(&id), "dangling link {}", link.href);
        }
    }

    #[test]
    fn reveal_ids_are_unique() {
        let mut ids: Vec<&str> = experience().iter().map(|e| e.id).collect();
        ids.extend(projects().iter().map(|p| p.id));
        ids.extend(expertise().iter().map(|e| e.id));
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn testimonials_present() {
        assert!(!testimonials().is_empty());
    }
}
