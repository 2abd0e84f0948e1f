//! Testimonial data and the pure slide renderer.

use serde::{Deserialize, Serialize};

/// One testimonial, supplied at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub image_url: String,
    pub text: String,
    pub link_url: String,
}

/// Display-ready content of a single slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub index: usize,
    pub name: String,
    pub role: String,
    pub company: String,
    pub image_url: String,
    pub image_alt: String,
    pub quote: String,
    pub link_url: String,
}

impl SlideView {
    /// "Role at Company", or whichever half is present.
    pub fn subtitle(&self) -> String {
        match (self.role.is_empty(), self.company.is_empty()) {
            (false, false) => format!("{} at {}", self.role, self.company),
            (false, true) => self.role.clone(),
            (true, false) => self.company.clone(),
            (true, true) => String::new(),
        }
    }

    pub fn has_link(&self) -> bool {
        !self.link_url.is_empty()
    }

    /// DOM id for the quote element.
    pub fn quote_id(&self) -> String {
        format!("testimonial-quote-{}", self.index)
    }
}

/// Build one slide per testimonial, in order.
pub fn render(testimonials: &[Testimonial]) -> Vec<SlideView> {
    testimonials
        .iter()
        .enumerate()
        .map(|(index, t)| SlideView {
            index,
            name: t.name.clone(),
            role: t.role.clone(),
            company: t.company.clone(),
            image_url: t.image_url.clone(),
            image_alt: format!("Photo of {}", t.name),
            quote: t.text.trim().to_string(),
            link_url: t.link_url.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(name: &str) -> Testimonial {
        Testimonial {
            name: name.to_string(),
            role: "Engineering Manager".to_string(),
            company: "Acme".to_string(),
            image_url: format!("/img/{}.jpg", name.to_lowercase()),
            text: "  Great to work with.  ".to_string(),
            link_url: "https://example.com".to_string(),
        }
    }

    #[test]
    fn render_preserves_order_and_indices() {
        let slides = render(&[testimonial("Ada"), testimonial("Grace")]);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].name, "Ada");
        assert_eq!(slides[1].index, 1);
        assert_eq!(slides[1].image_alt, "Photo of Grace");
        assert_eq!(slides[0].quote, "Great to work with.");
    }

    #[test]
    fn render_empty() {
        assert!(render(&[]).is_empty());
    }

    #[test]
    fn subtitle_variants() {
        let mut slide = render(&[testimonial("Ada")]).remove(0);
        assert_eq!(slide.subtitle(), "Engineering Manager at Acme");
        slide.company.clear();
        assert_eq!(slide.subtitle(), "Engineering Manager");
        slide.role.clear();
        assert_eq!(slide.subtitle(), "");
    }
}
