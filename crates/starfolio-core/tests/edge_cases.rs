//! Edge case and boundary condition tests
//!
//! These tests drive the behaviour layer through the public API the way
//! the page host does, with time supplied by a ManualClock.

use std::time::Duration;

use starfolio_core::{
    Carousel, ManualClock, NavbarAppearance, PageLayout, PortfolioConfig, RevealSet,
    ScrollTracker, SectionGeometry, Testimonial,
};

fn testimonial(name: &str, text: &str) -> Testimonial {
    Testimonial {
        name: name.to_string(),
        role: "Staff Engineer".to_string(),
        company: "Lumen".to_string(),
        image_url: "/img/avatar.png".to_string(),
        text: text.to_string(),
        link_url: "https://www.linkedin.com/".to_string(),
    }
}

// ============================================================================
// Carousel
// ============================================================================

/// Empty data must not register timers or fault on modulo
#[test]
fn test_empty_carousel_registers_no_timers() {
    let clock = ManualClock::new();
    let mut carousel = Carousel::new(&[], &PortfolioConfig::default(), clock.clone());

    assert_eq!(carousel.timers_registered(), 0);
    assert!(carousel.slides().is_empty());
    assert_eq!(carousel.go_to_slide(-1), 0);
    assert_eq!(carousel.go_to_slide(isize::MAX), 0);
    carousel.pointer_enter();
    carousel.pointer_leave();
    assert_eq!(carousel.timers_registered(), 0);
}

/// Two slides: -1 wraps to 1, 2 wraps to 0
#[test]
fn test_two_slide_wrapping() {
    let testimonials = vec![testimonial("A", "one"), testimonial("B", "two")];
    let mut carousel = Carousel::new(&testimonials, &PortfolioConfig::default(), ManualClock::new());

    assert_eq!(carousel.go_to_slide(-1), 1);
    assert_eq!(carousel.go_to_slide(2), 0);
}

/// Extreme targets do not overflow
#[test]
fn test_extreme_targets() {
    let testimonials = vec![testimonial("A", "one"), testimonial("B", "two"), testimonial("C", "three")];
    let mut carousel = Carousel::new(&testimonials, &PortfolioConfig::default(), ManualClock::new());

    assert_eq!(carousel.go_to_slide(isize::MIN), (isize::MIN).rem_euclid(3) as usize);
    assert_eq!(carousel.go_to_slide(isize::MAX), (isize::MAX).rem_euclid(3) as usize);
}

/// Hover before the first tick holds the slide until hover ends and a fresh interval passes
#[test]
fn test_hover_holds_slide() {
    let clock = ManualClock::new();
    let testimonials = vec![testimonial("A", "one"), testimonial("B", "two")];
    let mut carousel = Carousel::new(&testimonials, &PortfolioConfig::default(), clock.clone());

    clock.advance_ms(4000);
    carousel.pointer_enter();
    clock.advance_ms(2000);
    carousel.tick();
    assert_eq!(carousel.current_index(), 0);

    carousel.pointer_leave();
    assert_eq!(carousel.until_next_tick(), Some(Duration::from_millis(5000)));
    clock.advance_ms(5000);
    carousel.tick();
    assert_eq!(carousel.current_index(), 1);
}

/// A late host wake-up (suspended window) advances a single slide
#[test]
fn test_late_tick_advances_once() {
    let clock = ManualClock::new();
    let testimonials = vec![testimonial("A", "1"), testimonial("B", "2"), testimonial("C", "3")];
    let mut carousel = Carousel::new(&testimonials, &PortfolioConfig::default(), clock.clone());

    clock.advance_ms(60_500);
    assert!(carousel.tick());
    assert_eq!(carousel.current_index(), 1);

    // Next deadline is a full interval after the late tick.
    assert_eq!(carousel.until_next_tick(), Some(Duration::from_millis(5000)));
    assert!(!carousel.tick());
}

/// Custom intervals from config are honoured
#[test]
fn test_configured_interval() {
    let clock = ManualClock::new();
    let config = PortfolioConfig::from_json(r#"{ "auto_advance_ms": 1000 }"#).unwrap();
    let testimonials = vec![testimonial("A", "1"), testimonial("B", "2")];
    let mut carousel = Carousel::new(&testimonials, &config, clock.clone());

    clock.advance_ms(1000);
    assert!(carousel.tick());
}

/// Expanding slide 0 leaves slide 1 and the active dot alone
#[test]
fn test_clamp_toggle_is_local() {
    let testimonials = vec![testimonial("A", "long"), testimonial("B", "long")];
    let mut carousel = Carousel::new(&testimonials, &PortfolioConfig::default(), ManualClock::new());
    carousel.go_to_slide(1);

    carousel.clamps_mut().set_overflow(0, true);
    carousel.clamps_mut().set_overflow(1, true);
    assert_eq!(carousel.clamps_mut().toggle(0), Some(true));

    assert_eq!(carousel.current_index(), 1);
    assert!(carousel.dots()[1].active);
    assert!(!carousel.clamps().get(1).expanded);
    assert_eq!(carousel.slides()[1], starfolio_core::render(&testimonials)[1]);
}

// ============================================================================
// Scroll tracking
// ============================================================================

fn page() -> PageLayout {
    PageLayout {
        navbar_height: Some(70.0),
        sections: vec![
            SectionGeometry { id: "home".into(), offset_top: 0.0, height: 800.0 },
            SectionGeometry { id: "experience".into(), offset_top: 800.0, height: 1500.0 },
            SectionGeometry { id: "contact".into(), offset_top: 2300.0, height: 600.0 },
        ],
        links: vec!["#home".into(), "#experience".into(), "#contact".into()],
    }
}

/// Two scroll events inside the window run once; the third after it runs again
#[test]
fn test_scroll_throttle_window() {
    let clock = ManualClock::new();
    let mut tracker = ScrollTracker::new(&page(), &PortfolioConfig::default(), clock.clone());

    assert!(tracker.on_scroll(10.0).highlight_ran);
    clock.advance_ms(99);
    assert!(!tracker.on_scroll(700.0).highlight_ran);
    assert_eq!(tracker.active_link(), Some("#home"));

    clock.advance_ms(1);
    let update = tracker.on_scroll(700.0);
    assert!(update.highlight_ran);
    assert_eq!(tracker.active_link(), Some("#experience"));
    assert_eq!(update.navbar, Some(NavbarAppearance::Solid));
}

/// No sections at all: nothing to highlight, nothing breaks
#[test]
fn test_page_without_sections() {
    let layout = PageLayout {
        navbar_height: Some(70.0),
        ..Default::default()
    };
    let mut tracker = ScrollTracker::new(&layout, &PortfolioConfig::default(), ManualClock::new());

    let update = tracker.on_scroll(300.0);
    assert!(!update.active_changed);
    assert!(tracker.active_link().is_none());
    assert_eq!(update.navbar, Some(NavbarAppearance::Solid));
}

/// Empty layout degrades completely
#[test]
fn test_empty_layout() {
    let mut tracker = ScrollTracker::new(&PageLayout::default(), &PortfolioConfig::default(), ManualClock::new());
    let update = tracker.on_scroll(300.0);
    assert!(update.navbar.is_none());
    assert_eq!(tracker.navbar_appearance(), NavbarAppearance::Translucent);
}

// ============================================================================
// Reveal
// ============================================================================

/// Reduced motion reveals everything at startup
#[test]
fn test_reduced_motion_startup() {
    let mut set = RevealSet::new(0.1);
    for id in ["hero-title", "project-1", "timeline-1"] {
        set.observe(id);
    }
    assert_eq!(set.enable_reduced_motion(), 3);
    assert!(set.targets().iter().all(|t| t.revealed));
}
