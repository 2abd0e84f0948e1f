//! Carousel position state machine and auto-advance.

use std::time::Duration;

use crate::clock::Clock;
use crate::config::PortfolioConfig;
use crate::timer::RepeatingTimer;

use super::clamp::ClampStates;
use super::slides::{render, SlideView, Testimonial};

/// Position and auto-advance flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub auto_advance_active: bool,
}

/// One indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotView {
    pub index: usize,
    pub active: bool,
}

impl DotView {
    pub fn class(&self) -> &'static str {
        if self.active {
            "carousel-dot active"
        } else {
            "carousel-dot"
        }
    }
}

/// Cyclic testimonial carousel.
///
/// With no testimonials the carousel is inert: nothing is rendered, no
/// timer is armed and every operation is a no-op.
#[derive(Debug)]
pub struct Carousel<C: Clock> {
    clock: C,
    slides: Vec<SlideView>,
    state: CarouselState,
    timer: RepeatingTimer,
    clamps: ClampStates,
}

impl<C: Clock> Carousel<C> {
    pub fn new(testimonials: &[Testimonial], config: &PortfolioConfig, clock: C) -> Self {
        let slides = render(testimonials);
        let mut timer = RepeatingTimer::new(config.auto_advance());
        let auto_advance_active = !slides.is_empty();
        if auto_advance_active {
            timer.start(clock.now());
        }
        tracing::debug!(slides = slides.len(), "Carousel built");

        Self {
            clamps: ClampStates::new(slides.len(), config.clamp_lines),
            clock,
            slides,
            state: CarouselState {
                current_index: 0,
                auto_advance_active,
            },
            timer,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Select `target` modulo the slide count. Negative targets wrap
    /// from the end. Returns the new index.
    pub fn go_to_slide(&mut self, target: isize) -> usize {
        if self.slides.is_empty() {
            return 0;
        }
        let len = self.slides.len() as isize;
        let index = target.rem_euclid(len) as usize;
        if index != self.state.current_index {
            tracing::debug!(from = self.state.current_index, to = index, "Slide changed");
        }
        self.state.current_index = index;
        index
    }

    pub fn next(&mut self) -> usize {
        self.go_to_slide(self.state.current_index as isize + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to_slide(self.state.current_index as isize - 1)
    }

    /// Pause auto-advance while the pointer is over the carousel.
    pub fn pointer_enter(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.state.auto_advance_active = false;
        self.timer.cancel();
    }

    /// Resume auto-advance with a fresh full interval.
    pub fn pointer_leave(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.state.auto_advance_active = true;
        self.timer.start(self.clock.now());
    }

    /// Advance one slide if the auto-advance deadline has passed. A long
    /// stall still advances only once. Returns whether it advanced.
    pub fn tick(&mut self) -> bool {
        if !self.state.auto_advance_active || !self.timer.poll(self.clock.now()) {
            return false;
        }
        self.next();
        true
    }

    /// How long the host may sleep before the next `tick` is due.
    pub fn until_next_tick(&self) -> Option<Duration> {
        let deadline = self.timer.deadline()?;
        Some(deadline.saturating_sub(self.clock.now()))
    }

    /// Number of live timers this carousel holds.
    pub fn timers_registered(&self) -> usize {
        usize::from(self.timer.is_armed())
    }

    pub fn slides(&self) -> &[SlideView] {
        &self.slides
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.slides.is_empty() && index == self.state.current_index
    }

    pub fn dots(&self) -> Vec<DotView> {
        (0..self.slides.len())
            .map(|index| DotView {
                index,
                active: self.is_active(index),
            })
            .collect()
    }

    /// Transform for the slide track; slides are laid out contiguously at
    /// full track width.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.state.current_index * 100)
    }

    pub fn clamps(&self) -> &ClampStates {
        &self.clamps
    }

    pub fn clamps_mut(&mut self) -> &mut ClampStates {
        &mut self.clamps
    }
}
