//! Global CSS styles for Starfolio.
//!
//! Deep-space palette; the behaviour layer only toggles classes
//! (`active`, `scroll-reveal`, `revealed`) and a few inline styles.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --space-deep: #0a0e27;
  --space-panel: rgba(255, 255, 255, 0.04);
  --space-border: rgba(255, 255, 255, 0.08);

  --indigo: #6366f1;
  --violet: #a855f7;
  --indigo-glow: rgba(99, 102, 241, 0.35);

  --text-primary: #f1f5f9;
  --text-secondary: rgba(241, 245, 249, 0.7);
  --text-muted: rgba(241, 245, 249, 0.5);

  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 700ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--space-deep);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
}

a {
  color: var(--indigo);
  text-decoration: none;
}

.space-background {
  position: fixed;
  inset: 0;
  z-index: -1;
  background:
    radial-gradient(ellipse at 20% 20%, rgba(99, 102, 241, 0.15), transparent 60%),
    radial-gradient(ellipse at 80% 70%, rgba(168, 85, 247, 0.12), transparent 60%);
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  backdrop-filter: blur(12px);
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.nav-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 1rem 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text-primary);
}

.nav-links {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  position: relative;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--text-primary);
}

.nav-link.active::after {
  content: '';
  position: absolute;
  left: 0;
  right: 0;
  bottom: -4px;
  height: 2px;
  background: linear-gradient(90deg, var(--indigo), var(--violet));
}

.mobile-menu-toggle {
  display: none;
  background: none;
  border: none;
  color: var(--text-primary);
  cursor: pointer;
}

/* === Sections === */
section {
  max-width: 1200px;
  margin: 0 auto;
  padding: 6rem 2rem;
}

.section-title h2 {
  font-size: 2.25rem;
  margin-bottom: 2rem;
  background: linear-gradient(90deg, var(--indigo), var(--violet));
  -webkit-background-clip: text;
  color: transparent;
}

.glass-card,
.timeline-item,
.expertise-card,
.project-card {
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-radius: 16px;
  padding: 1.5rem;
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
}

.hero-content > * {
  opacity: 0;
  animation: fade-up 0.8s ease forwards;
}

.hero-greeting { color: var(--indigo); font-weight: 600; }
.hero-title { font-size: 3.5rem; font-weight: 800; line-height: 1.1; }
.hero-subtitle { color: var(--text-secondary); font-size: 1.25rem; margin-top: 1rem; }

@keyframes fade-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Scroll Reveal === */
.scroll-reveal {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.scroll-reveal.revealed {
  opacity: 1;
  transform: translateY(0);
}

/* === Timeline === */
.timeline {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  border-left: 2px solid var(--space-border);
  padding-left: 1.5rem;
}

.timeline-period { color: var(--indigo); font-size: 0.875rem; }
.timeline-company { color: var(--text-muted); }

/* === Projects === */
.project-grid,
.expertise-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1.5rem;
}

.project-card {
  transition: transform var(--transition-fast), box-shadow var(--transition-normal),
    opacity var(--transition-reveal);
  will-change: transform;
}

.project-card:hover {
  box-shadow: 0 20px 40px var(--indigo-glow);
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin: 1rem 0;
}

.tag {
  font-size: 0.75rem;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  background: rgba(99, 102, 241, 0.15);
  color: var(--indigo);
}

.expertise-card ul { list-style: none; color: var(--text-secondary); }

/* === Testimonial Carousel === */
.testimonial-carousel {
  position: relative;
  overflow: hidden;
  padding: 0 3rem 3rem;
}

.carousel-viewport {
  overflow: hidden;
}

.carousel-track {
  display: flex;
  transition: transform 0.5s ease;
}

.testimonial-slide {
  flex: 0 0 100%;
  padding: 2rem;
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-radius: 16px;
  opacity: 0.4;
  transition: opacity var(--transition-normal);
}

.testimonial-slide.active {
  opacity: 1;
}

.testimonial-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1rem;
}

.testimonial-avatar {
  width: 56px;
  height: 56px;
  border-radius: 50%;
  object-fit: cover;
}

.testimonial-role { color: var(--text-muted); font-size: 0.875rem; }
.testimonial-text { color: var(--text-secondary); font-style: italic; }

.testimonial-toggle {
  margin-top: 0.5rem;
  background: none;
  border: none;
  color: var(--indigo);
  cursor: pointer;
}

.testimonial-link {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  margin-top: 1rem;
  font-size: 0.875rem;
}

.carousel-btn {
  position: absolute;
  top: 40%;
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-radius: 50%;
  width: 40px;
  height: 40px;
  color: var(--text-primary);
  cursor: pointer;
}

.carousel-prev { left: 0; }
.carousel-next { right: 0; }

.carousel-dots {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1.5rem;
}

.carousel-dot {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  border: none;
  background: var(--space-border);
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.carousel-dot.active {
  background: var(--indigo);
  transform: scale(1.3);
}

.footer {
  text-align: center;
  padding: 2rem;
  color: var(--text-muted);
}

/* === Accessibility === */
*:focus-visible {
  outline: 2px solid var(--indigo);
  outline-offset: 2px;
}

@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}

/* === Mobile === */
@media (max-width: 768px) {
  .mobile-menu-toggle { display: block; }

  .nav-links {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1.5rem 2rem;
    background: rgba(10, 14, 39, 0.98);
  }

  .nav-links.active { display: flex; }

  .hero-title { font-size: 2.25rem; }
}
"#;
