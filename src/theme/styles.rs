//! Global CSS styles for DevBlog.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary: #4F46E5;
  --primary-dark: #4338CA;
  --primary-glow: rgba(79, 70, 229, 0.3);

  --background: #F8FAFC;
  --surface: #FFFFFF;
  --border: #E2E8F0;

  --text-primary: #1E293B;
  --text-secondary: #475569;
  --text-muted: #94A3B8;

  --font-sans: 'Inter', 'Segoe UI', Roboto, sans-serif;

  --transition-fast: 0.2s ease;
  --transition-normal: 0.3s ease;
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
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--text-primary);
  line-height: 1.6;
  opacity: 0;
  transition: opacity 0.3s ease;
}

a {
  color: var(--primary);
  text-decoration: none;
}

.container {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: 70px;
  z-index: 1000;
  backdrop-filter: blur(10px);
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 100%;
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary);
  cursor: pointer;
}

.nav-menu {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.hamburger {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.hamburger .bar {
  width: 25px;
  height: 3px;
  background: var(--text-primary);
  transition: all var(--transition-normal);
}

.hamburger.active .bar:nth-child(1) {
  transform: translateY(8px) rotate(45deg);
}

.hamburger.active .bar:nth-child(2) {
  opacity: 0;
}

.hamburger.active .bar:nth-child(3) {
  transform: translateY(-8px) rotate(-45deg);
}

@media (max-width: 768px) {
  .hamburger {
    display: flex;
  }

  .nav-menu {
    position: fixed;
    top: 70px;
    left: -100%;
    flex-direction: column;
    width: 100%;
    padding: 2rem 0;
    text-align: center;
    background: var(--surface);
    box-shadow: 0 10px 27px rgba(0, 0, 0, 0.05);
    transition: left var(--transition-normal);
  }

  .nav-menu.active {
    left: 0;
  }
}

/* === Sections === */
main {
  padding-top: 70px;
}

section {
  padding: 5rem 0;
}

.hero {
  min-height: 80vh;
  display: flex;
  align-items: center;
  background: linear-gradient(135deg, #EEF2FF 0%, #F8FAFC 100%);
}

.hero-title {
  font-size: 3rem;
  font-weight: 800;
}

.hero-subtitle {
  margin-top: 1rem;
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.btn {
  display: inline-block;
  margin-top: 2rem;
  padding: 0.75rem 1.75rem;
  border: none;
  border-radius: 8px;
  font-weight: 600;
  cursor: pointer;
  transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.btn:hover {
  transform: translateY(-2px);
}

.btn-primary {
  background: var(--primary);
  color: #FFFFFF;
}

.btn-secondary {
  background: var(--border);
  color: var(--text-primary);
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: 2rem;
  text-align: center;
}

.section-header {
  text-align: center;
  margin-bottom: 2rem;
}

.section-subtitle {
  color: var(--text-secondary);
}

/* === Reveal Animations === */
.reveal {
  opacity: 0;
  transform: translateY(20px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.fade-in {
  opacity: 1;
  transform: translateY(0);
}

.timeline-item {
  border-left: 3px solid var(--primary);
  padding: 0 0 1.5rem 1.5rem;
}

.timeline-period {
  color: var(--primary);
  font-weight: 600;
}

/* === Skill Bars === */
.skill-item {
  margin-bottom: 1.25rem;
}

.skill-info {
  display: flex;
  justify-content: space-between;
  font-weight: 500;
  margin-bottom: 0.4rem;
}

.skill-bar {
  height: 10px;
  border-radius: 5px;
  background: var(--border);
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  width: 0;
  border-radius: 5px;
  background: linear-gradient(90deg, var(--primary), #818CF8);
  transition: width 1.2s ease;
}

/* === QR Widget === */
.qr-wrapper {
  display: inline-block;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.qr-wrapper:hover {
  transform: scale(1.05);
}

.qr-code,
.qr-fallback {
  width: 150px;
  height: 150px;
  border-radius: 8px;
  border: 2px solid rgba(255, 255, 255, 0.3);
  background: white;
  padding: 5px;
}

.qr-caption {
  margin-top: 0.5rem;
  color: var(--text-secondary);
  font-size: 0.9rem;
}

/* === Blog Toolbar === */
.search-container {
  margin-bottom: 2rem;
  text-align: center;
}

.search-input {
  padding: 12px 20px;
  border: 2px solid var(--border);
  border-radius: 25px;
  width: 300px;
  max-width: 100%;
  font-size: 16px;
  outline: none;
  transition: border-color var(--transition-normal);
}

.search-input:focus {
  border-color: var(--primary);
}

.blog-toolbar {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 2rem;
}

.blog-filters {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.filter-btn {
  padding: 0.5rem 1.25rem;
  border: 2px solid var(--border);
  border-radius: 20px;
  background: var(--surface);
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.filter-btn:hover,
.filter-btn.active {
  border-color: var(--primary);
  background: var(--primary);
  color: white;
}

.blog-controls {
  display: flex;
  gap: 0.75rem;
  align-items: center;
}

.sort-select {
  padding: 0.5rem 1rem;
  border: 2px solid var(--border);
  border-radius: 8px;
  background: var(--surface);
}

.view-toggle {
  display: flex;
  gap: 0.25rem;
}

.view-btn {
  width: 38px;
  height: 38px;
  border: 2px solid var(--border);
  border-radius: 8px;
  background: var(--surface);
  cursor: pointer;
}

.view-btn.active {
  border-color: var(--primary);
  color: var(--primary);
}

/* === Blog Cards === */
.blog-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 2rem;
}

.blog-grid.list-view {
  grid-template-columns: 1fr;
}

.blog-card {
  background: var(--surface);
  border-radius: 12px;
  padding: 1.5rem;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05);
  cursor: pointer;
  transform: translate3d(0, 0, 0);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.blog-card.lifted {
  transform: translate3d(0, -5px, 0);
  box-shadow: 0 10px 24px rgba(0, 0, 0, 0.08);
}

.blog-card:focus {
  outline: 2px solid var(--primary);
  outline-offset: 2px;
}

.blog-card.hidden {
  display: none;
}

.blog-card.entering {
  animation: fadeIn 0.3s ease-in;
}

.blog-category {
  display: inline-block;
  padding: 0.2rem 0.75rem;
  border-radius: 12px;
  background: #EEF2FF;
  color: var(--primary);
  font-size: 0.8rem;
  font-weight: 600;
}

.blog-title {
  margin: 0.75rem 0 0.5rem;
  font-size: 1.25rem;
}

.blog-excerpt {
  color: var(--text-secondary);
}

.blog-meta {
  display: flex;
  justify-content: space-between;
  margin-top: 1rem;
  color: var(--text-muted);
  font-size: 0.875rem;
}

.blog-link {
  display: inline-block;
  margin-top: 1rem;
  font-weight: 600;
}

.blog-empty {
  text-align: center;
  color: var(--text-muted);
  padding: 3rem 0;
}

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Post Detail === */
.post-detail {
  max-width: 760px;
  margin: 0 auto;
}

.post-title {
  margin: 1rem 0;
  font-size: 2.25rem;
}

.post-excerpt {
  margin-top: 1.5rem;
  font-size: 1.1rem;
  color: var(--text-secondary);
}

.post-detail .blog-meta {
  justify-content: flex-start;
  gap: 1.5rem;
}

/* === Back To Top === */
.back-to-top {
  position: fixed;
  bottom: 30px;
  right: 30px;
  width: 50px;
  height: 50px;
  background: var(--primary);
  color: white;
  border: none;
  border-radius: 50%;
  cursor: pointer;
  font-size: 20px;
  transition: all var(--transition-normal);
  z-index: 1000;
  box-shadow: 0 4px 12px var(--primary-glow);
}

/* === Footer === */
.footer {
  padding: 2rem 0;
  text-align: center;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
}
"#;
