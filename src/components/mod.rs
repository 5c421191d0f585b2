//! UI Components
//!
//! Page sections and the pieces they share.

mod animated_section;
mod text_effects;
mod floating_shapes;
mod navbar;
mod sidebar;
mod hero_section;
mod about_section;
mod project_card;
mod project_modal;
mod masonry_gallery;
mod category_showcase;
mod projects_section;
mod tasks_section;
mod contact_section;

pub use animated_section::{AnimatedSection, RevealDirection};
pub use text_effects::{TextReveal, TypewriterText};
pub use floating_shapes::FloatingShapes;
pub use navbar::StickyNavbar;
pub use sidebar::Sidebar;
pub use hero_section::HeroSection;
pub use about_section::AboutSection;
pub use project_card::{CategoryBadge, ProjectCard, ProjectMedia};
pub use project_modal::ProjectModal;
pub use masonry_gallery::MasonryGallery;
pub use category_showcase::CategoryShowcase;
pub use projects_section::ProjectsSection;
pub use tasks_section::TasksSection;
pub use contact_section::ContactSection;
