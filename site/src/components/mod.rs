//! Leptos UI components for the homepage.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomepageDocument (ssr only)
//! └── HomepageLayout
//!     └── ResponsiveContainer
//!         ├── DesktopContainer   (width >= breakpoint)
//!         │   ├── pin-on-scroll menu
//!         │   └── HomepageHeading
//!         ├── MobileContainer    (width < breakpoint)
//!         │   ├── off-canvas menu
//!         │   └── HomepageHeading
//!         └── children (shared by both presentations)
//!             ├── CompanySection
//!             ├── StatisticsSection
//!             ├── ServiceCards
//!             ├── ApproachSection
//!             ├── PledgeGrid
//!             ├── ContactSection
//!             └── SiteFooter
//! ```
//!
//! Components read [`crate::viewport::Viewport`] and
//! [`crate::config::SiteConfig`] from context, falling back to a headless
//! viewport and default config when none is provided.

mod company;
mod contact;
mod desktop;
mod document;
mod footer;
mod heading;
mod homepage;
mod icons;
mod mobile;
mod responsive;
mod services;
mod statistics;
mod testimonials;

pub use company::CompanySection;
pub use contact::ContactSection;
pub use desktop::DesktopContainer;
pub use document::HomepageDocument;
pub use footer::SiteFooter;
pub use heading::{HeadingScale, HomepageHeading};
pub use homepage::HomepageLayout;
pub use icons::*;
pub use mobile::MobileContainer;
pub use responsive::ResponsiveContainer;
pub use services::ServiceCards;
pub use statistics::StatisticsSection;
pub use testimonials::{ApproachSection, PledgeGrid};
