//! Mortar Site: page loaders and the enquiry pipeline.
//!
//! # Modules
//!
//! - [`about`]: about page
//! - [`contact`]: contact section, social and chat links
//! - [`projects`]: project listing and category menu
//! - [`home`]: landing page statistics
//! - [`page`]: concurrent load of a full page
//! - [`enquiry`]: contact form submission state machine
//! - [`context`]: defaults and asset resolution shared by the loaders

#![doc = include_str!("../README.md")]

pub mod about;
pub mod contact;
pub mod context;
pub mod enquiry;
pub mod home;
pub mod page;
pub mod projects;

pub use about::AboutPage;
pub use contact::ContactSection;
pub use context::{ContentOrigin, SiteContext};
pub use enquiry::{EnquiryForm, Notice, NoticeKind, SubmissionState};
pub use home::{HomeStats, StatLabel, load_stats};
pub use page::PageContent;
pub use projects::{MenuEntry, ProjectCard, ProjectsPage, ProjectsView};
