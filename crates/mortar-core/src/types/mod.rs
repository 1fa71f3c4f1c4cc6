//! Content records exchanged with the remote content service.

pub mod contact;
pub mod enquiry;
pub mod profile;
pub mod project;

pub use contact::{
    ContactRecord, PartialContact, PartialSocial, SocialChannel, SocialLinks, whatsapp_chat_link,
};
pub use enquiry::{EnquiryField, EnquiryRecord};
pub use profile::{
    AboutPayload, OrganizationInfo, OwnerInfo, PartialOrganization, PartialOwner, PartialStats,
    ProfileRecord, ProjectStats,
};
pub use project::{
    Category, CategoryFilter, DecodedProjects, ProjectRecord, ProjectsPayload, decode_projects,
};
