mod app;
mod app_input;
mod app_panels;
mod config;
mod sections_about;
mod sections_certificates;
mod sections_contact;
mod sections_hero;
mod sections_projects;
mod sections_services;
mod sections_skills;

pub use app::Folio;
pub use config::{load_cfg, save_cfg, FolioConfig};
