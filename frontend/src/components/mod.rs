pub mod account_summary;
pub mod dashboard;
pub mod generated_links;
pub mod header;
pub mod link_generator;
pub mod profile_menu;
pub mod toast;
