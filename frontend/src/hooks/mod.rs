pub mod use_click_outside;
pub mod use_dashboard_data;
