//! Dioxus RSX components for the SwimSafe map.

mod error_display;
mod filter_sidebar;
mod fountain_info;
mod header;
pub(crate) mod info_panel;
mod loading_spinner;
mod location_info;
mod map_container;
mod planner_dialog;
mod status_badge;
mod toilet_info;

pub use error_display::ErrorDisplay;
pub use filter_sidebar::FilterSidebar;
pub use fountain_info::FountainInfo;
pub use header::SiteHeader;
pub use info_panel::InfoPanel;
pub use loading_spinner::LoadingSpinner;
pub use location_info::LocationInfo;
pub use map_container::MapContainer;
pub use planner_dialog::PlannerDialog;
pub use status_badge::StatusBadge;
pub use toilet_info::ToiletInfo;
