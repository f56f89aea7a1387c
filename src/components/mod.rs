//! UI Components
//!
//! Reusable Leptos components.

mod dashboard_layout;
mod delete_confirm_button;
mod kpi_card;
pub mod navigation;
mod series_bars;
mod sortable;

pub use dashboard_layout::DashboardLayout;
pub use delete_confirm_button::DeleteConfirmButton;
pub use kpi_card::KpiCardView;
pub use navigation::Navigation;
pub use series_bars::SeriesBars;
pub use sortable::{indexed, DropSlot, SortableRow};
