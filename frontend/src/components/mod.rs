//! UI components of the FraudShield dashboard.
//!
//! # Layout Components
//! - [`Sidebar`] - Navigation with active route highlighting, a drawer on narrow screens
//! - [`Header`] - Search bar, system status and dropdown menus
//! - [`ToastContainer`] - Notifications raised through the notifier
//!
//! # Widgets
//! - [`StatsCard`], [`ProgressBar`], [`StatusBadge`], [`FraudGauge`]
//! - [`FilterPanel`] - Filter dropdown over a shared selection
//! - [`SearchBar`] - Debounced search input
//! - [`ExportButton`] - CSV / JSON download of dashboard stats
//!
//! # Feature Components
//! - [`DropZone`] - Document selection with drag & drop
//! - [`ScanningModal`] - Scripted scan timeline
//! - [`LiveFeed`] - Recent activity, polled
//! - [`DashboardChart`] - Weekly uploads vs fraud
//! - [`AnalysisPanel`] - Verdict of one scan

mod sidebar;
mod header;
mod toast_container;
mod stats_card;
mod progress;
mod status_badge;
mod fraud_gauge;
mod filter_panel;
mod search_bar;
mod drop_zone;
mod scanning_modal;
mod live_feed;
mod dashboard_chart;
mod analysis_panel;
mod export_button;

pub use sidebar::*;
pub use header::*;
pub use toast_container::*;
pub use stats_card::*;
pub use progress::*;
pub use status_badge::*;
pub use fraud_gauge::*;
pub use filter_panel::*;
pub use search_bar::*;
pub use drop_zone::*;
pub use scanning_modal::*;
pub use live_feed::*;
pub use dashboard_chart::*;
pub use analysis_panel::*;
pub use export_button::*;
