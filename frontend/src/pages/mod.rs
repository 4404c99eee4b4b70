//! Routed pages.
//!
//! - [`DashboardPage`] - `/`
//! - [`UploadPage`] - `/upload`
//! - [`ResultsPage`] - `/analysis-results?taskId=`
//! - [`SearchPage`] - `/search?q=`

mod dashboard;
mod results;
mod search;
mod upload;

pub use dashboard::*;
pub use results::*;
pub use search::*;
pub use upload::*;
