//! Rust client for the vignettes backend API
//!
//! The backend serves category-keyed "vignette" records (brand, score, trend,
//! insight count) over HTTP with bearer-token authentication.
//!
//! # Example
//!
//! ```no_run
//! use vignettes_client::VignettesClient;
//!
//! # async fn example() -> Result<(), vignettes_client::VignettesError> {
//! let client = VignettesClient::new("https://backend.example.com", "secret-token");
//!
//! // Raw JSON body, exactly as the backend returned it
//! let body = client.fetch_vignettes("WINE").await?;
//! println!("{}", body);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /vignettes?category={category}` - Vignettes for one category

mod client;
mod error;
mod types;

pub use client::VignettesClient;
pub use error::{Result, VignettesError};
pub use types::{Trend, VignetteData, VignettesResponse};
