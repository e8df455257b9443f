//! datagsm-openapi
//!
//! Rust SDK for the DataGSM OpenAPI service: student, club, project, and
//! NEIS (meal / academic schedule) data.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use datagsm_openapi::{DataGsmClient, api::StudentQuery};
//!
//! # async fn run() -> datagsm_openapi::Result<()> {
//! let client = DataGsmClient::new("your-api-key")?;
//!
//! let first_graders = client
//!     .students()
//!     .get_students(&StudentQuery::new().grade(1))
//!     .await?;
//! println!("first graders: {}", first_graders.total_elements);
//!
//! let meals = client.neis().get_meals(&Default::default()).await?;
//! for meal in meals {
//!     println!("{}: {:?}", meal.meal_date, meal.meal_menu);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error handling
//!
//! Every call returns [`Result`]. Server-side failures carry their HTTP
//! status and the service's error message:
//!
//! ```rust,no_run
//! use datagsm_openapi::{ApiErrorKind, DataGsmClient, Error};
//!
//! # async fn run() -> datagsm_openapi::Result<()> {
//! let client = DataGsmClient::new("your-api-key")?;
//! match client.students().get_student(404).await {
//!     Ok(Some(student)) => println!("{}", student.name),
//!     Ok(None) => println!("no such student"),
//!     Err(Error::Api { kind: ApiErrorKind::Unauthorized, .. }) => {
//!         eprintln!("check the API key");
//!     }
//!     Err(other) => return Err(other),
//! }
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod api;
mod client;
mod codec;
mod error;
pub mod models;
mod transport;

pub use client::{DataGsmClient, DataGsmClientBuilder, API_KEY_ENV, DEFAULT_BASE_URL};
pub use error::{ApiErrorKind, Error, Result};
