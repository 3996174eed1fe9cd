//! Link resolution against the output tree.
//!
//! # Relationship with [`LinkKind`](crate::core::LinkKind)
//!
//! - [`LinkKind`](crate::core::LinkKind): **Syntactic** classification (no context needed)
//! - [`Resolver::resolve`]: **Semantic** resolution (route table + file system)
//!
//! # Module Structure
//!
//! - [`route`]: alias -> canonical route table
//! - [`resolve`]: path normalization and existence checks
//! - [`placeholder`]: required sections and the placeholder document
//! - [`report`]: broken/fixed link accumulator
//!
//! # Usage
//!
//! ```ignore
//! let routes = RouteTable::from_config(&config);
//! let required = RequiredPaths::from_config(&config);
//! let resolver = Resolver::new(config.root(), &routes, &required, &config.build);
//!
//! let mut state = ResolveState::default();
//! let url = resolver.resolve("/safety/pct/", "index.html", &mut state);
//! assert_eq!(url, "safety/pct/index.html");
//! ```

mod placeholder;
mod report;
mod resolve;
mod route;

pub use placeholder::{Placeholder, RequiredPaths};
pub use report::LinkReport;
pub use resolve::{ResolveState, Resolver};
pub use route::{DEFAULT_ROUTES, RouteTable};
