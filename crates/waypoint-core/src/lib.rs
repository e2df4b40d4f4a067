//! Fragment-based client-side routing
//!
//! A [`RouteTable`] maps paths to [`ViewId`]s. A [`NavigationController`]
//! tracks the active view as the location changes, and [`start`] wires both to
//! a [`Host`] document.

mod bootstrap;
mod config;
mod controller;
mod error;
pub mod location;
mod route_table;
mod view;

pub use bootstrap::{Application, Host, start};
pub use config::RouterConfig;
pub use controller::{Navigation, NavigationController, NavigationState, ViewRenderer};
pub use error::{NotFound, Result, RouterError};
pub use route_table::{RouteEntry, RouteTable};
pub use view::ViewId;
