//! Domain types.
//!
//! Plain data exchanged between the services and the ports. Nothing in
//! here performs I/O.

mod form;
mod icon;
mod request;
mod state;
mod style;

pub use form::StudioForm;
pub use icon::GeneratedIcon;
pub use request::{GenerationPayload, GenerationRequest, parse_color_list};
pub use state::{GenerationSnapshot, RequestState};
pub use style::{Style, StyleCatalog, StyleId};
