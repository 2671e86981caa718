//! Custom GraphQL scalars.
//!
//! Input scalars are checked by the same function whether the value arrives
//! as a variable or as a literal in the query document.
mod coordinates;
mod datum;
mod forward_sortation_area;
mod postal_code;

pub use coordinates::LatLng;
pub use coordinates::Latitude;
pub use coordinates::Longitude;
pub use datum::Datum;
pub use forward_sortation_area::ForwardSortationArea;
pub use postal_code::PostalCode;
