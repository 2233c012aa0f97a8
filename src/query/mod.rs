mod location;
mod params;

pub use location::Location;
pub use params::QueryParams;
