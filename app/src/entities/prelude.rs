pub use super::ev_registered_yearly::Entity as EvRegisteredYearly;
pub use super::region_map::Entity as RegionMap;
pub use super::stations::Entity as Stations;
