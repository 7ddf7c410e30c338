pub mod prelude;

pub mod ev_registered_yearly;
pub mod region_map;
pub mod stations;
