pub mod astar;

pub use astar::{find_path, path_cost};
