pub mod sharded_map;

pub use sharded_map::ShardedMap;
