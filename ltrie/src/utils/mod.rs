pub mod bitset;
pub mod fillvector;
