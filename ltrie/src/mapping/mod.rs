pub mod direct_mapping;
