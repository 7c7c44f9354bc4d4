// Service module exports

pub mod store;
