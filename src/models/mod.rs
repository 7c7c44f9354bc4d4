// Module exports for models

pub mod event;
