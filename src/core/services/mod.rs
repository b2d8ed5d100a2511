pub mod config_resolver;
