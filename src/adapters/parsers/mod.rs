pub mod yaml_parser;
