pub mod scheme_parser;
