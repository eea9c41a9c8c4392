pub mod fuzzy_matcher;
