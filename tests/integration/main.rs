//! Integration tests for slidesync

mod helpers;

mod cli_test;
mod composer_test;
mod config_test;
mod search_test;
