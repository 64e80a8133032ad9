//! Integration tests for pf-demo

mod cli_test;
mod config_test;
mod helpers;
mod player_test;
