//! End-to-end tests over realistic script files

mod checker;
mod ui_scripts;
