#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod action;
pub mod config;
pub mod event;
pub mod handler;
pub mod hid_state;
pub mod host;
pub mod keycode;
pub mod keymap;
pub mod layout;
pub mod layout_macro;
