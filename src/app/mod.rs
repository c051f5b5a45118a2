//! Host application: owns the component's props, routes input to it, and
//! plays the parent that receives forwarded messages.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
