pub mod catalog;
pub mod consts;
pub mod gui;
pub mod physics;
