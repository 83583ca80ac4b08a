#![doc = include_str!("../README.md")]

mod args;
mod builder;
pub mod config;
mod ctx;
mod error;
pub mod frameworks;
mod helpers;
mod html;
mod node;
mod printer;
mod scope;

pub use crate::{
    args::{Args, Attributes},
    builder::{ButtonFlags, UiBuilder},
    error::*,
    frameworks::{Bootstrap5, Bulma},
    html::HtmlBuilder,
    scope::Scope,
};
