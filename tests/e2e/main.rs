mod common;

mod config;
mod pages;
