//! Download a single YouTube video, or only its audio track, to a local file.
//!
//! The pipeline in [`app::run`] fetches metadata through a [`resolver::MediaResolver`],
//! picks one stream with [`selector::select_stream`], names the output with
//! [`sanitize::output_filename`] and hands the transfer to [`downloader::Downloader`].

pub mod app;
pub mod cli;
pub mod config;
pub mod downloader;
pub mod error;
pub mod models;
pub mod progress;
pub mod resolver;
pub mod sanitize;
pub mod selector;

pub use error::{Error, Result};
