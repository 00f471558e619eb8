/// Business policies for Package URL synthesis
mod purl_strategy;

pub use purl_strategy::{PurlOptions, PurlStrategy, DEFAULT_DOWNLOAD_URL_PARAM};
