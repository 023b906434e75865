// SPDX-License-Identifier: MPL-2.0
//! `tripshare` is a desktop picker and bulk downloader for shared trip
//! photos, built with the Iced GUI framework.
//!
//! It loads the photo session behind a share link, shows the solo and group
//! galleries for selection, and downloads the picked photos sequentially
//! into a folder of the user's choice.

#![doc(html_root_url = "https://docs.rs/tripshare/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod net;
pub mod session;
pub mod ui;
