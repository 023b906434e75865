// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - The two photo sections with selectable cards
//! - [`welcome`] - Landing state before a share link is loaded
//! - [`loading`] - Session fetch in progress
//! - [`error_screen`] - Session fetch failure with a hint to retry
//!
//! # Chrome
//!
//! - [`link_bar`] - Share link input at the top of the window
//! - [`download_bar`] - Selection summary, status line, and download action
//! - [`completion_modal`] - End-of-run dialog with saved counts
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`notifications`] - Toast notification system for user feedback

pub mod completion_modal;
pub mod design_tokens;
pub mod download_bar;
pub mod error_screen;
pub mod gallery;
pub mod link_bar;
pub mod loading;
pub mod notifications;
pub mod styles;
pub mod welcome;
pub mod widgets;
