// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui components structured for MVU-style updates.

pub mod categories;
pub mod ingredients;
pub mod rating;
pub mod star;

pub use star::star_button;
