// ABOUTME: Pure string-format validators consumed by the pool and the UI

pub mod id_card;
pub mod phone;
