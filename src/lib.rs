// src/lib.rs
//
// Calculatrice Zome : arithmétique exacte dans les corps quadratiques
// Q(φ) et Q(√2), groupe icosaédrique, série dorée, et son interface egui.

pub mod app;
pub mod noyau;
