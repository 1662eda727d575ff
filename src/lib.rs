//! Hazard Intake - Conversational intake engine for municipal hazard reports
//!
//! This crate implements a multi-turn intake flow that collects a reporter's
//! ID number, a hazard category, and a free-text description through a
//! scripted sequence of validated prompts, persisting partial state between
//! turns and confirming with a case number once everything is collected.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
