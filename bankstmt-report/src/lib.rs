//! bankstmt-report: conversion pipeline and CSV/JSON export of parsed statements

pub mod export;
pub mod pipeline;

pub use export::{
    default_export_file_name, summary_headers, write_csv, write_export, write_json, ExportFormat,
};
pub use pipeline::{ConvertOptions, Converter, DEFAULT_MAX_INPUT_BYTES};
