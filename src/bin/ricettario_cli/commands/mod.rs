// ABOUTME: Re-exports command modules for the ricettario CLI
// ABOUTME: Provides recipe browsing, nutrition analysis and match probe commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod probe;
pub mod recipes;

use ricettario::errors::{AppError, AppResult};
use ricettario::formatters::{format_report, ReportFormat, TextReport};
use serde::Serialize;

/// Render and print a report to stdout
pub fn print_report<T>(data: &T, format: &str) -> AppResult<()>
where
    T: Serialize + TextReport + ?Sized,
{
    let output = format_report(data, ReportFormat::from_str_param(format))
        .map_err(|e| AppError::internal(e.to_string()).with_source(e))?;
    println!("{}", output.data);
    Ok(())
}
