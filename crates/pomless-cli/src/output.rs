//! Rendering of models and parent references.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;

use pomless_core::{Model, Parent};

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render_model(model: &Model, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(model)?),
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "modelVersion: {}", model.model_version);
            if let Some(parent) = &model.parent {
                let _ = writeln!(out, "parent:       {parent}");
            }
            let _ = writeln!(out, "artifactId:   {}", model.artifact_id);
            let _ = writeln!(out, "version:      {}", model.version);
            let _ = writeln!(out, "packaging:    {}", model.packaging);
            if let Some(name) = &model.name {
                let _ = writeln!(out, "name:         {name}");
            }
            for (key, value) in &model.properties {
                let _ = writeln!(out, "property:     {key}={value}");
            }
            if let Some(location) = model.location("") {
                let _ = writeln!(
                    out,
                    "source:       {} ({})",
                    location.source.location, location.source.model_id
                );
            }
            Ok(out.trim_end().to_string())
        }
    }
}

pub fn render_parent(parent: &Parent, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(parent)?),
        OutputFormat::Text => Ok(parent.to_string()),
    }
}
