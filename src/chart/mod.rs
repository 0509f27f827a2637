pub mod svg;
pub mod terminal;

pub use svg::SvgRenderer;
pub use terminal::TerminalRenderer;

use crate::error::{Result, StarChartError};
use crate::types::RepositoryDescriptor;
use serde_json::Value;
use tracing::debug;

pub const CHART_TITLE: &str = "GitHub Repo Star Count";
pub const X_AXIS_LABEL: &str = "Repo Name";
pub const Y_AXIS_LABEL: &str = "Star Count";

pub const NAME_FIELD: &str = "name";
pub const STARS_FIELD: &str = "stargazers_count";

/// One bar: a repository name and its star count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub height: u64,
}

/// Star counts keyed by repository name, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            bars,
        }
    }

    pub fn from_value(input: &Value) -> Result<Self> {
        Ok(Self::new(project(input)?))
    }

    pub fn from_descriptors(descriptors: &[RepositoryDescriptor]) -> Result<Self> {
        Ok(Self::new(project_descriptors(descriptors)?))
    }

    pub fn max_height(&self) -> u64 {
        self.bars.iter().map(|bar| bar.height).max().unwrap_or(0)
    }
}

/// A backend that can draw a [`BarChart`]. Rendering is synchronous.
pub trait ChartRenderer {
    fn render(&self, chart: &BarChart) -> Result<()>;
}

/// Projects JSON into bars.
///
/// An object is a single repository descriptor and yields exactly one bar.
/// An array is a sequence of descriptors and yields one bar per element, in
/// order. Missing or `null` fields are a [`StarChartError::MissingFieldError`];
/// nothing is defaulted to zero.
pub fn project(input: &Value) -> Result<Vec<Bar>> {
    match input {
        Value::Object(descriptor) => Ok(vec![project_row(descriptor, 0)?]),
        Value::Array(rows) => {
            if rows.is_empty() {
                return Err(StarChartError::EmptyData);
            }
            rows.iter()
                .enumerate()
                .map(|(index, row)| match row {
                    Value::Object(descriptor) => project_row(descriptor, index),
                    other => Err(StarChartError::InvalidField {
                        field: "<repository>".to_string(),
                        index,
                        reason: format!("expected an object, got {}", json_type(other)),
                    }),
                })
                .collect()
        }
        other => Err(StarChartError::InvalidField {
            field: "<input>".to_string(),
            index: 0,
            reason: format!("expected an object or array, got {}", json_type(other)),
        }),
    }
}

pub fn project_descriptors(descriptors: &[RepositoryDescriptor]) -> Result<Vec<Bar>> {
    if descriptors.is_empty() {
        return Err(StarChartError::EmptyData);
    }
    descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| project_row(descriptor, index))
        .collect()
}

fn project_row(descriptor: &RepositoryDescriptor, index: usize) -> Result<Bar> {
    let label = required(descriptor, NAME_FIELD, index)?
        .as_str()
        .ok_or_else(|| invalid(NAME_FIELD, index, "expected a string"))?
        .to_string();

    let height = required(descriptor, STARS_FIELD, index)?
        .as_u64()
        .ok_or_else(|| invalid(STARS_FIELD, index, "expected a non-negative integer"))?;

    Ok(Bar { label, height })
}

fn required<'a>(
    descriptor: &'a RepositoryDescriptor,
    field: &str,
    index: usize,
) -> Result<&'a Value> {
    match descriptor.get(field) {
        Some(Value::Null) | None => Err(StarChartError::MissingFieldError {
            field: field.to_string(),
            index,
        }),
        Some(value) => Ok(value),
    }
}

fn invalid(field: &str, index: usize, reason: &str) -> StarChartError {
    StarChartError::InvalidField {
        field: field.to_string(),
        index,
        reason: reason.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Renders the star count of one repository.
pub fn visualize(descriptor: &RepositoryDescriptor, renderer: &dyn ChartRenderer) -> Result<()> {
    visualize_all(std::slice::from_ref(descriptor), renderer)
}

/// Renders one bar per repository.
pub fn visualize_all(
    descriptors: &[RepositoryDescriptor],
    renderer: &dyn ChartRenderer,
) -> Result<()> {
    let chart = BarChart::from_descriptors(descriptors)?;
    debug!(bars = chart.bars.len(), max = chart.max_height(), "Rendering star chart");
    renderer.render(&chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn one_descriptor_is_one_bar() {
        let bars = project(&json!({"name": "repoA", "stargazers_count": 42})).unwrap();
        assert_eq!(
            bars,
            vec![Bar {
                label: "repoA".to_string(),
                height: 42
            }]
        );
    }

    #[test]
    fn extra_fields_do_not_add_rows() {
        let input = json!({
            "name": "repoA",
            "full_name": "owner/repoA",
            "stargazers_count": 7,
            "owner": {"login": "owner"},
            "topics": ["a", "b", "c"]
        });
        assert_eq!(project(&input).unwrap().len(), 1);
    }

    #[test]
    fn null_counts_as_missing() {
        let err = project(&json!({"name": "repoA", "stargazers_count": null})).unwrap_err();
        assert!(matches!(
            err,
            StarChartError::MissingFieldError { ref field, index: 0 } if field == STARS_FIELD
        ));
    }

    #[test]
    fn scalar_input_is_rejected() {
        let err = project(&json!(42)).unwrap_err();
        assert!(matches!(err, StarChartError::InvalidField { .. }));
    }

    #[test]
    fn max_height_of_empty_chart_is_zero() {
        assert_eq!(BarChart::new(Vec::new()).max_height(), 0);
    }
}
