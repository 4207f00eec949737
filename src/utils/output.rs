use crate::cert::{Certificate, CertificateField};
use crate::utils::errors::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Trait for types that can provide column values
pub trait GetColumnValue {
    fn get_column_value(&self, column: &CertificateField) -> String;
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Output format configuration
#[derive(Clone, Debug)]
pub struct OutputFormat {
    pub raw: bool,
    pub kind: OutputKind,
}

/// Build table data from items and columns
pub fn build_table_data<T>(items: &[T], columns: &[CertificateField]) -> Vec<Vec<String>>
where
    T: GetColumnValue,
{
    items
        .iter()
        .map(|item| columns.iter().map(|col| item.get_column_value(col)).collect())
        .collect()
}

impl OutputFormat {
    pub fn new(raw: bool, kind: OutputKind) -> Self {
        Self { raw, kind }
    }

    /// Render a certificate without a trailing newline.
    ///
    /// `raw` and `details` only affect text output; JSON and YAML always
    /// carry every field.
    pub fn render_certificate(&self, certificate: &Certificate, details: bool) -> Result<String> {
        match self.kind {
            OutputKind::Json => Ok(serde_json::to_string_pretty(certificate)?),
            OutputKind::Yaml => Ok(serde_yaml::to_string(certificate)?.trim_end().to_string()),
            OutputKind::Text if details => {
                let pairs: Vec<(&str, String)> = CertificateField::ALL
                    .iter()
                    .map(|field| (field.header(), certificate.get_column_value(field)))
                    .collect();
                Ok(self.format_key_value(&pairs).join("\n"))
            }
            OutputKind::Text if self.raw => {
                let data = build_table_data(
                    std::slice::from_ref(certificate),
                    &CertificateField::ALL,
                );
                Ok(self.format_table(&data).join("\n"))
            }
            OutputKind::Text => Ok(certificate.to_string()),
        }
    }

    /// Format tabular data - either raw (tab-separated) or column-aligned
    pub fn format_table<T>(&self, data: &[Vec<T>]) -> Vec<String>
    where
        T: AsRef<str>,
    {
        if self.raw {
            data.iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.as_ref())
                        .collect::<Vec<_>>()
                        .join("\t")
                })
                .collect()
        } else {
            Self::format_aligned_table(data)
        }
    }

    /// Format key-value pairs as a two-column table
    pub fn format_key_value<K, V>(&self, pairs: &[(K, V)]) -> Vec<String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let data: Vec<Vec<&str>> = pairs
            .iter()
            .map(|(k, v)| vec![k.as_ref(), v.as_ref()])
            .collect();

        self.format_table(&data)
    }

    fn format_aligned_table<T>(data: &[Vec<T>]) -> Vec<String>
    where
        T: AsRef<str>,
    {
        if data.is_empty() {
            return Vec::new();
        }

        // Calculate column widths
        let num_cols = data[0].len();
        let mut col_widths = vec![0; num_cols];

        for row in data {
            for (i, cell) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(cell.as_ref().chars().count());
            }
        }

        data.iter()
            .map(|row| {
                let formatted_cells: Vec<String> = row
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        if i == row.len() - 1 {
                            // Last column - no padding needed
                            cell.as_ref().to_string()
                        } else {
                            format!("{:<width$}", cell.as_ref(), width = col_widths[i])
                        }
                    })
                    .collect();

                formatted_cells.join("  ")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cert::{CertificateIssuer, FixedClock};

    fn sample() -> Certificate {
        CertificateIssuer::with_clock(FixedClock(1_770_768_000_000)).issue(
            "John Doe",
            "Advanced Python Masterclass",
            "2026-02-11",
        )
    }

    #[test]
    fn test_raw_table() {
        let format = OutputFormat::new(true, OutputKind::Text);
        let data = vec![
            vec!["short", "medium", "very_long_column"],
            vec!["a", "bb", "ccc"],
        ];

        assert_eq!(
            format.format_table(&data),
            vec!["short\tmedium\tvery_long_column", "a\tbb\tccc"]
        );
    }

    #[test]
    fn test_aligned_table() {
        let format = OutputFormat::new(false, OutputKind::Text);
        let data = vec![
            vec!["short", "medium", "very_long_column"],
            vec!["a", "bb", "ccc"],
        ];

        assert_eq!(
            format.format_table(&data),
            vec!["short  medium  very_long_column", "a      bb      ccc"]
        );
    }

    #[test]
    fn test_empty_table() {
        let format = OutputFormat::new(false, OutputKind::Text);
        let data: Vec<Vec<&str>> = Vec::new();
        assert!(format.format_table(&data).is_empty());
    }

    #[test]
    fn test_render_text_summary() {
        let cert = sample();
        let format = OutputFormat::new(false, OutputKind::Text);
        assert_eq!(
            format.render_certificate(&cert, false).unwrap(),
            format!(
                "Certificate #{} for John Doe - Advanced Python Masterclass",
                cert.id()
            )
        );
    }

    #[test]
    fn test_render_text_details() {
        let cert = sample();
        let format = OutputFormat::new(false, OutputKind::Text);
        let rendered = format.render_certificate(&cert, true).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], format!("ID       {}", cert.id()));
        assert_eq!(lines[1], "Student  John Doe");
        assert_eq!(lines[4], "Issuer   CourseCity Academy");
    }

    #[test]
    fn test_render_raw() {
        let cert = sample();
        let format = OutputFormat::new(true, OutputKind::Text);
        assert_eq!(
            format.render_certificate(&cert, false).unwrap(),
            format!(
                "{}\tJohn Doe\tAdvanced Python Masterclass\t2026-02-11\tCourseCity Academy",
                cert.id()
            )
        );
    }

    #[test]
    fn test_render_json() {
        let cert = sample();
        let format = OutputFormat::new(false, OutputKind::Json);
        let rendered = format.render_certificate(&cert, false).unwrap();
        let parsed: Certificate = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, cert);
    }

    #[test]
    fn test_render_yaml() {
        let cert = sample();
        let format = OutputFormat::new(true, OutputKind::Yaml);
        let rendered = format.render_certificate(&cert, true).unwrap();
        assert!(rendered.contains("issuer: CourseCity Academy"));
        assert!(rendered.contains(&format!("id: {}", cert.id())));
        assert!(!rendered.ends_with('\n'));
    }
}
