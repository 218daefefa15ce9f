//! CSV loading for engine and gearbox catalogs.
//!
//! Headers are matched case-insensitively against a list of synonyms so that
//! spreadsheets exported from different sources load without editing.

use std::collections::{BTreeMap, HashSet};
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Error, Result};

use super::engine::EngineRecord;
use super::gearbox::{parse_ratio_list, GearboxRecord};

const ENGINE_COLUMNS: &[(&str, &[&str])] = &[
    ("model", &["engine_model", "model", "name", "engine"]),
    ("manufacturer", &["manufacturer", "make", "brand"]),
    ("power_kw", &["power_kw", "rated_power_kw", "kw"]),
    ("rated_rpm", &["rated_rpm", "rpm"]),
    ("dry_weight_kg", &["dry_weight_kg", "weight_kg", "weight"]),
    ("fuel", &["fuel", "fuel_type"]),
    ("length_mm", &["length_mm", "length"]),
    ("width_mm", &["width_mm", "width"]),
    ("height_mm", &["height_mm", "height"]),
    ("price_usd", &["price_usd_est", "price_usd", "price"]),
];

const GEARBOX_COLUMNS: &[(&str, &[&str])] = &[
    ("model", &["name", "model", "gearbox"]),
    ("ratios", &["ratio_options", "ratios", "gear_ratios"]),
    (
        "max_input_kw",
        &["max_input_kw_est", "max_input_kw", "max_kw"],
    ),
    ("max_input_rpm", &["max_input_rpm", "max_rpm"]),
    ("price_usd", &["price_usd_est", "price_usd", "price"]),
];

/// Load engine records from CSV, preserving row order.
pub fn load_engines<R: Read>(reader: R) -> Result<Vec<EngineRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    let columns = Columns::resolve(&mut csv_reader, "engine", ENGINE_COLUMNS)?;

    let mut engines = Vec::new();
    let mut seen = HashSet::new();

    for (offset, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| Error::CatalogValidation {
            message: e.to_string(),
        })?;
        // header is line 1
        let row = Row {
            record: &record,
            columns: &columns,
            line: offset + 2,
        };

        let model = row.text("model");
        let engine = EngineRecord {
            power_kw: row.number("power_kw", &model)?,
            rated_rpm: row.number("rated_rpm", &model)?,
            dry_weight_kg: row.number("dry_weight_kg", &model)?,
            length_mm: row.number("length_mm", &model)?,
            width_mm: row.number("width_mm", &model)?,
            height_mm: row.number("height_mm", &model)?,
            price_usd: row.number("price_usd", &model)?,
            manufacturer: row.text("manufacturer"),
            fuel: row.text("fuel"),
            model,
        };
        engine.validate()?;

        if !seen.insert(normalize_name(&engine.model)) {
            return Err(Error::DuplicateModel {
                kind: "engine",
                name: normalize_name(&engine.model),
            });
        }
        engines.push(engine);
    }

    tracing::debug!("loaded {} engine records", engines.len());
    Ok(engines)
}

/// Load gearbox records from CSV, preserving row order.
pub fn load_gearboxes<R: Read>(reader: R) -> Result<Vec<GearboxRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    let columns = Columns::resolve(&mut csv_reader, "gearbox", GEARBOX_COLUMNS)?;

    let mut gearboxes = Vec::new();
    let mut seen = HashSet::new();

    for (offset, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| Error::CatalogValidation {
            message: e.to_string(),
        })?;
        let row = Row {
            record: &record,
            columns: &columns,
            line: offset + 2,
        };

        let model = row.text("model");
        let ratios = parse_ratio_list(&row.text("ratios")).map_err(|err| {
            Error::CatalogValidation {
                message: format!("gearbox '{}' at row {}: {}", model, row.line, err),
            }
        })?;
        let gearbox = GearboxRecord {
            ratios,
            max_input_kw: row.number("max_input_kw", &model)?,
            max_input_rpm: row.number("max_input_rpm", &model)?,
            price_usd: row.number("price_usd", &model)?,
            model,
        };
        gearbox.validate()?;

        if !seen.insert(normalize_name(&gearbox.model)) {
            return Err(Error::DuplicateModel {
                kind: "gearbox",
                name: normalize_name(&gearbox.model),
            });
        }
        gearboxes.push(gearbox);
    }

    tracing::debug!("loaded {} gearbox records", gearboxes.len());
    Ok(gearboxes)
}

/// Canonical field name -> column position.
struct Columns {
    index: BTreeMap<&'static str, usize>,
}

impl Columns {
    fn resolve<R: Read>(
        csv_reader: &mut csv::Reader<R>,
        table: &str,
        synonyms: &[(&'static str, &[&str])],
    ) -> Result<Self> {
        let headers = csv_reader
            .headers()
            .map_err(|err| Error::CatalogValidation {
                message: format!("failed to read {table} catalog headers: {err}"),
            })?
            .clone();

        let normalized_headers: Vec<String> = headers.iter().map(normalize_header).collect();

        let mut index = BTreeMap::new();
        for (canon, alts) in synonyms {
            'outer: for alt in *alts {
                let alt_n = normalize_header(alt);
                for (i, h) in normalized_headers.iter().enumerate() {
                    if h == &alt_n {
                        index.insert(*canon, i);
                        break 'outer;
                    }
                }
            }
        }

        let missing: Vec<&str> = synonyms
            .iter()
            .map(|(canon, _)| *canon)
            .filter(|canon| !index.contains_key(canon))
            .collect();

        if !missing.is_empty() {
            return Err(Error::CatalogValidation {
                message: format!(
                    "{table} catalog missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers
                        .iter()
                        .map(|h| h.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            });
        }

        Ok(Self { index })
    }
}

struct Row<'a> {
    record: &'a StringRecord,
    columns: &'a Columns,
    line: usize,
}

impl Row<'_> {
    fn text(&self, field: &str) -> String {
        self.columns
            .index
            .get(field)
            .and_then(|&i| self.record.get(i))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    fn number(&self, field: &str, model: &str) -> Result<f64> {
        let raw = self.text(field);
        if raw.is_empty() {
            return Err(Error::CatalogValidation {
                message: format!("missing {field} for '{model}' at row {}", self.line),
            });
        }
        raw.replace('_', "")
            .parse::<f64>()
            .map_err(|e| Error::CatalogValidation {
                message: format!("invalid {field} for '{model}' at row {}: {e}", self.line),
            })
    }
}

/// Lowercase and strip everything but ASCII alphanumerics and `_`.
fn normalize_header(s: &str) -> String {
    s.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Normalize a model name for case-insensitive duplicate detection.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn engine_headers_match_synonyms() {
        let csv = "Model,Make,KW,RPM,Weight,Fuel,Length,Width,Height,Price\n\
                   D6-480,Volvo Penta,353,3500,900,diesel,1290,750,900,75000\n";
        let engines = load_engines(Cursor::new(csv)).expect("synonym headers load");
        assert_eq!(engines[0].model, "D6-480");
        assert_eq!(engines[0].manufacturer, "Volvo Penta");
        assert_eq!(engines[0].power_kw, 353.0);
    }

    #[test]
    fn missing_columns_are_listed() {
        let csv = "model,manufacturer,rated_rpm\nA,M,2000\n";
        let err = load_engines(Cursor::new(csv)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("power_kw"), "{message}");
        assert!(message.contains("price_usd"), "{message}");
    }

    #[test]
    fn gearbox_ratio_column_is_split() {
        let csv = "name,ratio_options,max_input_kw_est,max_input_rpm,price_usd_est\n\
                   ZF 45A,1.5;2.0;2.5,600,3500,18000\n";
        let gearboxes = load_gearboxes(Cursor::new(csv)).unwrap();
        assert_eq!(gearboxes[0].ratios, vec![1.5, 2.0, 2.5]);
        assert_eq!(gearboxes[0].model, "ZF 45A");
    }

    #[test]
    fn numeric_underscores_are_accepted() {
        let csv = "engine_model,manufacturer,power_kw,rated_rpm,dry_weight_kg,fuel,length_mm,width_mm,height_mm,price_usd_est\n\
                   12V2000,MTU,1200,2450,2300,diesel,2300,1100,1400,300_000\n";
        let engines = load_engines(Cursor::new(csv)).unwrap();
        assert_eq!(engines[0].price_usd, 300_000.0);
    }

    #[test]
    fn reports_row_of_bad_number() {
        let csv = "engine_model,manufacturer,power_kw,rated_rpm,dry_weight_kg,fuel,length_mm,width_mm,height_mm,price_usd_est\n\
                   A,M,100,2000,500,diesel,1000,500,500,1000\n\
                   B,M,lots,2000,500,diesel,1000,500,500,1000\n";
        let err = load_engines(Cursor::new(csv)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("power_kw"), "{message}");
        assert!(message.contains("row 3"), "{message}");
    }
}
