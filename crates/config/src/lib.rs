//! Catalog models and loaders for planet bodies and observer sites.

use std::fs::File;
use std::path::{Path, PathBuf};

use geodesy_core::units::km_to_mi;
use serde::Deserialize;
use thiserror::Error;

/// A spherical body distances can be measured on.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub radius_km: f64,
    /// Imperial radius; derived from `radius_km` when omitted.
    #[serde(default)]
    pub radius_mi: Option<f64>,
}

impl BodyConfig {
    pub fn radius_mi(&self) -> f64 {
        self.radius_mi.unwrap_or_else(|| km_to_mi(self.radius_km))
    }
}

/// A named observing location.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation_m: Option<f64>,
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load body definitions from a TOML file, a directory of TOML files, or a YAML list.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

/// Load observer sites from a TOML file, a directory of TOML files, or a YAML list.
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<Vec<SiteConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_toml_directory_in_sorted_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("b_mars.toml"),
            "name = \"MARS\"\nradius_km = 3389.5\nradius_mi = 2106.1\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("a_earth.toml"),
            "name = \"EARTH\"\nradius_km = 6371.0\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let bodies = load_bodies(dir.path()).expect("bodies");
        let names: Vec<_> = bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["EARTH", "MARS"]);
        assert!((bodies[0].radius_mi() - 3958.76).abs() < 0.01);
        assert_eq!(bodies[1].radius_mi(), 2106.1);
    }

    #[test]
    fn loads_yaml_site_list() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sites.yaml");
        fs::write(
            &path,
            "- name: Greenwich\n  latitude: 51.4769\n  longitude: 0.0\n  elevation_m: 46\n\
             - name: Quito\n  latitude: -0.1807\n  longitude: -78.4678\n",
        )
        .unwrap();

        let sites = load_sites(&path).expect("sites");
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].elevation_m, Some(46.0));
        assert_eq!(sites[1].elevation_m, None);
        assert_eq!(sites[1].longitude, -78.4678);
    }

    #[test]
    fn single_toml_file_yields_one_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("moon.toml");
        fs::write(&path, "name = \"MOON\"\nradius_km = 1737.4\n").unwrap();
        let bodies = load_bodies(&path).expect("bodies");
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].name, "MOON");
    }

    #[test]
    fn malformed_and_missing_files_surface_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "name = \n").unwrap();
        assert!(matches!(load_bodies(&path), Err(ConfigError::Toml(_))));
        assert!(matches!(
            load_sites(dir.path().join("absent.yaml")),
            Err(ConfigError::Io(_))
        ));
    }
}
