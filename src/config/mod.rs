use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the whitelist text files (one category per line).
    pub lists_dir: String,
    /// Source index (1-based, the position of the file on the command
    /// line) to whitelist base name, e.g. 1 -> "APAMA_ALID". Sources with
    /// no mapping are not filtered.
    #[serde(default)]
    pub whitelists: BTreeMap<usize, String>,
    /// Attribute timestamps before 06:00 to the previous workday by default.
    #[serde(default)]
    pub workday_attribution: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lists_dir: Self::lists_dir_path().to_string_lossy().to_string(),
            whitelists: BTreeMap::new(),
            workday_attribution: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftpivot")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftpivot")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftpivot.conf")
    }

    /// Return the default whitelist directory
    pub fn lists_dir_path() -> PathBuf {
        Self::config_dir().join("lists")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration file and lists directory
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        fs::create_dir_all(Self::lists_dir_path())?;

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Lists dir:   {:?}", Self::lists_dir_path());

        Ok(())
    }

    /// Check the loaded configuration for obvious problems; returns the
    /// list of human-readable findings (empty = all good).
    pub fn check(&self) -> Vec<String> {
        let mut findings = Vec::new();

        let lists = crate::utils::path::expand_tilde(&self.lists_dir);
        if !lists.exists() {
            findings.push(format!("lists_dir does not exist: {}", lists.display()));
        }

        for (idx, name) in &self.whitelists {
            if *idx == 0 {
                findings.push("whitelist source indexes are 1-based; 0 is never used".into());
            }
            let file = lists.join(format!("{name}.txt"));
            if !file.exists() {
                findings.push(format!(
                    "whitelist for source {} not found: {}",
                    idx,
                    file.display()
                ));
            }
        }

        findings
    }
}
