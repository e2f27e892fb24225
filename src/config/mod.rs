use crate::core::chart::ChartColors;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_widget_amount")]
    pub widget_amount: usize,
    #[serde(default = "default_color_pro")]
    pub color_pro: String,
    #[serde(default = "default_color_contra")]
    pub color_contra: String,
    #[serde(default = "default_heading")]
    pub heading: String,
    #[serde(default = "default_pro_text")]
    pub pro_text: String,
    #[serde(default = "default_contra_text")]
    pub contra_text: String,
    #[serde(default = "default_exists_text")]
    pub exists_text: String,
    #[serde(default)]
    pub hide_if_voted: bool,
}

fn default_widget_amount() -> usize {
    3
}
fn default_color_pro() -> String {
    "#88c057".to_string()
}
fn default_color_contra() -> String {
    "#ed7161".to_string()
}
fn default_heading() -> String {
    "Was this helpful?".to_string()
}
fn default_pro_text() -> String {
    "Yes".to_string()
}
fn default_contra_text() -> String {
    "No".to_string()
}
fn default_exists_text() -> String {
    "Thanks, you have already voted.".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            widget_amount: default_widget_amount(),
            color_pro: default_color_pro(),
            color_contra: default_color_contra(),
            heading: default_heading(),
            pro_text: default_pro_text(),
            contra_text: default_contra_text(),
            exists_text: default_exists_text(),
            hide_if_voted: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("helpmeter")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".helpmeter")
        }
    }

    /// Return the full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("helpmeter.conf")
    }

    /// Return the full path of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("helpmeter.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Colors handed to the chart payload builders.
    pub fn chart_colors(&self) -> ChartColors {
        ChartColors {
            pro: self.color_pro.clone(),
            contra: self.color_contra.clone(),
        }
    }

    /// Initialize configuration and database files.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialization failed: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// Verify that the stored config file parses and lists all fields.
    /// Returns the missing field names (serde defaults would fill them in
    /// silently on load).
    pub fn check_file() -> io::Result<Vec<&'static str>> {
        let content = fs::read_to_string(Self::config_file())?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| io::Error::other(format!("config parse failed: {e}")))?;

        let fields = [
            "database",
            "widget_amount",
            "color_pro",
            "color_contra",
            "heading",
            "pro_text",
            "contra_text",
            "exists_text",
            "hide_if_voted",
        ];

        Ok(fields
            .into_iter()
            .filter(|f| value.get(f).is_none())
            .collect())
    }
}
