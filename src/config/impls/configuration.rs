use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::metadata_config::MetadataConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::stats_config::StatsConfig;

const METADATA_ID_REGEX: &str = r"^[A-Za-z0-9][A-Za-z0-9._-]*$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            api_key: String::from("MyApiKey"),
            stats: StatsConfig::default(),
            metadata: MetadataConfig::default(),
            api_server: vec!(ApiServerConfig::default()),
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        let config = Self::load(data.as_slice())?;
        Ok(config)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => {
                        eprintln!("{e}");
                        return Err(CustomError::new("could not serialize the default configuration"));
                    }
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} file, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE CONFIG] {error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level \"{}\"", self.log_level)));
        }
        if self.stats.counter_path.trim().is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[stats] counter_path is empty")));
        }
        if self.stats.bus_capacity == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[stats] bus_capacity must be at least 1")));
        }
        for api_server in &self.api_server {
            if api_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("[api_server] invalid bind_address \"{}\"", api_server.bind_address)));
            }
        }

        let check_map = vec![
            ("[metadata] java_versions", &self.metadata.java_versions),
            ("[metadata] languages", &self.metadata.languages),
            ("[metadata] packagings", &self.metadata.packagings),
            ("[metadata] types", &self.metadata.types),
            ("[metadata] dependencies", &self.metadata.dependencies),
        ];
        let regex_check = Regex::new(METADATA_ID_REGEX)
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        for (name, values) in check_map {
            for value in values {
                Self::validate_value(name, value, &regex_check)?;
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex_check: &Regex) -> Result<(), ConfigurationError>
    {
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check
            )));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
