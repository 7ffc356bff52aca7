use crate::config::structs::metadata_config::MetadataConfig;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl MetadataConfig {
    pub fn has_java_version(&self, id: &str) -> bool {
        self.java_versions.iter().any(|known| known == id)
    }

    pub fn has_language(&self, id: &str) -> bool {
        self.languages.iter().any(|known| known == id)
    }

    pub fn has_packaging(&self, id: &str) -> bool {
        self.packagings.iter().any(|known| known == id)
    }

    pub fn has_type(&self, id: &str) -> bool {
        self.types.iter().any(|known| known == id)
    }

    pub fn has_dependency(&self, id: &str) -> bool {
        self.dependencies.iter().any(|known| known == id)
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        MetadataConfig {
            java_versions: strings(&["1.8", "11", "17", "21", "24"]),
            languages: strings(&["java", "kotlin", "groovy"]),
            packagings: strings(&["jar", "war"]),
            types: strings(&["maven-project", "gradle-project", "gradle-project-kotlin", "maven-build", "gradle-build"]),
            dependencies: strings(&[
                "web", "webflux", "security", "actuator", "devtools", "lombok", "validation",
                "configuration-processor", "data-jpa", "data-jdbc", "data-redis", "data-mongodb",
                "postgresql", "mysql", "h2", "flyway", "liquibase", "thymeleaf", "cache", "mail",
                "amqp", "kafka", "cloud-config-client", "cloud-eureka",
            ]),
        }
    }
}
