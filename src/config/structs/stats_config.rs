use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatsConfig {
    /// Disables the listener entirely when `false`; events are still accepted.
    pub enabled: bool,
    /// Text file holding the total number of generated projects.
    pub counter_path: String,
    pub bus_capacity: usize,
}
