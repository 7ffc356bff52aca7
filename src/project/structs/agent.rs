use crate::project::enums::agent_id::AgentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub id: AgentId,
    pub version: Option<String>,
}
