use crate::project::enums::agent_id::AgentId;

impl AgentId {
    pub const ALL: [AgentId; 11] = [
        AgentId::Curl,
        AgentId::Httpie,
        AgentId::JbossForge,
        AgentId::SpringBootCli,
        AgentId::Sts,
        AgentId::IntellijIdea,
        AgentId::Netbeans,
        AgentId::VsCode,
        AgentId::JenkinsX,
        AgentId::NbSpringBoot,
        AgentId::Browser,
    ];

    pub fn id(&self) -> &'static str
    {
        match self {
            AgentId::Curl => "curl",
            AgentId::Httpie => "httpie",
            AgentId::JbossForge => "jbossforge",
            AgentId::SpringBootCli => "spring",
            AgentId::Sts => "sts",
            AgentId::IntellijIdea => "intellijidea",
            AgentId::Netbeans => "netbeans",
            AgentId::VsCode => "vscode",
            AgentId::JenkinsX => "jenkinsx",
            AgentId::NbSpringBoot => "nb-springboot-plugin",
            AgentId::Browser => "browser",
        }
    }

    pub fn name(&self) -> &'static str
    {
        match self {
            AgentId::Curl => "curl",
            AgentId::Httpie => "HTTPie",
            AgentId::JbossForge => "SpringBootForgeCli",
            AgentId::SpringBootCli => "SpringBootCli",
            AgentId::Sts => "STS",
            AgentId::IntellijIdea => "IntelliJ IDEA",
            AgentId::Netbeans => "NetBeans",
            AgentId::VsCode => "vscode",
            AgentId::JenkinsX => "jx",
            AgentId::NbSpringBoot => "nb-springboot-plugin",
            AgentId::Browser => "Browser",
        }
    }

    pub fn from_name(name: &str) -> Option<AgentId>
    {
        AgentId::ALL.into_iter().find(|agent| agent.name() == name)
    }
}
