use std::fmt::{
    Display,
    Formatter,
    Result,
};

use crate::ac::principal::Principal;
use super::Agent;

impl Agent {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Agent::Anonymous => None,
            Agent::Principal(principal) => Some(principal),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Agent::Anonymous)
    }
}

impl From<Principal> for Agent {
    fn from(principal: Principal) -> Agent {
        Agent::Principal(principal)
    }
}

impl From<Option<Principal>> for Agent {
    fn from(principal: Option<Principal>) -> Agent {
        principal.map(Agent::Principal)
            .unwrap_or(Agent::Anonymous)
    }
}

impl From<Agent> for Option<Principal> {
    fn from(agent: Agent) -> Self {
        match agent {
            Agent::Anonymous => None,
            Agent::Principal(principal) => Some(principal),
        }
    }
}

impl Display for Agent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Agent::Anonymous => write!(f, "<Agent:Anonymous>"),
            Agent::Principal(Principal { id, .. }) => write!(f, "<Principal:{id}>"),
        }
    }
}
