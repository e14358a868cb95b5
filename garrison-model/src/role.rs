use serde::{Deserialize, Serialize};

/// User role enumeration for the admin console
///
/// Roles arrive from the server as snake_case codes. Codes the console does
/// not know about are preserved verbatim in `Other` so they round-trip
/// unchanged and still render (falling back to the raw code as a label).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Full administrative access; cannot be deleted from the console
    Admin,
    /// Commands a single base
    BaseCommander,
    /// Manages logistics for a base
    LogisticsOfficer,
    /// Read-mostly analytical access
    Analyst,
    /// Regular user with basic permissions
    User,
    /// Unrecognized role code, preserved as-is
    Other(String),
}

impl Role {
    /// Roles the create/edit form may assign.
    pub const ASSIGNABLE: [Role; 3] =
        [Role::Admin, Role::BaseCommander, Role::LogisticsOfficer];

    /// The wire-format role code.
    pub fn code(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::BaseCommander => "base_commander",
            Role::LogisticsOfficer => "logistics_officer",
            Role::Analyst => "analyst",
            Role::User => "user",
            Role::Other(code) => code,
        }
    }

    /// Human-readable label; unknown codes fall back to the raw code.
    pub fn label(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::BaseCommander => "Base Commander",
            Role::LogisticsOfficer => "Logistics Officer",
            Role::Analyst => "Analyst",
            Role::User => "User",
            Role::Other(code) => code,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<String> for Role {
    fn from(code: String) -> Self {
        match code.as_str() {
            "admin" => Role::Admin,
            "base_commander" => Role::BaseCommander,
            "logistics_officer" => Role::LogisticsOfficer,
            "analyst" => Role::Analyst,
            "user" => Role::User,
            _ => Role::Other(code),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.code().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_known_codes() {
        assert_eq!(Role::Admin.label(), "Admin");
        assert_eq!(Role::BaseCommander.label(), "Base Commander");
        assert_eq!(Role::LogisticsOfficer.label(), "Logistics Officer");
        assert_eq!(Role::Analyst.label(), "Analyst");
        assert_eq!(Role::User.label(), "User");
    }

    #[test]
    fn unknown_code_falls_back_to_raw_code() {
        let role = Role::from("quartermaster".to_string());
        assert_eq!(role, Role::Other("quartermaster".to_string()));
        assert_eq!(role.label(), "quartermaster");
        assert_eq!(role.code(), "quartermaster");
    }

    #[test]
    fn serde_round_trips_known_and_unknown_codes() {
        let known: Role = serde_json::from_str("\"base_commander\"").unwrap();
        assert_eq!(known, Role::BaseCommander);
        assert_eq!(serde_json::to_string(&known).unwrap(), "\"base_commander\"");

        let unknown: Role = serde_json::from_str("\"quartermaster\"").unwrap();
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"quartermaster\"");
    }

    #[test]
    fn assignable_roles_exclude_analyst_and_user() {
        assert!(Role::ASSIGNABLE.contains(&Role::Admin));
        assert!(Role::ASSIGNABLE.contains(&Role::BaseCommander));
        assert!(Role::ASSIGNABLE.contains(&Role::LogisticsOfficer));
        assert!(!Role::ASSIGNABLE.contains(&Role::Analyst));
        assert!(!Role::ASSIGNABLE.contains(&Role::User));
    }
}
