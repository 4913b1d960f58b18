/// Identifier of an authenticated user, taken from the `sub` claim of the
/// bearer token. Users themselves are owned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Offset pagination window. Unsigned fields make negative values
/// unrepresentable; the transport rejects them before this is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: u32,
    pub take: u32,
}

impl PageRequest {
    pub fn new(skip: u32, take: u32) -> Self {
        Self { skip, take }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_subject_claim_verbatim() {
        let user_id = UserId::new("6f1c2a4e-user");

        assert_eq!(user_id.as_str(), "6f1c2a4e-user");
        assert_eq!(user_id.to_string(), "6f1c2a4e-user");
    }

    #[test]
    fn should_build_page_request() {
        assert_eq!(PageRequest::new(10, 5), PageRequest { skip: 10, take: 5 });
    }
}
