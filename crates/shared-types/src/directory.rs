use serde::{Deserialize, Serialize};

/// Text shown in place of a password when credentials are not revealed.
pub const MASKED_CREDENTIAL: &str = "••••••••";

/// A loan as listed in the admin directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryLoan {
    pub title: String,
    pub renewal_date: String,
}

/// A library member as presented to administrators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryMember {
    pub full_name: String,
    pub library_id: String,
    pub phone_number: String,
    pub username: String,
    pub password: String,
    pub borrowed_books: Vec<DirectoryLoan>,
}

impl DirectoryMember {
    /// Entry in the master list, e.g. `Simrat Gill (501100893)`.
    pub fn list_label(&self) -> String {
        format!("{} ({})", self.full_name, self.library_id)
    }

    /// The password, masked unless `reveal` is set.
    pub fn password_display(&self, reveal: bool) -> &str {
        if reveal {
            &self.password
        } else {
            MASKED_CREDENTIAL
        }
    }
}

/// Source of member records for the admin view.
pub trait MemberDirectory {
    fn members(&self) -> Vec<DirectoryMember>;

    fn find_by_library_id(&self, library_id: &str) -> Option<DirectoryMember> {
        self.members()
            .into_iter()
            .find(|member| member.library_id == library_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneMember;

    impl MemberDirectory for OneMember {
        fn members(&self) -> Vec<DirectoryMember> {
            vec![DirectoryMember {
                full_name: "Simrat Gill".to_string(),
                library_id: "501100893".to_string(),
                phone_number: "609-582-4912".to_string(),
                username: "s9gill".to_string(),
                password: "hunter2".to_string(),
                borrowed_books: vec![],
            }]
        }
    }

    #[test]
    fn find_by_library_id_uses_members() {
        let dir = OneMember;
        assert_eq!(
            dir.find_by_library_id("501100893").map(|m| m.username),
            Some("s9gill".to_string())
        );
        assert!(dir.find_by_library_id("000").is_none());
    }

    #[test]
    fn password_is_masked_unless_revealed() {
        let member = OneMember.members().remove(0);
        assert_eq!(member.password_display(false), MASKED_CREDENTIAL);
        assert_eq!(member.password_display(true), "hunter2");
        assert_eq!(member.list_label(), "Simrat Gill (501100893)");
    }
}
