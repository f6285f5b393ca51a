use shared_types::{DirectoryLoan, DirectoryMember, MemberDirectory};

/// The member roster shipped with the portal.
///
/// Stands in for a real directory service until the backend exposes one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BuiltinDirectory;

struct Fixture {
    full_name: &'static str,
    library_id: &'static str,
    phone_number: &'static str,
    username: &'static str,
    password: &'static str,
    loans: &'static [(&'static str, &'static str)],
}

const ROSTER: &[Fixture] = &[
    Fixture {
        full_name: "Jugadbeer Sangha",
        library_id: "501098645",
        phone_number: "678-999-8212",
        username: "j5sangha",
        password: "testpassword1!",
        loans: &[("Yotsuba&! Vol. 1", "21-04-2025"), ("Look Back", "19-04-2025")],
    },
    Fixture {
        full_name: "Nivaethan Piratheepan",
        library_id: "501099180",
        phone_number: "718-808-8342",
        username: "n7piratheepan",
        password: "testpassword2@",
        loans: &[("Spider-Man Vol. 1", "17-04-2025")],
    },
    Fixture {
        full_name: "Lalith Ravichandran",
        library_id: "501086076",
        phone_number: "407-224-1783",
        username: "l2ravichandran",
        password: "testpassword3#",
        loans: &[("Invincible Vol. 12", "01-04-2025")],
    },
    Fixture {
        full_name: "Simrat Gill",
        library_id: "501100893",
        phone_number: "609-582-4912",
        username: "s9gill",
        password: "testpassword4$",
        loans: &[("Slam Dunk Vol. 12", "05-04-2025")],
    },
];

impl Fixture {
    fn to_member(&self) -> DirectoryMember {
        DirectoryMember {
            full_name: self.full_name.to_string(),
            library_id: self.library_id.to_string(),
            phone_number: self.phone_number.to_string(),
            username: self.username.to_string(),
            password: self.password.to_string(),
            borrowed_books: self
                .loans
                .iter()
                .map(|(title, renewal_date)| DirectoryLoan {
                    title: title.to_string(),
                    renewal_date: renewal_date.to_string(),
                })
                .collect(),
        }
    }
}

impl MemberDirectory for BuiltinDirectory {
    fn members(&self) -> Vec<DirectoryMember> {
        ROSTER.iter().map(Fixture::to_member).collect()
    }
}
