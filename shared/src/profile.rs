/// A selectable persona. The catalog is fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
}

pub const CATALOG: [Profile; 3] = [
    Profile {
        id: 1,
        name: "기본 프로필",
        image: "/assets/image/basic.svg",
    },
    Profile {
        id: 2,
        name: "대학생",
        image: "/assets/image/student.svg",
    },
    Profile {
        id: 3,
        name: "개발자",
        image: "/assets/image/adult.svg",
    },
];

pub fn find_profile(id: u32) -> Option<Profile> {
    CATALOG.iter().copied().find(|profile| profile.id == id)
}
