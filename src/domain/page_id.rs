/// The pages the admin console can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Login,
    Dashboard,
    Users,
    Listings,
}

impl PageId {
    pub const ALL: [PageId; 4] = [
        PageId::Login,
        PageId::Dashboard,
        PageId::Users,
        PageId::Listings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Login => "login",
            PageId::Dashboard => "dashboard",
            PageId::Users => "users",
            PageId::Listings => "listings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageId::Login => "Admin login",
            PageId::Dashboard => "Admin dashboard",
            PageId::Users => "Users",
            PageId::Listings => "Listings",
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
