pub const DEFAULT_API_HOST: &str = "https://api.steampowered.com";

/// Environment variable `Client::from_env` reads the access key from
pub const API_KEY_ENV: &str = "STEAM_API_KEY";

/// Environment variable `Client::from_env` reads an alternative API host from
pub const API_HOST_ENV: &str = "STEAM_API_HOST";

pub const ID_CS_GO: u32 = 710;
pub const ID_CS_SOURCE: u32 = 260;
pub const ID_DOTA: u32 = 570;
pub const ID_DOTA_BETA_TEST: u32 = 205790;
pub const ID_DOTA_TEST: u32 = 816;
pub const ID_PORTAL_2: u32 = 620;
pub const ID_PORTAL_2_BETA: u32 = 841;
pub const ID_TF2: u32 = 440;
pub const ID_TF2_BETA: u32 = 520;

/// Return every relationship kind of the user
pub const RELATIONSHIP_ALL: &str = "all";

/// Return only confirmed friends
pub const RELATIONSHIP_FRIEND: &str = "friend";

/// Value of the `count` parameter sent with `GetGlobalStatsForGame`
pub const GLOBAL_STATS_COUNT: u32 = 1;
