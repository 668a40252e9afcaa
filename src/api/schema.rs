use serde::{Serialize, Deserialize};

// Fields which are missing in the response are filled with default values,
// unknown fields are ignored

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AppListResponse {
    pub applist: AppList
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AppList {
    pub apps: Vec<App>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    #[serde(rename = "appid")]
    pub app_id: u32,

    pub name: String
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AppNewsResponse {
    pub appnews: AppNews
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AppNews {
    #[serde(rename = "appid")]
    pub app_id: u32,

    #[serde(rename = "newsitems")]
    pub news_items: Vec<NewsItem>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub gid: String,
    pub title: String,
    pub url: String,
    pub is_external_url: bool,
    pub author: String,
    pub contents: String,

    #[serde(rename = "feedlabel")]
    pub feed_label: String,

    /// Unix timestamp, in seconds
    pub date: u64,

    #[serde(rename = "feedname")]
    pub feed_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendsListResponse {
    pub friendslist: FriendsList
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendsList {
    pub friends: Vec<Friend>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Friend {
    #[serde(rename = "steamid")]
    pub steam_id: String,

    pub relationship: String,

    /// Unix timestamp, in seconds
    pub friend_since: u64
}
