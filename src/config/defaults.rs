pub const SHARE_URL: &str = "https://qishui.douyin.com/s/imf2hxgy/";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

pub const TIMEOUT_SECS: u64 = 15;

pub const MAX_REDIRECTS: usize = 10;

pub const FIELDS: [&str; 14] = [
    "track_id",
    "trackName",
    "artistName",
    "duration",
    "url",
    "lyrics",
    "songMakerTeamSentences",
    "backgroundColor",
    "gradientBackgroundColor",
    "vid",
    "hasCopyright",
    "status_code",
    "artistIdStr",
    "kid",
];

pub fn fields() -> Vec<String> {
    FIELDS.iter().map(|f| f.to_string()).collect()
}
