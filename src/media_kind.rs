use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    // how many captures we keep around before evicting the oldest one
    pub fn max_files(&self) -> usize {
        match self {
            MediaKind::Video => 3,
            MediaKind::Image => 25,
        }
    }

    pub fn file_prefix(&self) -> &'static str {
        match self {
            MediaKind::Video => "VID",
            MediaKind::Image => "IMG",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Video => "mp4",
            MediaKind::Image => "jpg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaKind::Video => "video/mp4",
            MediaKind::Image => "image/jpeg",
        }
    }

    // where a sink files this kind of capture, relative to the sink root
    pub fn relative_dir(&self) -> &'static str {
        match self {
            MediaKind::Video => "Movies/VoiceCam",
            MediaKind::Image => "Pictures/VoiceCam",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::media_kind::MediaKind;

    #[test]
    fn string_round_trip() {
        assert_eq!(MediaKind::Video.to_string(), "video");
        assert_eq!("image".parse::<MediaKind>().unwrap(), MediaKind::Image);
        assert!("audio".parse::<MediaKind>().is_err());
    }

    #[test]
    fn capacities() {
        assert_eq!(MediaKind::Video.max_files(), 3);
        assert_eq!(MediaKind::Image.max_files(), 25);
    }
}
