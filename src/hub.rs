use std::fmt;

use log::warn;
use serde::Serialize;

use crate::config::ChainConfig;
use crate::error::ChainError;

// 中转站
// distance是距上一站的公里数，起点一般是0
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hub {
    name: String,
    distance: u32,
    hour: u8,
}

impl Hub {
    pub const LAST_HOUR: u8 = 23;

    pub fn new(
        name: &str,
        distance: u32,
        hour: u8,
        config: &ChainConfig
    ) -> Result<Self, ChainError> {
        if hour > Self::LAST_HOUR {
            return Err(ChainError::InvalidHour(hour));
        }

        let kept = truncate(name, config.max_name_len);
        if kept.is_empty() {
            return Err(ChainError::EmptyName);
        }
        if kept.len() < name.len() {
            warn!("Hub name truncated to {} bytes: {}", kept.len(), kept);
        }

        // 名字缓冲区用try_reserve申请，申请失败就报错而不是直接abort
        let mut owned = String::new();
        owned.try_reserve_exact(kept.len()).map_err(|_| ChainError::OutOfMemory)?;
        owned.push_str(kept);

        Ok(Hub {
            name: owned,
            distance,
            hour,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    // 区分大小写的子串匹配
    pub fn matches(&self, keyword: &str) -> bool {
        self.name.contains(keyword)
    }
}

// 按字节截断，但要落在字符边界上
fn truncate(name: &str, max_len: usize) -> &str {
    if name.len() <= max_len {
        return name;
    }
    let mut end = max_len;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

impl fmt::Display for Hub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} km, {}h", self.name, self.distance, self.hour)
    }
}

#[cfg(test)]
mod test {
    use super::Hub;
    use crate::config::ChainConfig;
    use crate::error::ChainError;

    #[test]
    fn line_format() {
        let hub = Hub::new("Atlanta", 400, 14, &ChainConfig::default()).unwrap();
        assert_eq!(hub.to_string(), "Atlanta - 400 km, 14h");
    }

    #[test]
    fn rejects_bad_input() {
        let config = ChainConfig::default();
        assert_eq!(Hub::new("Late", 10, 24, &config), Err(ChainError::InvalidHour(24)));
        assert_eq!(Hub::new("", 10, 3, &config), Err(ChainError::EmptyName));
        assert!(Hub::new("Midnight", 0, 0, &config).is_ok());
        assert!(Hub::new("Last", 0, 23, &config).is_ok());
    }

    #[test]
    fn truncation() {
        let config = ChainConfig { max_name_len: 4 };
        let hub = Hub::new("Charlotte", 350, 17, &config).unwrap();
        assert_eq!(hub.name(), "Char");

        // "é"占两个字节，不能从中间截断
        let hub = Hub::new("Orléans", 0, 9, &config).unwrap();
        assert_eq!(hub.name(), "Orl");

        let config = ChainConfig { max_name_len: 0 };
        assert_eq!(Hub::new("Orlando", 0, 9, &config), Err(ChainError::EmptyName));
    }

    #[test]
    fn matches_is_case_sensitive() {
        let hub = Hub::new("Atlanta", 400, 14, &ChainConfig::default()).unwrap();
        assert!(hub.matches("lanta"));
        assert!(hub.matches(""));
        assert!(!hub.matches("LANTA"));
    }
}
