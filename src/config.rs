use serde::Deserialize;

// 名字最多保留的字节数，超出的截掉
pub const DEFAULT_MAX_NAME_LEN: usize = 99;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub max_name_len: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ ChainConfig, DEFAULT_MAX_NAME_LEN };

    #[test]
    fn default_limit() {
        assert_eq!(ChainConfig::default().max_name_len, DEFAULT_MAX_NAME_LEN);
    }

    #[test]
    fn deserialize_partial() {
        let config: ChainConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ChainConfig::default());

        let config: ChainConfig = serde_json::from_str(r#"{"max_name_len":3}"#).unwrap();
        assert_eq!(config, ChainConfig { max_name_len: 3 });
    }
}
