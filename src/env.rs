//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量访问，作为配置文件与命令行参数之间的一层

use std::env;
use std::fmt;

use crate::compressor::CodecKind;
use crate::config::TransformConfig;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 带名称、默认值和说明的类型化环境变量
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    /// Value when the variable is set, `None` when it is not
    fn get_set() -> EnvResult<Option<T>> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value).map(Some),
            Err(_) => Ok(None),
        }
    }
}

/// 日志与终端输出
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "INTERNALIZE_LOG_LEVEL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }

    /// 禁用颜色输出
    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> EnvResult<bool> {
            // NO_COLOR 遵循标准：任何非空值都表示禁用颜色
            Ok(!value.is_empty())
        }
    }
}

/// 转换相关环境变量
pub mod transform {
    use super::*;

    /// 源目录
    pub struct SourceFolder;
    impl EnvVar<String> for SourceFolder {
        const NAME: &'static str = "INTERNALIZE_SOURCE_FOLDER";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Prefix for every resolved asset path";

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.to_string())
        }
    }

    /// CSS url() 额外前缀
    pub struct CssPath;
    impl EnvVar<String> for CssPath {
        const NAME: &'static str = "INTERNALIZE_CSS_PATH";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Extra prefix for CSS url(...) references";

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.to_string())
        }
    }

    /// 压缩输出中的版本标记
    pub struct Version;
    impl EnvVar<String> for Version {
        const NAME: &'static str = "INTERNALIZE_VERSION";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Version tag echoed into compressed payloads";

        fn parse(value: &str) -> EnvResult<String> {
            let version = value.trim();
            if version.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Version tag cannot be empty".to_string(),
                });
            }
            Ok(version.to_string())
        }
    }

    /// 区域压缩编解码器
    pub struct Codec;
    impl EnvVar<CodecKind> for Codec {
        const NAME: &'static str = "INTERNALIZE_CODEC";
        const DEFAULT: Option<CodecKind> = Some(CodecKind::LzString);
        const DESCRIPTION: &'static str = "Region codec: lz-string, deflate";

        fn parse(value: &str) -> EnvResult<CodecKind> {
            value.trim().parse().map_err(|message| EnvError {
                variable: Self::NAME.to_string(),
                message,
            })
        }
    }
}

/// 从环境变量加载的配置
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log_level: String,
    pub no_color: bool,
    pub source_folder: Option<String>,
    pub css_path: Option<String>,
    pub version: Option<String>,
    pub codec: Option<CodecKind>,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            log_level: core::LogLevel::get()?,
            no_color: core::NoColor::get()?,
            source_folder: transform::SourceFolder::get_set()?,
            css_path: transform::CssPath::get_set()?,
            version: transform::Version::get_set()?,
            codec: transform::Codec::get_set()?,
        })
    }

    /// The transform-related part, ready to be merged over a file config
    pub fn transform_overrides(&self) -> TransformConfig {
        TransformConfig {
            source_folder: self.source_folder.clone().unwrap_or_default(),
            css_path: self.css_path.clone().unwrap_or_default(),
            version: self.version.clone(),
            codec: self.codec,
            ..TransformConfig::default()
        }
    }
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables\n\n");

    docs.push_str("## Core\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: \"info\")\n",
        core::LogLevel::NAME,
        core::LogLevel::DESCRIPTION
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        core::NoColor::NAME,
        core::NoColor::DESCRIPTION,
        core::NoColor::DEFAULT
    ));

    docs.push_str("\n## Transform\n\n");
    for (name, description) in [
        (transform::SourceFolder::NAME, transform::SourceFolder::DESCRIPTION),
        (transform::CssPath::NAME, transform::CssPath::DESCRIPTION),
        (transform::Version::NAME, transform::Version::DESCRIPTION),
        (transform::Codec::NAME, transform::Codec::DESCRIPTION),
    ] {
        docs.push_str(&format!("- `{}`: {}\n", name, description));
    }

    docs
}
